//! Canvas sizing: CSS box → clamped layout size and backing-store size.

use crate::consts::{MAX_DPR, MIN_DPR, MIN_HEIGHT_CSS, MIN_WIDTH_CSS};

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Clamp a raw `devicePixelRatio` into `[MIN_DPR, MAX_DPR]`.
///
/// Browsers occasionally report `0` or nothing at all; both map to 1.
#[must_use]
pub fn clamp_dpr(raw: f64) -> f64 {
    if raw.is_finite() { raw.clamp(MIN_DPR, MAX_DPR) } else { MIN_DPR }
}

/// Resolved canvas dimensions for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    /// Layout width in CSS pixels, floored and at least [`MIN_WIDTH_CSS`].
    pub css_width: f64,
    /// Layout height in CSS pixels, floored and at least [`MIN_HEIGHT_CSS`].
    pub css_height: f64,
    /// Backing-store width in device pixels.
    pub backing_width: u32,
    /// Backing-store height in device pixels.
    pub backing_height: u32,
    pub dpr: f64,
}

impl CanvasSize {
    /// Derive the canvas size from the element's rendered box and the raw pixel ratio.
    #[must_use]
    pub fn from_rect(rect_width: f64, rect_height: f64, raw_dpr: f64) -> Self {
        let dpr = clamp_dpr(raw_dpr);
        let css_width = floor_or_zero(rect_width).max(MIN_WIDTH_CSS);
        let css_height = floor_or_zero(rect_height).max(MIN_HEIGHT_CSS);
        Self {
            css_width,
            css_height,
            backing_width: to_device_px(css_width * dpr),
            backing_height: to_device_px(css_height * dpr),
            dpr,
        }
    }

    /// Whether another pass would leave the canvas untouched.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_layout(&self, other: &Self) -> bool {
        self.css_width == other.css_width && self.css_height == other.css_height && self.dpr == other.dpr
    }
}

fn floor_or_zero(v: f64) -> f64 {
    if v.is_finite() { v.floor() } else { 0.0 }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_device_px(v: f64) -> u32 {
    v.floor() as u32
}
