//! Theme-dependent colors for the wash, particles and links.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Transparent center stop of the radial wash.
pub const WASH_CLEAR: &str = "rgba(0,0,0,0)";

/// RGB channels of the link lines; alpha varies per link.
const LINK_RGB: &str = "180,190,220";

/// Wash edge color and particle fill for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub ink: &'static str,
    pub glow: &'static str,
}

pub const LIGHT: Palette = Palette { ink: "rgba(60,90,180,0.22)", glow: "rgba(202,164,90,0.55)" };
pub const DARK: Palette = Palette { ink: "rgba(120,155,255,0.35)", glow: "rgba(202,164,90,0.55)" };

impl Palette {
    #[must_use]
    pub fn for_theme(dark: bool) -> Self {
        if dark { DARK } else { LIGHT }
    }
}

impl Default for Palette {
    fn default() -> Self {
        LIGHT
    }
}

/// CSS color for a link with the given opacity.
#[must_use]
pub fn link_color(alpha: f64) -> String {
    format!("rgba({LINK_RGB},{alpha})")
}
