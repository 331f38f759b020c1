use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::ParticleField;
use crate::palette::Palette;
use crate::render;
use crate::viewport::CanvasSize;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: everything that does not need the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub field: ParticleField,
    pub palette: Palette,
    pub size: Option<CanvasSize>,
    rng: SmallRng,
}

impl EngineCore {
    /// Create an empty core whose particle layout is driven by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            field: ParticleField::new(),
            palette: Palette::default(),
            size: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Apply a measured element box. Returns the new size when the layout changed
    /// and particles were rebuilt, `None` when nothing needed doing.
    pub fn resize(&mut self, rect_width: f64, rect_height: f64, raw_dpr: f64) -> Option<CanvasSize> {
        let next = CanvasSize::from_rect(rect_width, rect_height, raw_dpr);
        if self.size.is_some_and(|prev| prev.same_layout(&next)) {
            return None;
        }
        self.size = Some(next);
        self.field.resize(next.css_width, next.css_height, &mut self.rng);
        Some(next)
    }

    /// Switch palette to match the page theme.
    pub fn set_dark(&mut self, dark: bool) {
        self.palette = Palette::for_theme(dark);
    }

    /// Advance the simulation one frame.
    pub fn tick(&mut self) {
        self.field.step();
    }
}

/// The full backdrop engine. Wraps `EngineCore` and owns the canvas and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind to a canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let seed = js_sys::Math::random().to_bits();
        Ok(Self { canvas, ctx, core: EngineCore::with_seed(seed) })
    }

    /// Measure the canvas and, if its layout changed, resize the backing store
    /// and rebuild the particles. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a style or transform call fails.
    pub fn sync_size(&mut self) -> Result<bool, JsValue> {
        let rect = self.canvas.get_bounding_client_rect();
        let raw_dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let Some(size) = self.core.resize(rect.width(), rect.height(), raw_dpr) else {
            return Ok(false);
        };
        self.canvas.set_width(size.backing_width);
        self.canvas.set_height(size.backing_height);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", size.css_width))?;
        style.set_property("height", &format!("{}px", size.css_height))?;
        self.ctx.set_transform(size.dpr, 0.0, 0.0, size.dpr, 0.0, 0.0)?;
        Ok(true)
    }

    /// Step the simulation and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.core.tick();
        render::draw(&self.ctx, &self.core.field, &self.core.palette)
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.core.set_dark(dark);
    }

    /// Whether the canvas currently occupies no rendered area.
    #[must_use]
    pub fn has_zero_area(&self) -> bool {
        let rect = self.canvas.get_bounding_client_rect();
        rect.width() <= 0.0 || rect.height() <= 0.0
    }
}
