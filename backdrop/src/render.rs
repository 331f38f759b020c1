//! Rendering: draws one frame of the particle field to a 2D context.
//!
//! This module is the only place that draws to a [`web_sys::CanvasRenderingContext2d`].
//! It reads the field and palette and produces pixels; it never mutates
//! simulation state. Stepping happens in [`crate::engine::EngineCore::tick`].
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    LINK_WIDTH, WASH_INNER_RADIUS, WASH_INNER_X, WASH_INNER_Y, WASH_OUTER_RADIUS, WASH_OUTER_X, WASH_OUTER_Y,
};
use crate::field::ParticleField;
use crate::palette::{Palette, WASH_CLEAR, link_color};

/// Draw the full scene: wash, particles, links.
///
/// Coordinates are CSS pixels; the caller has already applied the DPR transform.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, palette: &Palette) -> Result<(), JsValue> {
    let (w, h) = (field.width(), field.height());
    ctx.clear_rect(0.0, 0.0, w, h);

    draw_wash(ctx, w, h, palette)?;
    draw_particles(ctx, field, palette)?;
    draw_links(ctx, field);
    Ok(())
}

fn draw_wash(ctx: &CanvasRenderingContext2d, w: f64, h: f64, palette: &Palette) -> Result<(), JsValue> {
    let wash = ctx.create_radial_gradient(
        w * WASH_INNER_X,
        h * WASH_INNER_Y,
        WASH_INNER_RADIUS,
        w * WASH_OUTER_X,
        h * WASH_OUTER_Y,
        w.max(h) * WASH_OUTER_RADIUS,
    )?;
    wash.add_color_stop(0.0, WASH_CLEAR)?;
    wash.add_color_stop(1.0, palette.ink)?;
    ctx.set_fill_style_canvas_gradient(&wash);
    ctx.fill_rect(0.0, 0.0, w, h);
    Ok(())
}

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField, palette: &Palette) -> Result<(), JsValue> {
    ctx.set_fill_style_str(palette.glow);
    for p in field.particles() {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.r, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

fn draw_links(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    ctx.set_line_width(LINK_WIDTH);
    for link in field.links() {
        ctx.set_stroke_style_str(&link_color(link.alpha));
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.stroke();
    }
}
