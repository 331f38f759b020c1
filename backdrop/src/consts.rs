//! Shared numeric constants for the backdrop crate.

// ── Sizing ──────────────────────────────────────────────────────

/// Smallest CSS width the field is laid out for, even if the element is narrower.
pub const MIN_WIDTH_CSS: f64 = 320.0;

/// Smallest CSS height the field is laid out for.
pub const MIN_HEIGHT_CSS: f64 = 260.0;

/// Device pixel ratio bounds.
pub const MIN_DPR: f64 = 1.0;
pub const MAX_DPR: f64 = 2.0;

// ── Particles ───────────────────────────────────────────────────

/// CSS pixels of area per particle.
pub const AREA_PER_PARTICLE: f64 = 16_000.0;

/// Hard cap on particle count.
pub const MAX_PARTICLES: usize = 160;

/// Velocity components are drawn from `[-MAX_SPEED / 2, MAX_SPEED / 2)`.
pub const MAX_SPEED: f64 = 0.35;

/// Particle radius range in CSS pixels.
pub const MIN_RADIUS: f64 = 0.6;
pub const RADIUS_SPREAD: f64 = 1.6;

/// Particles travel this far past an edge before wrapping to the opposite side.
pub const WRAP_MARGIN: f64 = 10.0;

// ── Links ───────────────────────────────────────────────────────

/// Particles closer than this (CSS pixels) are joined by a line.
pub const LINK_DISTANCE: f64 = 120.0;

/// Opacity of a link between two coincident particles.
pub const LINK_MAX_ALPHA: f64 = 0.25;

/// Link stroke width in CSS pixels.
pub const LINK_WIDTH: f64 = 1.0;

// ── Wash gradient ───────────────────────────────────────────────

/// Inner circle of the radial wash, as fractions of width/height plus a fixed radius.
pub const WASH_INNER_X: f64 = 0.35;
pub const WASH_INNER_Y: f64 = 0.3;
pub const WASH_INNER_RADIUS: f64 = 10.0;

/// Outer circle of the radial wash. Radius is a fraction of the longer side.
pub const WASH_OUTER_X: f64 = 0.5;
pub const WASH_OUTER_Y: f64 = 0.6;
pub const WASH_OUTER_RADIUS: f64 = 0.9;
