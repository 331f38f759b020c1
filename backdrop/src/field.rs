//! Particle field simulation.
//!
//! Pure state: positions, velocities and radii in CSS pixels. The field is
//! rebuilt from scratch whenever its dimensions change and advanced one step
//! per animation frame. Nothing here touches the browser.

use rand::Rng;

use crate::consts::{
    AREA_PER_PARTICLE, LINK_DISTANCE, LINK_MAX_ALPHA, MAX_PARTICLES, MAX_SPEED, MIN_RADIUS, RADIUS_SPREAD,
    WRAP_MARGIN,
};

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// One drifting dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
}

impl Particle {
    /// Advance by one step, wrapping toroidally once the particle leaves the
    /// bounding box extended by [`WRAP_MARGIN`] on every side.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if value < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if value > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        value
    }
}

/// A line to draw between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

/// Link opacity for two particles `distance` apart, or `None` when too far.
#[must_use]
pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < LINK_DISTANCE {
        Some((1.0 - distance / LINK_DISTANCE) * LINK_MAX_ALPHA)
    } else {
        None
    }
}

/// Particle count for a field of the given CSS size.
#[must_use]
pub fn particle_count(width: f64, height: f64) -> usize {
    let area = (width * height).max(0.0);
    // Float-to-int `as` saturates, and NaN maps to zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (area / AREA_PER_PARTICLE).floor() as usize;
    count.min(MAX_PARTICLES)
}

/// The full set of particles for one canvas size.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field directly from known particles.
    #[must_use]
    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self { width, height, particles }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Resize the field, regenerating every particle.
    ///
    /// Returns `false` without touching anything when the size is unchanged.
    #[allow(clippy::float_cmp)]
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        let count = particle_count(width, height);
        self.particles = (0..count).map(|_| random_particle(width, height, rng)).collect();
        true
    }

    /// Advance every particle by its velocity.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// Every pair of particles within [`LINK_DISTANCE`], with its opacity.
    ///
    /// Quadratic in the particle count, which [`MAX_PARTICLES`] keeps small.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let d2 = dx * dx + dy * dy;
                if d2 >= LINK_DISTANCE * LINK_DISTANCE {
                    continue;
                }
                if let Some(alpha) = link_alpha(d2.sqrt()) {
                    out.push(Link { from: (a.x, a.y), to: (b.x, b.y), alpha });
                }
            }
        }
        out
    }
}

fn random_particle<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Particle {
    Particle {
        x: rng.random::<f64>() * width,
        y: rng.random::<f64>() * height,
        vx: (rng.random::<f64>() - 0.5) * MAX_SPEED,
        vy: (rng.random::<f64>() - 0.5) * MAX_SPEED,
        r: rng.random::<f64>() * RADIUS_SPREAD + MIN_RADIUS,
    }
}
