//! Particle Field
//!
//! Decorative background particles, drawn once per mount.

use rand::Rng;

/// Number of particles in the background field
pub const PARTICLE_COUNT: usize = 50;

/// A single decorative particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Horizontal position, percent of the viewport
    pub pos_x: f64,
    /// Vertical position, percent of the viewport
    pub pos_y: f64,
    /// Diameter in pixels
    pub size: f64,
    /// Float animation duration in seconds
    pub duration: f64,
    pub opacity: f64,
}

impl Particle {
    /// Draw one particle with independent uniform attributes
    pub fn random(id: usize, rng: &mut impl Rng) -> Self {
        Self {
            id,
            pos_x: rng.gen_range(0.0..=100.0),
            pos_y: rng.gen_range(0.0..=100.0),
            size: rng.gen_range(1.0..=6.0),
            duration: rng.gen_range(10.0..=30.0),
            opacity: rng.gen_range(0.1..=0.6),
        }
    }

    /// Inline CSS for the particle element
    pub fn style(&self) -> String {
        format!(
            "left: {x}%; top: {y}%; width: {s}px; height: {s}px; animation-duration: {d}s; opacity: {o};",
            x = self.pos_x,
            y = self.pos_y,
            s = self.size,
            d = self.duration,
            o = self.opacity,
        )
    }
}

/// Generate a full field from the given RNG
pub fn generate_with(rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|id| Particle::random(id, rng)).collect()
}

/// Generate a full field from the thread RNG
pub fn generate() -> Vec<Particle> {
    generate_with(&mut rand::thread_rng())
}
