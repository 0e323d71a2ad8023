//! Particle state and the field that owns it.

use glam::Vec2;
use rand::Rng;

/// One node of the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position in logical surface pixels.
    pub position: Vec2,
    /// Rest position, fixed at creation.
    pub origin: Vec2,
    pub velocity: Vec2,
    /// Smoothed pointer proximity in `[0, 1]`.
    pub activation: f32,
}

impl Particle {
    /// A particle at rest on its origin.
    pub fn at_rest(origin: Vec2) -> Self {
        Self {
            position: origin,
            origin,
            velocity: Vec2::ZERO,
            activation: 0.0,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Activation as renderers read it.
    #[inline]
    pub fn clamped_activation(&self) -> f32 {
        self.activation.clamp(0.0, 1.0)
    }
}

/// The ordered set of particles for one viewport size.
///
/// Never resized in place. A viewport change builds a new field and the
/// owner swaps it in whole.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    /// Scatter `count` particles uniformly over `[0, bounds.x) x [0, bounds.y)`.
    pub fn scatter<R: Rng + ?Sized>(count: usize, bounds: Vec2, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| {
                let origin = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
                Particle::at_rest(origin)
            })
            .collect();
        Self { particles, bounds }
    }

    pub fn from_particles(particles: Vec<Particle>, bounds: Vec2) -> Self {
        Self { particles, bounds }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}
