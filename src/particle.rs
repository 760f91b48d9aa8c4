//! Particle records and the fixed-size store that owns them.

use glam::Vec2;

use crate::config::Config;
use crate::input::SurfaceDimensions;
use crate::spawn::SpawnContext;

/// A single drifting particle.
///
/// Plain data: the physics step and the renderer are free functions that
/// take the record plus the shared field context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Draw radius in pixels, fixed at creation.
    pub size: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32) -> Self {
        Self {
            position,
            velocity,
            size,
        }
    }

    /// Random particle inside the surface, using the configured speed and size range.
    pub fn spawn(ctx: &mut SpawnContext, surface: SurfaceDimensions, config: &Config) -> Self {
        let position = ctx.random_in_rect(surface.width as f32, surface.height as f32);
        let velocity = ctx.random_velocity(config.particle_speed);
        let size = ctx.random_size(&config.particle_size);
        Self::new(position, velocity, size)
    }
}

/// Ordered, fixed-length particle storage.
///
/// Order is draw order. Particles are created once and never added or
/// removed afterwards; only their fields change.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Create exactly `count` randomized particles.
    pub fn initialize(
        count: usize,
        surface: SurfaceDimensions,
        config: &Config,
        ctx: &mut SpawnContext,
    ) -> Self {
        let particles = (0..count)
            .map(|i| {
                ctx.index = i;
                Particle::spawn(ctx, surface, config)
            })
            .collect();
        Self { particles }
    }

    /// Build a store from explicit records.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view of the records. The slice cannot change the store's length.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_exact_count() {
        let mut ctx = SpawnContext::seeded(5);
        let surface = SurfaceDimensions::new(800, 600);
        let store = ParticleStore::initialize(100, surface, &Config::default(), &mut ctx);
        assert_eq!(store.len(), 100);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_initialize_respects_ranges() {
        let mut ctx = SpawnContext::seeded(6);
        let surface = SurfaceDimensions::new(320, 200);
        let config = Config::default();
        let store = ParticleStore::initialize(250, surface, &config, &mut ctx);

        for p in &store {
            assert!(p.position.x >= 0.0 && p.position.x < 320.0);
            assert!(p.position.y >= 0.0 && p.position.y < 200.0);
            assert!(p.velocity.x.abs() <= config.particle_speed);
            assert!(p.velocity.y.abs() <= config.particle_speed);
            assert!(config.particle_size.contains(&p.size));
        }
    }

    #[test]
    fn test_initialize_zero_count() {
        let mut ctx = SpawnContext::seeded(7);
        let store =
            ParticleStore::initialize(0, SurfaceDimensions::new(10, 10), &Config::default(), &mut ctx);
        assert!(store.is_empty());
    }
}
