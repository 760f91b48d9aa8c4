//! Frame driver.
//!
//! A [`Simulation`] owns the particle store, the configuration and the shared
//! [`FieldContext`]. Each [`tick`](Simulation::tick) clears the canvas, steps
//! and draws every particle in store order, then draws the links. Once started
//! it never pauses or stops; the host simply stops calling `tick` on teardown.

use crate::canvas::Canvas;
use crate::config::Config;
use crate::input::{FieldContext, SurfaceDimensions};
use crate::links::draw_links;
use crate::particle::ParticleStore;
use crate::physics::step_particle;
use crate::spawn::SpawnContext;
use crate::time::FrameSource;

/// Lifecycle of the frame driver. There is no way back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// What a single frame drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

pub struct Simulation {
    config: Config,
    particles: ParticleStore,
    field: FieldContext,
    state: DriverState,
    frames: u64,
}

impl Simulation {
    /// Create the store with `config.particle_count` random particles.
    pub fn new(config: Config, surface: SurfaceDimensions, ctx: &mut SpawnContext) -> Self {
        let particles = ParticleStore::initialize(config.particle_count, surface, &config, ctx);
        Self::with_particles(config, surface, particles)
    }

    /// Create a simulation over an explicit store.
    pub fn with_particles(config: Config, surface: SurfaceDimensions, particles: ParticleStore) -> Self {
        let field = FieldContext::new(surface, &config);
        Self {
            config,
            particles,
            field,
            state: DriverState::Idle,
            frames: 0,
        }
    }

    /// Idle → Running. Calling it again has no effect.
    pub fn start(&mut self) {
        if self.state == DriverState::Idle {
            log::info!(
                "Starting particle field: {} particles on {}x{}",
                self.particles.len(),
                self.field.surface.width,
                self.field.surface.height
            );
            self.state = DriverState::Running;
        }
    }

    /// Draw one frame. Starts the driver if it is still idle.
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> FrameStats {
        self.start();

        let surface = self.field.surface;
        canvas.clear(surface.width, surface.height);

        for particle in self.particles.as_mut_slice() {
            step_particle(particle, &self.field);
            canvas.fill_circle(particle.position, particle.size, self.config.particle_color);
        }

        let links = draw_links(self.particles.as_slice(), &self.config, canvas);
        self.frames += 1;

        FrameStats {
            particles: self.particles.len(),
            links,
        }
    }

    /// Explicit frame loop: tick once per frame the source yields.
    ///
    /// Returns the number of frames drawn.
    pub fn run<F: FrameSource, C: Canvas + ?Sized>(&mut self, mut frames: F, canvas: &mut C) -> u64 {
        self.start();
        let mut drawn = 0;
        while frames.next_frame() {
            self.tick(canvas);
            drawn += 1;
        }
        drawn
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Frames drawn since creation.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    pub fn field(&self) -> &FieldContext {
        &self.field
    }

    /// Shared context written by input handling.
    pub fn field_mut(&mut self) -> &mut FieldContext {
        &mut self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FrameBatch;
    use crate::particle::Particle;
    use crate::time::FixedFrames;
    use glam::Vec2;

    #[test]
    fn test_idle_until_started() {
        let mut ctx = SpawnContext::seeded(1);
        let mut sim = Simulation::new(Config::default(), SurfaceDimensions::new(800, 600), &mut ctx);
        assert_eq!(sim.state(), DriverState::Idle);
        sim.start();
        sim.start();
        assert_eq!(sim.state(), DriverState::Running);
    }

    #[test]
    fn test_tick_draws_every_particle() {
        let mut ctx = SpawnContext::seeded(2);
        let mut sim = Simulation::new(Config::default(), SurfaceDimensions::new(800, 600), &mut ctx);
        let mut batch = FrameBatch::new();

        let stats = sim.tick(&mut batch);
        assert_eq!(stats.particles, 100);
        assert_eq!(batch.circles.len(), 100);
        assert_eq!(batch.lines.len(), stats.links);
        assert_eq!(batch.extent, (800, 600));
        assert_eq!(sim.state(), DriverState::Running);
    }

    #[test]
    fn test_draw_uses_post_step_positions() {
        let store = ParticleStore::from_particles(vec![Particle::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(2.0, 3.0),
            2.5,
        )]);
        let mut sim = Simulation::with_particles(Config::default(), SurfaceDimensions::new(100, 100), store);
        let mut batch = FrameBatch::new();
        sim.tick(&mut batch);

        assert_eq!(batch.circles[0].center, [12.0, 13.0]);
        assert_eq!(batch.circles[0].radius, 2.5);
        assert_eq!(batch.circles[0].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_run_fixed_frames() {
        let mut ctx = SpawnContext::seeded(3);
        let mut sim = Simulation::new(
            Config::default().with_particle_count(10),
            SurfaceDimensions::new(300, 300),
            &mut ctx,
        );
        let mut batch = FrameBatch::new();
        let drawn = sim.run(FixedFrames(5), &mut batch);

        assert_eq!(drawn, 5);
        assert_eq!(sim.frame_count(), 5);
        assert_eq!(batch.clears, 5);
        assert_eq!(batch.circles.len(), 10);
    }
}
