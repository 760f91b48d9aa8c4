//! Random spawn helpers for particle initialization.
//!
//! Wraps a [`SmallRng`] with the handful of distributions the particle store
//! needs. Seed it explicitly for reproducible layouts:
//!
//! ```ignore
//! let mut ctx = SpawnContext::seeded(7);
//! let pos = ctx.random_in_rect(800.0, 600.0);
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Random source handed to the store while it creates particles.
pub struct SpawnContext {
    /// Index of the particle currently being spawned.
    pub index: usize,
    rng: SmallRng,
}

impl SpawnContext {
    /// Seeded from the wall clock, so every run gets a different field.
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }

    /// Deterministic context for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            index: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 in `[min, max)`. Collapses to `min` when the range is empty.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Random point in `[0, width) x [0, height)`.
    pub fn random_in_rect(&mut self, width: f32, height: f32) -> Vec2 {
        Vec2::new(self.random_range(0.0, width), self.random_range(0.0, height))
    }

    /// Random velocity with each axis in `[-speed, speed]`.
    pub fn random_velocity(&mut self, speed: f32) -> Vec2 {
        // (r * 2 - 1) * speed, r in [0, 1)
        let vx = (self.rng.gen::<f32>() * 2.0 - 1.0) * speed;
        let vy = (self.rng.gen::<f32>() * 2.0 - 1.0) * speed;
        Vec2::new(vx, vy)
    }

    /// Random size inside the inclusive range.
    pub fn random_size(&mut self, range: &RangeInclusive<f32>) -> f32 {
        let (min, max) = (*range.start(), *range.end());
        if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_in_rect_bounds() {
        let mut ctx = SpawnContext::seeded(1);
        for _ in 0..500 {
            let p = ctx.random_in_rect(800.0, 600.0);
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
        }
    }

    #[test]
    fn test_random_velocity_bounds() {
        let mut ctx = SpawnContext::seeded(2);
        for _ in 0..500 {
            let v = ctx.random_velocity(1.5);
            assert!(v.x.abs() <= 1.5 && v.y.abs() <= 1.5);
        }
    }

    #[test]
    fn test_degenerate_ranges_collapse() {
        let mut ctx = SpawnContext::seeded(3);
        assert_eq!(ctx.random_in_rect(0.0, 0.0), Vec2::ZERO);
        assert_eq!(ctx.random_size(&(2.0..=2.0)), 2.0);
        assert_eq!(ctx.random_velocity(0.0), Vec2::ZERO);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SpawnContext::seeded(99);
        let mut b = SpawnContext::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.random_in_rect(100.0, 100.0), b.random_in_rect(100.0, 100.0));
        }
    }
}
