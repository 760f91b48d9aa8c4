//! Static configuration for the particle field.
//!
//! All values are fixed for the lifetime of the process. [`Config::default()`]
//! reproduces the constants below; the `with_*` builders exist so tests and
//! embedders can construct smaller scenarios.

use std::ops::RangeInclusive;

/// Number of particles created at startup.
pub const PARTICLE_COUNT: usize = 100;
/// Pairs closer than this (strictly) are linked.
pub const MAX_LINK_DISTANCE: f32 = 120.0;
/// Per-axis velocity is drawn from `[-PARTICLE_SPEED, PARTICLE_SPEED]`.
pub const PARTICLE_SPEED: f32 = 1.0;
pub const MIN_PARTICLE_SIZE: f32 = 1.0;
pub const MAX_PARTICLE_SIZE: f32 = 4.0;
/// Radius around the pointer inside which particles are pushed away.
pub const POINTER_RADIUS: f32 = 150.0;
/// Stroke width of a link in pixels.
pub const LINK_WIDTH: f32 = 1.0;
/// Base alpha of the link colour. Replaced per link by its opacity.
pub const LINK_BASE_ALPHA: f32 = 0.5;

/// Straight (non-premultiplied) RGBA colour, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with its alpha channel substituted.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Immutable effect configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub particle_count: usize,
    pub max_link_distance: f32,
    pub particle_speed: f32,
    pub particle_size: RangeInclusive<f32>,
    pub particle_color: Rgba,
    pub link_color: Rgba,
    pub link_width: f32,
    pub pointer_radius: f32,
    pub background: Rgba,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            max_link_distance: MAX_LINK_DISTANCE,
            particle_speed: PARTICLE_SPEED,
            particle_size: MIN_PARTICLE_SIZE..=MAX_PARTICLE_SIZE,
            particle_color: Rgba::WHITE,
            link_color: Rgba::WHITE.with_alpha(LINK_BASE_ALPHA),
            link_width: LINK_WIDTH,
            pointer_radius: POINTER_RADIUS,
            background: Rgba::BLACK,
        }
    }
}

impl Config {
    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the link distance threshold. Must be non-zero.
    pub fn with_max_link_distance(mut self, distance: f32) -> Self {
        self.max_link_distance = distance;
        self
    }

    /// Set the per-axis velocity scale used at spawn time.
    pub fn with_particle_speed(mut self, speed: f32) -> Self {
        self.particle_speed = speed;
        self
    }

    /// Set the pointer repulsion radius. Must be non-zero.
    pub fn with_pointer_radius(mut self, radius: f32) -> Self {
        self.pointer_radius = radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = Config::default();
        assert_eq!(config.particle_count, 100);
        assert_eq!(config.max_link_distance, 120.0);
        assert_eq!(config.particle_speed, 1.0);
        assert_eq!(config.particle_size, 1.0..=4.0);
        assert_eq!(config.pointer_radius, 150.0);
        assert_eq!(config.particle_color, Rgba::WHITE);
        assert_eq!(config.link_color.a, 0.5);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Rgba::new(0.2, 0.4, 0.6, 0.5).with_alpha(0.9);
        assert_eq!(c, Rgba::new(0.2, 0.4, 0.6, 0.9));
    }
}
