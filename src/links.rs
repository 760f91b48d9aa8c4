//! Proximity links between particles.
//!
//! Every unordered pair `i < j` closer than the link distance gets one line,
//! faded linearly from fully opaque at distance zero to invisible at the
//! threshold. The scan is O(n²); the particle count is small and fixed.

use glam::Vec2;

use crate::canvas::Canvas;
use crate::config::Config;
use crate::particle::Particle;

/// A line to draw between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Store index of the first particle (always less than `b`).
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// Opacity for a pair `distance` apart, or `None` at or beyond `max_distance`.
#[inline]
pub fn link_opacity(distance: f32, max_distance: f32) -> Option<f32> {
    (distance < max_distance).then(|| 1.0 - distance / max_distance)
}

/// All links for the current particle positions, in scan order.
pub fn links(particles: &[Particle], max_distance: f32) -> impl Iterator<Item = Link> + '_ {
    particles.iter().enumerate().flat_map(move |(a, pa)| {
        particles[a + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(offset, pb)| {
                let distance = pa.position.distance(pb.position);
                link_opacity(distance, max_distance).map(|opacity| Link {
                    a,
                    b: a + 1 + offset,
                    from: pa.position,
                    to: pb.position,
                    opacity,
                })
            })
    })
}

/// Stroke every link onto the canvas. Returns the number of segments drawn.
pub fn draw_links<C: Canvas + ?Sized>(particles: &[Particle], config: &Config, canvas: &mut C) -> usize {
    let mut drawn = 0;
    for link in links(particles, config.max_link_distance) {
        canvas.stroke_line(
            link.from,
            link.to,
            config.link_width,
            config.link_color.with_alpha(link.opacity),
        );
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::FrameBatch;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.0)
    }

    #[test]
    fn test_single_pair_opacity() {
        let particles = [at(0.0, 0.0), at(50.0, 0.0)];
        let found: Vec<Link> = links(&particles, 120.0).collect();
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].a, found[0].b), (0, 1));
        assert!((found[0].opacity - (1.0 - 50.0 / 120.0)).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_is_strict() {
        let particles = [at(0.0, 0.0), at(120.0, 0.0)];
        assert_eq!(links(&particles, 120.0).count(), 0);
        assert_eq!(link_opacity(120.0, 120.0), None);
    }

    #[test]
    fn test_each_pair_once() {
        let particles = [at(0.0, 0.0), at(10.0, 0.0), at(0.0, 10.0), at(10.0, 10.0)];
        let found: Vec<Link> = links(&particles, 120.0).collect();
        // 4 choose 2
        assert_eq!(found.len(), 6);
        assert!(found.iter().all(|l| l.a < l.b));
    }

    #[test]
    fn test_coincident_particles_fully_opaque() {
        assert_eq!(link_opacity(0.0, 120.0), Some(1.0));
    }

    #[test]
    fn test_draw_links_substitutes_alpha() {
        let particles = [at(0.0, 0.0), at(60.0, 0.0), at(500.0, 500.0)];
        let mut batch = FrameBatch::new();
        let drawn = draw_links(&particles, &Config::default(), &mut batch);

        assert_eq!(drawn, 1);
        let line = batch.lines[0];
        assert_eq!(line.from, [0.0, 0.0]);
        assert_eq!(line.to, [60.0, 0.0]);
        assert_eq!(line.width, 1.0);
        assert_eq!(&line.color[..3], &[1.0, 1.0, 1.0]);
        assert!((line.color[3] - 0.5).abs() < 1e-6);
    }
}
