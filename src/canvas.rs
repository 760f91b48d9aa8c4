//! Drawing context abstraction.
//!
//! The frame driver draws through the [`Canvas`] trait. [`FrameBatch`] is
//! the implementation used everywhere: it records circles and lines as
//! GPU-ready instances, which the renderer uploads once per frame. Tests read
//! the recorded instances back directly.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::config::Rgba;

/// Immediate-mode 2D drawing operations in surface pixel coordinates.
pub trait Canvas {
    /// Clear the whole surface. Everything drawn before is discarded.
    fn clear(&mut self, width: u32, height: u32);

    /// Fill a circle of `radius` pixels centered on `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight segment `width` pixels wide.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Per-instance data for one filled circle.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Per-instance data for one stroked segment.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub color: [f32; 4],
    pub width: f32,
    pub _pad: [f32; 3],
}

/// Recorded draw calls for a single frame.
#[derive(Debug, Default, Clone)]
pub struct FrameBatch {
    /// Surface size given to the last `clear`.
    pub extent: (u32, u32),
    pub circles: Vec<CircleInstance>,
    pub lines: Vec<LineInstance>,
    /// Number of `clear` calls since creation.
    pub clears: u64,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.lines.is_empty()
    }
}

impl Canvas for FrameBatch {
    fn clear(&mut self, width: u32, height: u32) {
        self.extent = (width, height);
        self.circles.clear();
        self.lines.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(CircleInstance {
            center: center.to_array(),
            radius,
            _pad: 0.0,
            color: color.to_array(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.lines.push(LineInstance {
            from: from.to_array(),
            to: to.to_array(),
            color: color.to_array(),
            width,
            _pad: [0.0; 3],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_sizes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
        assert_eq!(std::mem::size_of::<LineInstance>(), 48);
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut batch = FrameBatch::new();
        batch.fill_circle(Vec2::ONE, 2.0, Rgba::WHITE);
        batch.stroke_line(Vec2::ZERO, Vec2::ONE, 1.0, Rgba::WHITE);
        assert!(!batch.is_empty());

        batch.clear(640, 480);
        assert!(batch.is_empty());
        assert_eq!(batch.extent, (640, 480));
        assert_eq!(batch.clears, 1);
    }
}
