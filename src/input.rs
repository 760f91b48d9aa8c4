//! Pointer and surface tracking.
//!
//! [`FieldContext`] is the shared state the physics step reads every frame.
//! Window events write to it between frames:
//!
//! - `Resized` updates [`SurfaceDimensions`] (particles are left where they are)
//! - `CursorMoved` sets the pointer position
//! - `CursorLeft` clears the pointer, disabling repulsion until it returns
//!
//! Coordinates are window-relative physical pixels and are used as-is.

use glam::Vec2;
use winit::event::WindowEvent;

use crate::config::Config;

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceDimensions {
    pub width: u32,
    pub height: u32,
}

impl SurfaceDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Surface size as a float vector, for pixel-space math.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Current pointer position and the fixed repulsion radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// `None` while the pointer is outside the tracked area.
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl PointerState {
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }
}

/// Mutable state shared between input handling and the physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldContext {
    pub pointer: PointerState,
    pub surface: SurfaceDimensions,
}

impl FieldContext {
    pub fn new(surface: SurfaceDimensions, config: &Config) -> Self {
        Self {
            pointer: PointerState::new(config.pointer_radius),
            surface,
        }
    }

    /// New viewport size. Existing particles are not moved or rescaled.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = SurfaceDimensions::new(width, height);
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.position = Some(position);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.position = None;
    }

    /// Apply a winit window event. Returns `true` if the event changed the context.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                log::debug!("Surface resized to {}x{}", size.width, size.height);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_moved(Vec2::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer_left();
                log::debug!("Pointer left the surface");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    fn context() -> FieldContext {
        FieldContext::new(SurfaceDimensions::new(800, 600), &Config::default())
    }

    #[test]
    fn test_pointer_starts_absent() {
        let ctx = context();
        assert!(!ctx.pointer.is_present());
        assert_eq!(ctx.pointer.radius, 150.0);
    }

    #[test]
    fn test_pointer_move_and_leave() {
        let mut ctx = context();
        ctx.pointer_moved(Vec2::new(10.0, 20.0));
        assert_eq!(ctx.pointer.position, Some(Vec2::new(10.0, 20.0)));

        ctx.pointer_left();
        assert_eq!(ctx.pointer.position, None);
    }

    #[test]
    fn test_resize_event_updates_dimensions() {
        let mut ctx = context();
        let changed = ctx.handle_event(&WindowEvent::Resized(PhysicalSize::new(1024, 768)));
        assert!(changed);
        assert_eq!(ctx.surface, SurfaceDimensions::new(1024, 768));
    }

    #[test]
    fn test_unrelated_event_ignored() {
        let mut ctx = context();
        let before = ctx;
        assert!(!ctx.handle_event(&WindowEvent::Focused(true)));
        assert_eq!(ctx, before);
    }
}
