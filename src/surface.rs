//! Surface binding.
//!
//! Looks up the drawing surface (a window titled [`SURFACE_ID`]) and its
//! drawing context (a GPU device configured for that window). Either lookup
//! failing aborts initialization entirely.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::error::BindError;
use crate::gpu::GpuState;
use crate::input::SurfaceDimensions;

/// Well-known identifier of the drawing surface.
pub const SURFACE_ID: &str = "particleCanvas";

/// Initial window size before the platform reports the real viewport.
const DEFAULT_SIZE: (u32, u32) = (1280, 720);

/// A window plus the GPU context that draws into it.
pub struct BoundSurface {
    pub window: Arc<Window>,
    pub gpu: GpuState,
}

impl BoundSurface {
    /// Current pixel size of the configured surface.
    pub fn dimensions(&self) -> SurfaceDimensions {
        SurfaceDimensions::new(self.gpu.config.width, self.gpu.config.height)
    }
}

/// Create the surface window and bind a GPU context to it.
pub fn bind_surface(event_loop: &ActiveEventLoop) -> Result<BoundSurface, BindError> {
    let window_attrs = Window::default_attributes()
        .with_title(SURFACE_ID)
        .with_inner_size(winit::dpi::LogicalSize::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1));

    let window = Arc::new(event_loop.create_window(window_attrs)?);
    let gpu = pollster::block_on(GpuState::new(window.clone()))?;

    log::info!(
        "Bound surface '{}' at {}x{}",
        SURFACE_ID,
        gpu.config.width,
        gpu.config.height
    );

    Ok(BoundSurface { window, gpu })
}
