//! Error types for driftfield.
//!
//! Only initialization can fail. Once the surface is bound every per-frame
//! computation is total.

use std::fmt;

/// The drawing surface or its drawing context could not be acquired.
///
/// Both cases are fatal: nothing is spawned and no frame loop starts.
#[derive(Debug)]
pub enum BindError {
    /// No window or no GPU surface for the identifier.
    MissingSurface(SurfaceCause),
    /// The surface exists but no GPU device can draw to it.
    MissingContext(ContextCause),
}

/// Why the surface lookup failed.
#[derive(Debug)]
pub enum SurfaceCause {
    Window(winit::error::OsError),
    Surface(wgpu::CreateSurfaceError),
    /// The surface reports no usable texture format.
    NoFormat,
}

/// Why the drawing context could not be created.
#[derive(Debug)]
pub enum ContextCause {
    NoAdapter,
    Device(wgpu::RequestDeviceError),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::MissingSurface(cause) => write!(f, "Surface element not found: {}", cause),
            BindError::MissingContext(cause) => write!(f, "2D context not available: {}", cause),
        }
    }
}

impl fmt::Display for SurfaceCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceCause::Window(e) => write!(f, "failed to create window: {}", e),
            SurfaceCause::Surface(e) => write!(f, "failed to create GPU surface: {}", e),
            SurfaceCause::NoFormat => write!(f, "surface has no supported texture format"),
        }
    }
}

impl fmt::Display for ContextCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextCause::NoAdapter => write!(
                f,
                "no compatible GPU adapter found. Ensure your system supports Vulkan/Metal/DX12/GL."
            ),
            ContextCause::Device(e) => write!(f, "failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for BindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindError::MissingSurface(SurfaceCause::Window(e)) => Some(e),
            BindError::MissingSurface(SurfaceCause::Surface(e)) => Some(e),
            BindError::MissingContext(ContextCause::Device(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<winit::error::OsError> for BindError {
    fn from(e: winit::error::OsError) -> Self {
        BindError::MissingSurface(SurfaceCause::Window(e))
    }
}

impl From<wgpu::CreateSurfaceError> for BindError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        BindError::MissingSurface(SurfaceCause::Surface(e))
    }
}

impl From<wgpu::RequestDeviceError> for BindError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        BindError::MissingContext(ContextCause::Device(e))
    }
}

/// Errors returned by [`run`](crate::run).
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Surface binding failed; the loop exited without drawing.
    Bind(BindError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            SimulationError::Bind(e) => write!(f, "Initialization aborted: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::EventLoop(e) => Some(e),
            SimulationError::Bind(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SimulationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SimulationError::EventLoop(e)
    }
}

impl From<BindError> for SimulationError {
    fn from(e: BindError) -> Self {
        SimulationError::Bind(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_context_message() {
        let err = BindError::MissingContext(ContextCause::NoAdapter);
        let msg = err.to_string();
        assert!(msg.starts_with("2D context not available"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_bind_error_wraps_into_simulation_error() {
        let err: SimulationError = BindError::MissingSurface(SurfaceCause::NoFormat).into();
        assert!(matches!(err, SimulationError::Bind(BindError::MissingSurface(_))));
        assert!(err.source().is_some());
    }
}
