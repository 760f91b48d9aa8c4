//! # driftfield
//!
//! An animated field of drifting particles. Nearby particles are joined by
//! lines that fade with distance, and particles near the pointer are pushed
//! away.
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() {
//!     env_logger::init();
//!     driftfield::run().unwrap();
//! }
//! ```
//!
//! ## Headless stepping
//!
//! The simulation does not need a window. Drive it with any [`FrameSource`]
//! and record what it draws with a [`FrameBatch`]:
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! let mut spawn = SpawnContext::seeded(1);
//! let mut sim = Simulation::new(Config::default(), SurfaceDimensions::new(800, 600), &mut spawn);
//! let mut batch = FrameBatch::new();
//! sim.run(FixedFrames(60), &mut batch);
//! println!("{} links in the last frame", batch.lines.len());
//! ```
//!
//! ## Frame order
//!
//! Each frame clears the surface, then for every particle in store order
//! applies [`physics::step_particle`] and fills its circle, then draws the
//! links from [`links::draw_links`].

pub mod canvas;
pub mod config;
mod error;
mod gpu;
pub mod input;
pub mod links;
pub mod particle;
pub mod physics;
mod simulation;
pub mod spawn;
pub mod surface;
pub mod time;
mod window;

pub use canvas::{Canvas, FrameBatch};
pub use config::{Config, Rgba};
pub use error::{BindError, ContextCause, SimulationError, SurfaceCause};
pub use glam::Vec2;
pub use gpu::GpuState;
pub use input::{FieldContext, PointerState, SurfaceDimensions};
pub use links::Link;
pub use particle::{Particle, ParticleStore};
pub use simulation::{DriverState, FrameStats, Simulation};
pub use spawn::SpawnContext;
pub use time::{FixedFrames, FrameSource, Time, Unbounded};
pub use window::{run, run_with_config};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, FrameBatch};
    pub use crate::config::{Config, Rgba};
    pub use crate::input::{FieldContext, PointerState, SurfaceDimensions};
    pub use crate::particle::{Particle, ParticleStore};
    pub use crate::simulation::{DriverState, FrameStats, Simulation};
    pub use crate::spawn::SpawnContext;
    pub use crate::time::{FixedFrames, FrameSource, Unbounded};
    pub use crate::Vec2;
}
