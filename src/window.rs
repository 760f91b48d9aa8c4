//! Native host: winit event loop driving the simulation.
//!
//! Every `RedrawRequested` runs one [`Simulation::tick`] and then requests the
//! next redraw, so frames follow the display refresh (the surface presents
//! with vsync). Input events update the simulation's field context in
//! between frames on the same thread.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use crate::canvas::FrameBatch;
use crate::config::Config;
use crate::error::{BindError, SimulationError};
use crate::simulation::Simulation;
use crate::spawn::SpawnContext;
use crate::surface::{bind_surface, BoundSurface};
use crate::time::Time;

/// Open the particle window and run until it is closed.
///
/// Returns an error if the event loop cannot be created or the surface
/// cannot be bound. In the latter case nothing is drawn.
pub fn run() -> Result<(), SimulationError> {
    run_with_config(Config::default())
}

/// [`run`] with an explicit configuration.
pub fn run_with_config(config: Config) -> Result<(), SimulationError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

struct Running {
    bound: BoundSurface,
    simulation: Simulation,
}

struct App {
    config: Config,
    running: Option<Running>,
    batch: FrameBatch,
    time: Time,
    failure: Option<BindError>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            running: None,
            batch: FrameBatch::new(),
            time: Time::new(),
            failure: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() || self.failure.is_some() {
            return;
        }

        match bind_surface(event_loop) {
            Ok(bound) => {
                let mut spawn = SpawnContext::from_time();
                let mut simulation = Simulation::new(self.config.clone(), bound.dimensions(), &mut spawn);
                simulation.start();
                bound.window.request_redraw();
                self.running = Some(Running { bound, simulation });
            }
            Err(e) => {
                log::error!("{}", e);
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(running) = &mut self.running else {
            return;
        };
        if id != running.bound.window.id() {
            return;
        }

        running.simulation.field_mut().handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested after {} frames", running.simulation.frame_count());
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                running.bound.gpu.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                running.simulation.tick(&mut self.batch);

                let background = running.simulation.config().background;
                match running.bound.gpu.render(&self.batch, background) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        running.bound.gpu.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => log::warn!("Skipped frame: {:?}", e),
                }

                if let Some(fps) = self.time.update() {
                    log::debug!("FPS: {:.1} ({} links)", fps, self.batch.lines.len());
                }

                running.bound.window.request_redraw();
            }
            _ => {}
        }
    }
}
