//! The native host: a winit window that mounts one mesh.
//!
//! Mounting creates the window, the simulation and the GPU surface, then
//! starts the scheduler. Suspending, closing or exiting unmounts: the
//! scheduler is stopped first, so no frame is drawn after teardown begins.

use crate::color::Rgb;
use crate::config::MeshConfig;
use crate::error::MeshError;
use crate::gpu::GpuState;
use crate::render::{Canvas, FrameBatch};
use crate::scheduler::{AnimationScheduler, FrameOutcome};
use crate::simulation::MeshSimulation;
use crate::time::FrameClock;
use crate::viewport::Viewport;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Builder for the mesh window.
///
/// # Example
///
/// ```ignore
/// use glowmesh::MeshWindow;
///
/// MeshWindow::new()
///     .with_title("mesh")
///     .with_inner_size(1280.0, 720.0)
///     .run()?;
/// ```
#[derive(Debug, Clone)]
pub struct MeshWindow {
    title: String,
    inner_size: (f64, f64),
    seed: Option<u64>,
    config: MeshConfig,
}

impl Default for MeshWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshWindow {
    pub fn new() -> Self {
        Self {
            title: "glowmesh".to_string(),
            inner_size: (1280.0, 720.0),
            seed: None,
            config: MeshConfig::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial size in logical pixels.
    pub fn with_inner_size(mut self, width: f64, height: f64) -> Self {
        self.inner_size = (width, height);
        self
    }

    /// Seed particle placement so every mount scatters the same way.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.config.background = background;
        self
    }

    pub fn with_config(mut self, config: MeshConfig) -> Self {
        self.config = config;
        self
    }

    /// Open the window and block until it closes.
    pub fn run(self) -> Result<(), MeshError> {
        let event_loop = EventLoop::new()?;
        // Frames are paced by request_redraw and vsync.
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct App {
    settings: MeshWindow,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    sim: Option<MeshSimulation>,
    scheduler: AnimationScheduler,
    batch: FrameBatch,
    clock: FrameClock,
    error: Option<MeshError>,
}

impl App {
    fn new(settings: MeshWindow) -> Self {
        Self {
            settings,
            window: None,
            gpu: None,
            sim: None,
            scheduler: AnimationScheduler::new(),
            batch: FrameBatch::new(),
            clock: FrameClock::new(),
            error: None,
        }
    }

    fn mount(&mut self, event_loop: &ActiveEventLoop) -> Result<(), MeshError> {
        let attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.inner_size.0,
                self.settings.inner_size.1,
            ));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let viewport = Viewport::from_physical(size.width, size.height, window.scale_factor());
        let config = self.settings.config.clone();
        let sim = match self.settings.seed {
            Some(seed) => MeshSimulation::with_seed(config, viewport, seed),
            None => MeshSimulation::new(config, viewport),
        };

        let gpu = pollster::block_on(GpuState::new(window.clone(), sim.layout()))?;

        self.scheduler = AnimationScheduler::new();
        self.clock = FrameClock::new();
        self.sim = Some(sim);
        self.gpu = Some(gpu);
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn unmount(&mut self) {
        self.scheduler.stop();
        self.batch.reset();
        self.gpu = None;
        self.sim = None;
        if self.window.take().is_some() {
            log::info!("mesh unmounted");
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };
        let layout = *sim.resize(viewport);
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(&layout);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        self.batch.reset();
        let canvas: Option<&mut dyn Canvas> = match self.gpu {
            Some(_) => Some(&mut self.batch),
            None => None,
        };

        match self.scheduler.tick(sim, canvas) {
            FrameOutcome::Stopped => return,
            FrameOutcome::Skipped => {}
            FrameOutcome::Rendered(stats) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    match gpu.render(&self.batch) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            self.unmount();
                            event_loop.exit();
                            return;
                        }
                        Err(e) => log::warn!("render error: {e:?}"),
                    }
                }
                if let Some(fps) = self.clock.tick() {
                    log::debug!(
                        "{fps:.1} fps, {} connections ({} glowing), {} nodes",
                        stats.connections_drawn,
                        stats.glowing_connections,
                        stats.nodes_drawn
                    );
                }
            }
        }

        if self.scheduler.is_running() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.mount(event_loop) {
            log::error!("failed to mount mesh: {err}");
            self.unmount();
            self.error = Some(err);
            event_loop.exit();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let scale_factor = match &self.window {
            Some(window) => window.scale_factor(),
            None => return,
        };
        if let Some(sim) = self.sim.as_mut() {
            sim.pointer_mut().handle_event(&event, scale_factor);
        }

        match event {
            WindowEvent::CloseRequested => {
                self.unmount();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.resize(Viewport::from_physical(size.width, size.height, scale_factor));
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.resize(Viewport::from_physical(size.width, size.height, scale_factor));
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
    }
}
