//! # glowmesh - pointer-reactive particle mesh
//!
//! A field of particles scattered over a surface, each tethered to its
//! origin by a weak spring. Particles near the pointer are pushed away and
//! light up; nearby particles are joined by lines whose weight and glow
//! follow the joint activation of their endpoints.
//!
//! ## Quick Start
//!
//! ```ignore
//! use glowmesh::prelude::*;
//!
//! fn main() -> Result<(), MeshError> {
//!     MeshWindow::new()
//!         .with_title("mesh")
//!         .with_background(Rgb::WHITE)
//!         .run()
//! }
//! ```
//!
//! ## Frame Pipeline
//!
//! Every displayed frame runs the same steps, in order:
//!
//! 1. Clear the surface to the background color
//! 2. [`physics::integrate`] every particle against the pointer
//! 3. [`render::draw_connections`] for every pair closer than the link distance
//! 4. [`render::draw_nodes`] on top of the lines
//!
//! Drawing goes through the [`Canvas`] trait. The window host records into
//! a [`FrameBatch`] and renders it with wgpu; tests and benches use their
//! own canvases.
//!
//! ## Headless Use
//!
//! ```ignore
//! use glowmesh::prelude::*;
//!
//! let mut sim = MeshSimulation::with_seed(MeshConfig::default(), Viewport::new(1280.0, 720.0, 1.0), 7);
//! let mut batch = FrameBatch::new();
//! sim.pointer_mut().move_to(Vec2::new(640.0, 360.0));
//! let stats = sim.frame(&mut batch);
//! ```
//!
//! ## Density Tiers
//!
//! | Viewport width | Tier | Particles |
//! |----------------|------|-----------|
//! | < 768 | [`DeviceTier::Mobile`] | 50 |
//! | < 1024 | [`DeviceTier::Tablet`] | 80 |
//! | < 1400 | [`DeviceTier::Laptop`] | 120 |
//! | otherwise | [`DeviceTier::Desktop`] | 160 |

pub mod color;
pub mod config;
pub mod error;
mod gpu;
pub mod input;
pub mod particle;
pub mod physics;
pub mod render;
pub mod scheduler;
pub mod simulation;
pub mod time;
pub mod viewport;
mod window;

pub use color::{Rgb, Rgba};
pub use config::{ConnectionStyle, MeshConfig, NodeStyle, PhysicsConfig};
pub use error::{ConfigError, GpuError, MeshError};
pub use glam::Vec2;
pub use input::PointerTracker;
pub use particle::{Particle, ParticleField};
pub use render::{Canvas, DiscFill, FrameBatch, Glow, LineStroke};
pub use scheduler::{AnimationScheduler, FrameOutcome, SchedulerState, StopHandle};
pub use simulation::{FrameStats, MeshSimulation};
pub use viewport::{Breakpoint, DeviceTier, SurfaceLayout, TierTable, Viewport, ViewportSizer};
pub use window::MeshWindow;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use glowmesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Rgb, Rgba};
    pub use crate::config::{ConnectionStyle, MeshConfig, NodeStyle, PhysicsConfig};
    pub use crate::error::MeshError;
    pub use crate::render::{Canvas, FrameBatch};
    pub use crate::scheduler::{AnimationScheduler, FrameOutcome};
    pub use crate::simulation::{FrameStats, MeshSimulation};
    pub use crate::viewport::{DeviceTier, TierTable, Viewport};
    pub use crate::window::MeshWindow;
    pub use crate::Vec2;
}
