//! A single mounted mesh: its particles, pointer and styling.
//!
//! Nothing here is global. Two simulations never share state, and dropping
//! one releases everything it owned.

use crate::config::MeshConfig;
use crate::input::PointerTracker;
use crate::particle::ParticleField;
use crate::physics;
use crate::render::{draw_connections, draw_nodes, Canvas};
use crate::viewport::{DeviceTier, SurfaceLayout, Viewport, ViewportSizer};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Counters from one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub pairs_tested: usize,
    pub connections_drawn: usize,
    pub glowing_connections: usize,
    pub nodes_drawn: usize,
    pub glowing_nodes: usize,
}

/// The simulation instance owned by a mounted host.
#[derive(Debug)]
pub struct MeshSimulation {
    config: MeshConfig,
    sizer: ViewportSizer,
    layout: SurfaceLayout,
    field: ParticleField,
    pointer: PointerTracker,
    rng: StdRng,
}

impl MeshSimulation {
    /// Build a simulation for `viewport` with an entropy-seeded RNG.
    pub fn new(config: MeshConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }

    /// Same as [`new`](Self::new) but reproducible.
    pub fn with_seed(config: MeshConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: MeshConfig, viewport: Viewport, mut rng: StdRng) -> Self {
        let sizer = ViewportSizer::new(config.tiers.clone());
        let layout = sizer.layout(viewport);
        let field = ParticleField::scatter(layout.particle_count, viewport.size(), &mut rng);
        log::info!(
            "mesh mounted: {}x{} @{}x, {} tier, {} particles",
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio,
            layout.tier,
            field.len()
        );
        Self {
            config,
            sizer,
            layout,
            field,
            pointer: PointerTracker::new(),
            rng,
        }
    }

    /// Rebuild the field for a new viewport.
    ///
    /// The old particles are discarded, not migrated. The new field is fully
    /// built before it replaces the old one.
    pub fn resize(&mut self, viewport: Viewport) -> &SurfaceLayout {
        let layout = self.sizer.layout(viewport);
        let field = ParticleField::scatter(layout.particle_count, viewport.size(), &mut self.rng);

        if layout.tier != self.layout.tier {
            log::info!(
                "viewport {}x{}: {} -> {} tier, {} particles",
                viewport.width,
                viewport.height,
                self.layout.tier,
                layout.tier,
                field.len()
            );
        } else {
            log::debug!("viewport {}x{}: field rebuilt", viewport.width, viewport.height);
        }

        self.layout = layout;
        self.field = field;
        &self.layout
    }

    /// Run one frame: clear, integrate every particle, then draw lines and nodes.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> FrameStats {
        canvas.clear(self.config.background);

        physics::integrate(
            self.field.particles_mut(),
            self.pointer.current(),
            &self.config.physics,
        );

        let particles = self.field.particles();
        let connections = draw_connections(particles, &self.config.connections, canvas);
        let nodes = draw_nodes(particles, &self.config.nodes, canvas);

        FrameStats {
            pairs_tested: connections.pairs_tested,
            connections_drawn: connections.drawn,
            glowing_connections: connections.glowing,
            nodes_drawn: nodes.drawn,
            glowing_nodes: nodes.glowing,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    pub fn tier(&self) -> DeviceTier {
        self.layout.tier
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }
}
