//! Tuning constants and the config structs built from them.
//!
//! The constants are the source of truth. Each config struct's `Default`
//! reads them, and the `with_*` setters exist mainly so tests and benches
//! can isolate one behavior at a time.

use crate::color::Rgb;
use crate::viewport::TierTable;
use glam::Vec2;

// ========== Particle density ==========

/// Viewports narrower than this pick the mobile tier.
pub const TABLET_BREAKPOINT: f32 = 768.0;
pub const LAPTOP_BREAKPOINT: f32 = 1024.0;
pub const DESKTOP_BREAKPOINT: f32 = 1400.0;

pub const PARTICLES_MOBILE: usize = 50;
pub const PARTICLES_TABLET: usize = 80;
pub const PARTICLES_LAPTOP: usize = 120;
pub const PARTICLES_DESKTOP: usize = 160;

// ========== Physics ==========

pub const MOUSE_RADIUS: f32 = 350.0;
pub const PUSH_STRENGTH: f32 = 1.8;
/// Extra scale on the repulsion impulse.
pub const REPULSION_SCALE: f32 = 0.3;
pub const RETURN_FORCE: f32 = 0.006;
pub const FRICTION: f32 = 0.93;
pub const MAX_VELOCITY: f32 = 18.0;
/// Below this squared distance the pointer counts as coincident and no impulse is applied.
pub const MIN_REPULSION_DISTANCE_SQ: f32 = 1.0;
pub const ACTIVATION_SMOOTHING: f32 = 0.2;
pub const ACTIVATION_DECAY: f32 = 0.95;

/// Pointer position while no pointer is over the surface.
pub const POINTER_SENTINEL: Vec2 = Vec2::new(-1000.0, -1000.0);

// ========== Connections ==========

pub const CONNECTION_DISTANCE: f32 = 150.0;
pub const LINE_WIDTH_BASE: f32 = 1.0;
pub const LINE_WIDTH_ACTIVE: f32 = 3.0;
pub const CONNECTION_GLOW_THRESHOLD: f32 = 0.15;
pub const CONNECTION_GLOW_ALPHA: f32 = 0.9;
pub const CONNECTION_GLOW_BLUR: f32 = 20.0;

// ========== Nodes ==========

pub const NODE_SIZE_BASE: f32 = 3.0;
pub const NODE_SIZE_ACTIVE: f32 = 7.0;
pub const NODE_GLOW_THRESHOLD: f32 = 0.1;
pub const NODE_GLOW_BLUR: f32 = 25.0;

// ========== Colors ==========

pub const COLOR_GRAY: Rgb = Rgb::new(150, 150, 150);
pub const COLOR_ACCENT: Rgb = Rgb::new(0, 255, 0);
pub const COLOR_BACKGROUND: Rgb = Rgb::WHITE;
pub const BASE_OPACITY: f32 = 0.5;
pub const ACTIVE_OPACITY: f32 = 1.0;
/// Nodes sit slightly above the line opacity so they read as endpoints.
pub const NODE_BASE_OPACITY: f32 = BASE_OPACITY + 0.2;

/// Forces applied by the integrator each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub mouse_radius: f32,
    pub push_strength: f32,
    pub repulsion_scale: f32,
    pub return_force: f32,
    pub friction: f32,
    pub max_velocity: f32,
    pub min_repulsion_distance_sq: f32,
    pub activation_smoothing: f32,
    pub activation_decay: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            mouse_radius: MOUSE_RADIUS,
            push_strength: PUSH_STRENGTH,
            repulsion_scale: REPULSION_SCALE,
            return_force: RETURN_FORCE,
            friction: FRICTION,
            max_velocity: MAX_VELOCITY,
            min_repulsion_distance_sq: MIN_REPULSION_DISTANCE_SQ,
            activation_smoothing: ACTIVATION_SMOOTHING,
            activation_decay: ACTIVATION_DECAY,
        }
    }
}

impl PhysicsConfig {
    pub fn with_mouse_radius(mut self, radius: f32) -> Self {
        self.mouse_radius = radius;
        self
    }

    pub fn with_push_strength(mut self, strength: f32) -> Self {
        self.push_strength = strength;
        self
    }

    pub fn with_return_force(mut self, force: f32) -> Self {
        self.return_force = force;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_max_velocity(mut self, max: f32) -> Self {
        self.max_velocity = max;
        self
    }
}

/// Styling of the proximity lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionStyle {
    pub max_distance: f32,
    pub base_width: f32,
    pub active_width: f32,
    pub base_opacity: f32,
    pub active_opacity: f32,
    pub gray: Rgb,
    pub accent: Rgb,
    /// Joint activation above which a line gets a glow.
    pub glow_threshold: f32,
    pub glow_alpha: f32,
    pub glow_blur: f32,
}

impl Default for ConnectionStyle {
    fn default() -> Self {
        Self {
            max_distance: CONNECTION_DISTANCE,
            base_width: LINE_WIDTH_BASE,
            active_width: LINE_WIDTH_ACTIVE,
            base_opacity: BASE_OPACITY,
            active_opacity: ACTIVE_OPACITY,
            gray: COLOR_GRAY,
            accent: COLOR_ACCENT,
            glow_threshold: CONNECTION_GLOW_THRESHOLD,
            glow_alpha: CONNECTION_GLOW_ALPHA,
            glow_blur: CONNECTION_GLOW_BLUR,
        }
    }
}

impl ConnectionStyle {
    pub fn with_max_distance(mut self, distance: f32) -> Self {
        self.max_distance = distance;
        self
    }

    pub fn with_colors(mut self, gray: Rgb, accent: Rgb) -> Self {
        self.gray = gray;
        self.accent = accent;
        self
    }
}

/// Styling of the particle discs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub base_size: f32,
    pub active_size: f32,
    pub base_opacity: f32,
    pub active_opacity: f32,
    pub gray: Rgb,
    pub accent: Rgb,
    pub glow_threshold: f32,
    pub glow_blur: f32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            base_size: NODE_SIZE_BASE,
            active_size: NODE_SIZE_ACTIVE,
            base_opacity: NODE_BASE_OPACITY,
            active_opacity: ACTIVE_OPACITY,
            gray: COLOR_GRAY,
            accent: COLOR_ACCENT,
            glow_threshold: NODE_GLOW_THRESHOLD,
            glow_blur: NODE_GLOW_BLUR,
        }
    }
}

impl NodeStyle {
    pub fn with_sizes(mut self, base: f32, active: f32) -> Self {
        self.base_size = base;
        self.active_size = active;
        self
    }

    pub fn with_colors(mut self, gray: Rgb, accent: Rgb) -> Self {
        self.gray = gray;
        self.accent = accent;
        self
    }
}

/// Everything a simulation instance needs besides the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshConfig {
    pub tiers: TierTable,
    pub physics: PhysicsConfig,
    pub connections: ConnectionStyle,
    pub nodes: NodeStyle,
    pub background: Rgb,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            tiers: TierTable::default(),
            physics: PhysicsConfig::default(),
            connections: ConnectionStyle::default(),
            nodes: NodeStyle::default(),
            background: COLOR_BACKGROUND,
        }
    }
}

impl MeshConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tiers(mut self, tiers: TierTable) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    pub fn with_connections(mut self, connections: ConnectionStyle) -> Self {
        self.connections = connections;
        self
    }

    pub fn with_nodes(mut self, nodes: NodeStyle) -> Self {
        self.nodes = nodes;
        self
    }

    /// Color the surface is cleared to before every frame.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }
}
