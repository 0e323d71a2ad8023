//! Drawing primitives and the passes that emit them.
//!
//! The passes never talk to the GPU. They describe each line and disc to a
//! [`Canvas`], and [`FrameBatch`] is the canvas that packs them into
//! instance data for the wgpu pipelines.

mod connections;
mod nodes;

pub use connections::{draw_connections, ConnectionStats};
pub use nodes::{draw_nodes, NodeStats};

use crate::color::{Rgb, Rgba};
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Soft halo around a primitive. Stands in for a 2D canvas shadow blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    /// Halo extent in logical pixels past the primitive's edge.
    pub blur: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStroke {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgba,
    pub width: f32,
    pub glow: Option<Glow>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscFill {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
    pub glow: Option<Glow>,
}

/// A 2D drawing target in logical surface coordinates.
pub trait Canvas {
    fn clear(&mut self, color: Rgb);
    fn stroke_line(&mut self, line: &LineStroke);
    fn fill_disc(&mut self, disc: &DiscFill);
}

/// Per-instance data for the line pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct LineInstance {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub color: [f32; 4],
    pub glow_color: [f32; 4],
    pub width: f32,
    pub glow_blur: f32,
    pub _pad: [f32; 2],
}

/// Per-instance data for the disc pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct DiscInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub glow_blur: f32,
    pub color: [f32; 4],
    pub glow_color: [f32; 4],
}

fn glow_parts(glow: Option<Glow>) -> ([f32; 4], f32) {
    match glow {
        Some(g) if g.blur > 0.0 && g.color.alpha > 0.0 => (g.color.to_array(), g.blur),
        _ => (Rgba::TRANSPARENT.to_array(), 0.0),
    }
}

impl From<&LineStroke> for LineInstance {
    fn from(line: &LineStroke) -> Self {
        let (glow_color, glow_blur) = glow_parts(line.glow);
        Self {
            from: line.from.to_array(),
            to: line.to.to_array(),
            color: line.color.to_array(),
            glow_color,
            width: line.width,
            glow_blur,
            _pad: [0.0; 2],
        }
    }
}

impl From<&DiscFill> for DiscInstance {
    fn from(disc: &DiscFill) -> Self {
        let (glow_color, glow_blur) = glow_parts(disc.glow);
        Self {
            center: disc.center.to_array(),
            radius: disc.radius,
            glow_blur,
            color: disc.color.to_array(),
            glow_color,
        }
    }
}

/// One frame's worth of draw calls, ready for upload.
///
/// Lines are drawn before discs, each in submission order.
#[derive(Debug, Clone, Default)]
pub struct FrameBatch {
    clear_color: Option<Rgb>,
    lines: Vec<LineInstance>,
    discs: Vec<DiscInstance>,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded primitives but keep the allocations.
    pub fn reset(&mut self) {
        self.clear_color = None;
        self.lines.clear();
        self.discs.clear();
    }

    pub fn clear_color(&self) -> Option<Rgb> {
        self.clear_color
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn disc_count(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.discs.is_empty()
    }

    pub(crate) fn lines(&self) -> &[LineInstance] {
        &self.lines
    }

    pub(crate) fn discs(&self) -> &[DiscInstance] {
        &self.discs
    }
}

impl Canvas for FrameBatch {
    fn clear(&mut self, color: Rgb) {
        self.reset();
        self.clear_color = Some(color);
    }

    fn stroke_line(&mut self, line: &LineStroke) {
        self.lines.push(LineInstance::from(line));
    }

    fn fill_disc(&mut self, disc: &DiscFill) {
        self.discs.push(DiscInstance::from(disc));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_sizes_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 64);
        assert_eq!(std::mem::size_of::<DiscInstance>(), 48);
    }

    #[test]
    fn test_clear_resets_the_batch() {
        let mut batch = FrameBatch::new();
        batch.fill_disc(&DiscFill {
            center: Vec2::ZERO,
            radius: 3.0,
            color: Rgb::BLACK.with_alpha(1.0),
            glow: None,
        });
        assert_eq!(batch.disc_count(), 1);

        batch.clear(Rgb::WHITE);
        assert!(batch.is_empty());
        assert_eq!(batch.clear_color(), Some(Rgb::WHITE));
    }

    #[test]
    fn test_missing_glow_packs_as_zero_blur() {
        let line = LineStroke {
            from: Vec2::new(1.0, 2.0),
            to: Vec2::new(3.0, 4.0),
            color: Rgb::WHITE.with_alpha(0.5),
            width: 1.0,
            glow: None,
        };
        let instance = LineInstance::from(&line);
        assert_eq!(instance.glow_blur, 0.0);
        assert_eq!(instance.glow_color, [0.0; 4]);
        assert_eq!(instance.from, [1.0, 2.0]);
        assert_eq!(instance.color[3], 0.5);
    }
}
