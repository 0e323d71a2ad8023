//! Surface sizing and the width-based particle density tiers.
//!
//! Particle positions live in logical (CSS-like) pixels. The backing surface
//! is sized in physical pixels, `logical * device_pixel_ratio`, and the GPU
//! projection maps one logical unit to `device_pixel_ratio` physical pixels.

use crate::config::{
    DESKTOP_BREAKPOINT, LAPTOP_BREAKPOINT, PARTICLES_DESKTOP, PARTICLES_LAPTOP,
    PARTICLES_MOBILE, PARTICLES_TABLET, TABLET_BREAKPOINT,
};
use crate::error::ConfigError;
use glam::Vec2;
use std::fmt;

/// Named device class picked from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    Mobile,
    Tablet,
    Laptop,
    Desktop,
}

impl fmt::Display for DeviceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceTier::Mobile => "mobile",
            DeviceTier::Tablet => "tablet",
            DeviceTier::Laptop => "laptop",
            DeviceTier::Desktop => "desktop",
        };
        f.write_str(name)
    }
}

/// One band of the tier table. Applies to widths strictly below `max_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub max_width: f32,
    pub tier: DeviceTier,
    pub particle_count: usize,
}

impl Breakpoint {
    pub const fn new(max_width: f32, tier: DeviceTier, particle_count: usize) -> Self {
        Self {
            max_width,
            tier,
            particle_count,
        }
    }
}

/// Ordered breakpoints plus the tier used when no breakpoint matches.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    breakpoints: Vec<Breakpoint>,
    largest: (DeviceTier, usize),
}

impl TierTable {
    /// Build a table from ascending, exclusive upper bounds.
    pub fn new(
        breakpoints: Vec<Breakpoint>,
        largest: (DeviceTier, usize),
    ) -> Result<Self, ConfigError> {
        if let Some(bad) = breakpoints.iter().find(|b| b.max_width.is_nan() || b.max_width <= 0.0) {
            return Err(ConfigError::NonPositiveBreakpoint(bad.max_width));
        }
        if let Some(pair) = breakpoints
            .windows(2)
            .find(|pair| pair[0].max_width >= pair[1].max_width)
        {
            return Err(ConfigError::UnsortedBreakpoints {
                previous: pair[0].max_width,
                next: pair[1].max_width,
            });
        }
        Ok(Self {
            breakpoints,
            largest,
        })
    }

    /// The first breakpoint whose bound exceeds `width`, else the largest tier.
    ///
    /// A width exactly on a boundary belongs to the higher tier.
    pub fn select(&self, width: f32) -> (DeviceTier, usize) {
        self.breakpoints
            .iter()
            .find(|b| width < b.max_width)
            .map(|b| (b.tier, b.particle_count))
            .unwrap_or(self.largest)
    }

    pub fn particle_count(&self, width: f32) -> usize {
        self.select(width).1
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint::new(TABLET_BREAKPOINT, DeviceTier::Mobile, PARTICLES_MOBILE),
                Breakpoint::new(LAPTOP_BREAKPOINT, DeviceTier::Tablet, PARTICLES_TABLET),
                Breakpoint::new(DESKTOP_BREAKPOINT, DeviceTier::Laptop, PARTICLES_LAPTOP),
            ],
            largest: (DeviceTier::Desktop, PARTICLES_DESKTOP),
        }
    }
}

/// Logical size of the drawing surface and its device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Non-finite or non-positive ratios fall back to 1.0, negative sizes to 0.
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: sanitize(width),
            height: sanitize(height),
            device_pixel_ratio,
        }
    }

    /// Viewport of a window whose inner size is given in physical pixels.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let dpr = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor as f32
        } else {
            1.0
        };
        Self::new(width as f32 / dpr, height as f32 / dpr, dpr)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Backing resolution so that one surface texel is one physical pixel.
    pub fn backing_size(&self) -> (u32, u32) {
        let scale = |v: f32| (v * self.device_pixel_ratio).round() as u32;
        (scale(self.width), scale(self.height))
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Result of sizing the surface: what to allocate and how dense to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    pub viewport: Viewport,
    pub backing_width: u32,
    pub backing_height: u32,
    pub tier: DeviceTier,
    pub particle_count: usize,
}

/// Turns a viewport into a [`SurfaceLayout`] using a tier table.
#[derive(Debug, Clone, Default)]
pub struct ViewportSizer {
    tiers: TierTable,
}

impl ViewportSizer {
    pub fn new(tiers: TierTable) -> Self {
        Self { tiers }
    }

    /// Run at mount and on every resize.
    pub fn layout(&self, viewport: Viewport) -> SurfaceLayout {
        let (tier, particle_count) = self.tiers.select(viewport.width);
        let (backing_width, backing_height) = viewport.backing_size();
        SurfaceLayout {
            viewport,
            backing_width,
            backing_height,
            tier,
            particle_count,
        }
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_lower_exclusive() {
        let table = TierTable::default();
        assert_eq!(table.select(0.0), (DeviceTier::Mobile, PARTICLES_MOBILE));
        assert_eq!(table.select(767.0), (DeviceTier::Mobile, PARTICLES_MOBILE));
        assert_eq!(table.select(768.0), (DeviceTier::Tablet, PARTICLES_TABLET));
        assert_eq!(table.select(1023.0), (DeviceTier::Tablet, PARTICLES_TABLET));
        assert_eq!(table.select(1024.0), (DeviceTier::Laptop, PARTICLES_LAPTOP));
        assert_eq!(table.select(1399.9), (DeviceTier::Laptop, PARTICLES_LAPTOP));
        assert_eq!(table.select(1400.0), (DeviceTier::Desktop, PARTICLES_DESKTOP));
        assert_eq!(table.select(3840.0), (DeviceTier::Desktop, PARTICLES_DESKTOP));
    }

    #[test]
    fn test_tier_counts_grow_with_width() {
        let table = TierTable::default();
        let counts: Vec<usize> = table.breakpoints().iter().map(|b| b.particle_count).collect();
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
        assert!(PARTICLES_DESKTOP > *counts.last().unwrap());
    }

    #[test]
    fn test_tier_table_rejects_unsorted() {
        let result = TierTable::new(
            vec![
                Breakpoint::new(1024.0, DeviceTier::Tablet, 80),
                Breakpoint::new(768.0, DeviceTier::Mobile, 50),
            ],
            (DeviceTier::Desktop, 160),
        );
        assert!(matches!(result, Err(ConfigError::UnsortedBreakpoints { .. })));
    }

    #[test]
    fn test_tier_table_rejects_non_positive() {
        let result = TierTable::new(
            vec![Breakpoint::new(0.0, DeviceTier::Mobile, 50)],
            (DeviceTier::Desktop, 160),
        );
        assert!(matches!(result, Err(ConfigError::NonPositiveBreakpoint(_))));

        let result = TierTable::new(
            vec![Breakpoint::new(f32::NAN, DeviceTier::Mobile, 50)],
            (DeviceTier::Desktop, 160),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_table_always_largest() {
        let table = TierTable::new(Vec::new(), (DeviceTier::Laptop, 42)).unwrap();
        assert_eq!(table.particle_count(10.0), 42);
        assert_eq!(table.particle_count(10_000.0), 42);
    }

    #[test]
    fn test_backing_size_scales_by_dpr() {
        let viewport = Viewport::new(1280.0, 720.0, 2.0);
        assert_eq!(viewport.backing_size(), (2560, 1440));
    }

    #[test]
    fn test_from_physical_converts_to_logical() {
        let viewport = Viewport::from_physical(2560, 1440, 2.0);
        assert_eq!(viewport.width, 1280.0);
        assert_eq!(viewport.height, 720.0);
        assert_eq!(viewport.device_pixel_ratio, 2.0);
    }

    #[test]
    fn test_bad_dpr_falls_back_to_one() {
        assert_eq!(Viewport::new(100.0, 100.0, 0.0).device_pixel_ratio, 1.0);
        assert_eq!(Viewport::new(100.0, 100.0, f32::NAN).device_pixel_ratio, 1.0);
        assert_eq!(Viewport::from_physical(100, 100, -3.0).width, 100.0);
    }

    #[test]
    fn test_layout_uses_logical_width() {
        // 1600 physical px at 2x is an 800 px wide tablet viewport.
        let sizer = ViewportSizer::default();
        let layout = sizer.layout(Viewport::from_physical(1600, 1200, 2.0));
        assert_eq!(layout.tier, DeviceTier::Tablet);
        assert_eq!(layout.particle_count, PARTICLES_TABLET);
        assert_eq!((layout.backing_width, layout.backing_height), (1600, 1200));
    }
}
