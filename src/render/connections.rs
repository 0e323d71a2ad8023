//! Proximity lines between nearby particles.
//!
//! Every unordered pair is visited once. An axis-aligned check rejects most
//! pairs before the Euclidean distance is computed; it cuts the constant
//! factor only, the pass stays O(n²) in the particle count.

use super::{Canvas, Glow, LineStroke};
use crate::color::lerp;
use crate::config::ConnectionStyle;
use crate::particle::Particle;

/// Counters from one connection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Unordered pairs considered, always `n * (n - 1) / 2`.
    pub pairs_tested: usize,
    pub drawn: usize,
    pub glowing: usize,
}

pub fn draw_connections<C: Canvas + ?Sized>(
    particles: &[Particle],
    style: &ConnectionStyle,
    canvas: &mut C,
) -> ConnectionStats {
    let max = style.max_distance;
    let max_sq = max * max;
    let mut stats = ConnectionStats::default();

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            stats.pairs_tested += 1;

            let delta = b.position - a.position;
            if delta.x.abs() > max || delta.y.abs() > max {
                continue;
            }
            let dist_sq = delta.length_squared();
            if dist_sq >= max_sq {
                continue;
            }

            let dist = dist_sq.sqrt();
            let proximity = 1.0 - dist / max;
            let joint = a.clamped_activation().max(b.clamped_activation());

            let color = style.gray.lerp(style.accent, joint);
            let opacity = proximity * lerp(style.base_opacity, style.active_opacity, joint);
            let glow = (joint > style.glow_threshold).then(|| Glow {
                color: style.accent.with_alpha(joint * style.glow_alpha),
                blur: joint * style.glow_blur,
            });

            canvas.stroke_line(&LineStroke {
                from: a.position,
                to: b.position,
                color: color.with_alpha(opacity),
                width: lerp(style.base_width, style.active_width, joint),
                glow,
            });

            stats.drawn += 1;
            if glow.is_some() {
                stats.glowing += 1;
            }
        }
    }

    stats
}
