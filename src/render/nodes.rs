//! Particle discs, sized and tinted by activation.

use super::{Canvas, DiscFill, Glow};
use crate::color::lerp;
use crate::config::NodeStyle;
use crate::particle::Particle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeStats {
    pub drawn: usize,
    pub glowing: usize,
}

pub fn draw_nodes<C: Canvas + ?Sized>(
    particles: &[Particle],
    style: &NodeStyle,
    canvas: &mut C,
) -> NodeStats {
    let mut stats = NodeStats::default();

    for p in particles {
        let a = p.clamped_activation();
        let color = style.gray.lerp(style.accent, a);
        let opacity = lerp(style.base_opacity, style.active_opacity, a);
        let glow = (a > style.glow_threshold).then(|| Glow {
            color: style.accent.with_alpha(a),
            blur: a * style.glow_blur,
        });

        canvas.fill_disc(&DiscFill {
            center: p.position,
            radius: lerp(style.base_size, style.active_size, a),
            color: color.with_alpha(opacity),
            glow,
        });

        stats.drawn += 1;
        if glow.is_some() {
            stats.glowing += 1;
        }
    }

    stats
}
