//! Per-frame particle integration.
//!
//! Each particle is a damped spring anchored at its origin, pushed away from
//! the pointer with a quadratic falloff. Friction below 1 and a linear
//! restoring force mean the field always settles once the pointer leaves.

use crate::color::lerp;
use crate::config::PhysicsConfig;
use crate::particle::Particle;
use glam::Vec2;

/// Advance every particle one step. All particles are updated before this returns.
pub fn integrate(particles: &mut [Particle], pointer: Vec2, config: &PhysicsConfig) {
    let radius_sq = config.mouse_radius * config.mouse_radius;
    for p in particles.iter_mut() {
        step(p, pointer, radius_sq, config);
    }
}

#[inline]
fn step(p: &mut Particle, pointer: Vec2, radius_sq: f32, config: &PhysicsConfig) {
    // Repulsion
    let delta = pointer - p.position;
    let dist_sq = delta.length_squared();
    if dist_sq < radius_sq {
        let dist = dist_sq.sqrt();
        let influence = (1.0 - dist / config.mouse_radius).powi(2);

        if dist_sq > config.min_repulsion_distance_sq {
            let force = influence
                * config.push_strength
                * (config.mouse_radius / dist)
                * config.repulsion_scale;
            p.velocity -= delta / dist * force;
        }

        p.activation = lerp(p.activation, influence, config.activation_smoothing);
    } else {
        p.activation *= config.activation_decay;
    }
    p.activation = p.activation.clamp(0.0, 1.0);

    // Spring back to origin
    p.velocity += (p.origin - p.position) * config.return_force;

    p.velocity *= config.friction;
    p.velocity = p.velocity.clamp_length_max(config.max_velocity);

    p.position += p.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::POINTER_SENTINEL;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::at_rest(Vec2::new(x, y))
    }

    #[test]
    fn test_pushes_away_from_pointer() {
        let config = PhysicsConfig::default();
        let mut particles = [particle_at(100.0, 100.0)];
        integrate(&mut particles, Vec2::new(90.0, 100.0), &config);

        let p = particles[0];
        assert!(p.velocity.x > 0.0, "should move away on +x, got {:?}", p.velocity);
        assert!(p.velocity.y.abs() < 1e-5);
        assert!(p.position.x > 100.0);
        assert!(p.activation > 0.0);
    }

    #[test]
    fn test_outside_radius_only_decays() {
        let config = PhysicsConfig::default();
        let mut p = particle_at(100.0, 100.0);
        p.activation = 0.5;
        let mut particles = [p];
        integrate(&mut particles, POINTER_SENTINEL, &config);

        assert_eq!(particles[0].velocity, Vec2::ZERO);
        assert!((particles[0].activation - 0.5 * 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_activation_is_smoothed_not_snapped() {
        let config = PhysicsConfig::default();
        let mut particles = [particle_at(100.0, 100.0)];
        // Pointer right next to the particle: influence is nearly 1.
        integrate(&mut particles, Vec2::new(100.5, 100.0), &config);
        let first = particles[0].activation;
        assert!(first > 0.15 && first <= 0.2 + 1e-6, "got {first}");
    }

    #[test]
    fn test_coincident_pointer_skips_impulse() {
        let config = PhysicsConfig::default();
        let mut particles = [particle_at(200.0, 200.0)];
        integrate(&mut particles, Vec2::new(200.0, 200.0), &config);

        let p = particles[0];
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.position, Vec2::new(200.0, 200.0));
        // influence is exactly 1 at zero distance
        assert!((p.activation - 0.2).abs() < 1e-6);
        assert!(p.activation.is_finite());
    }

    #[test]
    fn test_speed_is_clamped() {
        let config = PhysicsConfig::default().with_push_strength(10_000.0);
        let mut particles = [particle_at(100.0, 100.0)];
        integrate(&mut particles, Vec2::new(101.5, 100.0), &config);
        assert!(particles[0].speed() <= config.max_velocity + 1e-3);
        assert!(particles[0].speed() > config.max_velocity * 0.99);
    }

    #[test]
    fn test_spring_pulls_back_toward_origin() {
        let config = PhysicsConfig::default();
        let mut p = particle_at(0.0, 0.0);
        p.position = Vec2::new(50.0, 0.0);
        let mut particles = [p];
        integrate(&mut particles, POINTER_SENTINEL, &config);
        assert!(particles[0].velocity.x < 0.0);
        assert!(particles[0].position.x < 50.0);
    }
}
