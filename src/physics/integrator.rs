//! Variable-timestep ball integrator with circular boundary response.
//!
//! Each call is a stateless transform of one particle: everything carried
//! between frames lives in the `Particle` itself.

use bevy::prelude::*;

use super::particle::{Boundary, Particle};
use crate::config::{AIR_RESISTANCE, BALL_RADIUS, GRAVITY};

/// Advance `particle` by `dt` seconds and resolve contact with `boundary`.
///
/// 1. gravity: `v.y += GRAVITY * dt`
/// 2. damped translation: `x += v * AIR_RESISTANCE * dt`
///    (damping scales the displacement only; the stored velocity is undamped)
/// 3. if the ball's outer edge reached the boundary, reflect the velocity
///    about the contact normal and push the ball back by the penetration depth.
///
/// A ball exactly at the boundary center has no contact normal, so the
/// response is skipped. A negative or non-finite `dt` is treated as zero.
pub fn step(particle: &mut Particle, boundary: &Boundary, dt: f32) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    particle.velocity.y += GRAVITY * dt;
    particle.position += particle.velocity * AIR_RESISTANCE * dt;

    resolve_boundary(particle, boundary, BALL_RADIUS);
}

/// Step every particle in order.
pub fn step_all(particles: &mut [Particle], boundary: &Boundary, dt: f32) {
    for p in particles.iter_mut() {
        step(p, boundary, dt);
    }
}

/// Elastic reflection off the inside of `boundary` for a disc of `radius`.
/// Returns true if a contact was resolved.
pub fn resolve_boundary(particle: &mut Particle, boundary: &Boundary, radius: f32) -> bool {
    let to_center = particle.position - boundary.center;
    let distance = to_center.length();
    if distance + radius < boundary.radius {
        return false;
    }

    // zero distance: no normal to reflect about
    let Some(normal) = to_center.try_normalize() else {
        return false;
    };

    let normal_speed = particle.velocity.dot(normal);
    particle.velocity -= 2.0 * normal_speed * normal;

    let penetration = distance + radius - boundary.radius;
    particle.position -= normal * penetration;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn boundary() -> Boundary {
        Boundary::new(Vec2::new(360.0, 360.0), 360.0)
    }

    fn ball(position: Vec2, velocity: Vec2) -> Particle {
        Particle::new(position, velocity, Color::WHITE)
    }

    #[test]
    fn gravity_accumulates_exactly_without_contact() {
        let b = boundary();
        for &dt in &[0.001_f32, 0.016, 0.05, 0.1] {
            let mut p = ball(b.center, Vec2::new(12.0, -40.0));
            let expected = p.velocity.y + GRAVITY * dt;
            step(&mut p, &b, dt);
            assert_eq!(p.velocity.y, expected, "dt = {dt}");
            assert_eq!(p.velocity.x, 12.0);
        }
    }

    #[test]
    fn displacement_is_damped_but_velocity_is_not() {
        let b = boundary();
        let mut p = ball(b.center, Vec2::new(100.0, 0.0));
        step(&mut p, &b, 0.1);

        // x moved by v * 0.9 * dt, while v.x is carried forward untouched
        assert!((p.position.x - (360.0 + 100.0 * AIR_RESISTANCE * 0.1)).abs() < EPS);
        assert_eq!(p.velocity.x, 100.0);
    }

    #[test]
    fn zero_dt_changes_nothing_inside() {
        let b = boundary();
        let before = ball(Vec2::new(300.0, 400.0), Vec2::new(-30.0, 20.0));
        let mut p = before;
        step(&mut p, &b, 0.0);
        assert_eq!(p, before);
    }

    #[test]
    fn negative_dt_is_clamped() {
        let b = boundary();
        let before = ball(b.center, Vec2::new(5.0, 5.0));
        let mut p = before;
        step(&mut p, &b, -1.0);
        assert_eq!(p, before);
    }

    #[test]
    fn reflection_preserves_speed_at_threshold() {
        let b = boundary();
        // outer edge on the wall (a hair past it so rounding can't miss the contact)
        let dir = Vec2::new(3.0, 4.0).normalize();
        let mut p = ball(
            b.center + dir * (b.radius - BALL_RADIUS + 1e-3),
            Vec2::new(250.0, 80.0),
        );
        let before = p.speed();

        assert!(resolve_boundary(&mut p, &b, BALL_RADIUS));
        assert!((p.speed() - before).abs() < EPS);
        // normal component flipped, now heading inward
        assert!(p.velocity.dot(dir) < 0.0);
    }

    #[test]
    fn penetration_is_fully_corrected() {
        let b = boundary();
        let dir = Vec2::new(-1.0, 2.0).normalize();
        let mut p = ball(b.center + dir * 355.0, dir * 400.0);
        step(&mut p, &b, 0.02);

        let distance = p.position.distance(b.center);
        assert!((distance + BALL_RADIUS - b.radius).abs() < EPS, "distance = {distance}");
    }

    #[test]
    fn scenario_floor_bounce() {
        let b = boundary();
        let mut p = ball(
            Vec2::new(b.center.x, b.center.y + 353.0),
            Vec2::new(0.0, 100.0),
        );
        step(&mut p, &b, 0.1);

        // 100 + 750 * 0.1 = 175, then flipped by the floor contact
        assert!((p.velocity.y + 175.0).abs() < EPS, "vy = {}", p.velocity.y);
        assert!(p.velocity.x.abs() < EPS);
        // clipped to exactly R - r below the center
        assert!((p.position.y - (b.center.y + 360.0 - 7.2)).abs() < EPS);
        assert!((p.position.x - b.center.x).abs() < EPS);
    }

    #[test]
    fn degenerate_center_does_not_produce_nan() {
        // a disc as large as the boundary always "touches" it, even at the center
        let b = boundary();
        let mut p = ball(b.center, Vec2::ZERO);
        assert!(!resolve_boundary(&mut p, &b, b.radius));
        assert!(p.position.is_finite());
        assert!(p.velocity.is_finite());
        assert_eq!(p.position, b.center);
    }

    #[test]
    fn long_run_stays_contained() {
        let b = boundary();
        let mut particles: Vec<Particle> = (0..32)
            .map(|i| ball(b.center, Vec2::new(i as f32 * 60.0 - 960.0, 0.0)))
            .collect();
        for _ in 0..2000 {
            step_all(&mut particles, &b, 1.0 / 60.0);
        }
        for p in &particles {
            assert!(p.position.is_finite());
            assert!(p.position.distance(b.center) + BALL_RADIUS <= b.radius + EPS);
        }
    }
}
