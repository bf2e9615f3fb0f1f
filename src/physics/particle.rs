use bevy::prelude::*;
use rand::distr::{Distribution, StandardUniform, Uniform};
use rand::rngs::StdRng;

/// A single simulated ball.
/// Lives in the `ParticleStore`; only the integrator writes to it once spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Simulation-space position (origin top-left, +Y down).
    pub position: Vec2,
    /// Units per second.
    pub velocity: Vec2,
    pub color: Color,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, color: Color) -> Self {
        Self {
            position,
            velocity,
            color,
        }
    }

    /// A particle at `center` with a random horizontal launch velocity in
    /// `[-launch_speed, launch_speed]` and a random opaque color.
    pub fn launched(center: Vec2, launch_speed: f32, rng: &mut StdRng) -> Self {
        Self::new(
            center,
            Vec2::new(random_launch_speed(launch_speed, rng), 0.0),
            random_opaque_color(rng),
        )
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// The fixed circle every particle is confined to.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub center: Vec2,
    pub radius: f32,
}

impl Boundary {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True when a disc of `radius` at `position` lies strictly inside.
    pub fn contains(&self, position: Vec2, radius: f32) -> bool {
        position.distance(self.center) + radius < self.radius
    }
}

impl Default for Boundary {
    fn default() -> Self {
        Self::new(crate::config::CENTER, crate::config::BOUNDARY_RADIUS)
    }
}

/// Uniform in `[-|n|, |n|]`. A non-finite `n` launches nothing.
pub fn random_launch_speed(n: f32, rng: &mut StdRng) -> f32 {
    let n = n.abs();
    match Uniform::new_inclusive(-n, n) {
        Ok(range) => range.sample(rng),
        Err(_) => 0.0,
    }
}

/// Uniform RGB, alpha 1.
pub fn random_opaque_color(rng: &mut StdRng) -> Color {
    let [r, g, b]: [u8; 3] = StandardUniform.sample(rng);
    Color::srgb_u8(r, g, b)
}
