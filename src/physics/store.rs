use bevy::prelude::*;
use rand::rngs::StdRng;

use super::particle::{Particle, random_launch_speed};

/// Fixed-capacity arena of particles with a live-count cursor.
///
/// The backing storage is allocated once; only `[0, live_count)` is
/// meaningful. Index 0 is the primary ball: reset reseeds it instead of
/// removing it, and drops everything spawned after it.
#[derive(Resource, Debug)]
pub struct ParticleStore {
    records: Box<[Particle]>,
    live_count: usize,
    center: Vec2,
    launch_speed: f32,
}

impl ParticleStore {
    /// Allocate `capacity` slots (at least one) and seed the primary ball at `center`.
    pub fn new(capacity: usize, center: Vec2, launch_speed: f32, rng: &mut StdRng) -> Self {
        let capacity = capacity.max(1);
        let primary = Particle::launched(center, launch_speed, rng);
        Self {
            records: vec![primary; capacity].into_boxed_slice(),
            live_count: 1,
            center,
            launch_speed,
        }
    }

    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn is_full(&self) -> bool {
        self.live_count >= self.capacity()
    }

    pub fn primary(&self) -> &Particle {
        &self.records[0]
    }

    /// Put the primary ball back at the center with a fresh horizontal
    /// launch and discard every spawned ball.
    pub fn reset_primary(&mut self, rng: &mut StdRng) {
        let primary = &mut self.records[0];
        primary.position = self.center;
        primary.velocity.y = 0.0;
        primary.velocity.x = random_launch_speed(self.launch_speed, rng);
        self.live_count = 1;
    }

    /// Fill every free slot with a freshly launched ball.
    /// Returns how many were spawned (0 when already full).
    pub fn spawn_until_full(&mut self, rng: &mut StdRng) -> usize {
        let before = self.live_count;
        while !self.is_full() {
            self.records[self.live_count] = Particle::launched(self.center, self.launch_speed, rng);
            self.live_count += 1;
        }
        self.live_count - before
    }

    /// Live particles in insertion order.
    pub fn live(&self) -> &[Particle] {
        &self.records[..self.live_count]
    }

    pub fn live_mut(&mut self) -> &mut [Particle] {
        &mut self.records[..self.live_count]
    }

    pub fn iterate_live(&self) -> impl Iterator<Item = &Particle> {
        self.live().iter()
    }
}
