use std::ops::ControlFlow;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::integrator::step_all;
use super::particle::Boundary;
use super::store::ParticleStore;
use crate::config::{LAUNCH_SPEED, MAX_BALLS};

/// RNG owned by the app and passed explicitly to store operations.
#[derive(Resource, Debug)]
pub struct SimRng(pub StdRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::seeded(rand::random())
    }
}

/// Discrete input commands, at most one of each per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimCommand {
    Reset,
    SpawnToCapacity,
    Quit,
}

/// Map key-press edges to commands, in application order.
pub fn commands_from_keys(keys: &ButtonInput<KeyCode>) -> Vec<SimCommand> {
    let mut out = Vec::new();
    if keys.just_pressed(KeyCode::KeyR) {
        out.push(SimCommand::Reset);
    }
    if keys.just_pressed(KeyCode::Space) {
        out.push(SimCommand::SpawnToCapacity);
    }
    if keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ]) {
        out.push(SimCommand::Quit);
    }
    out
}

/// Apply one command to the store. `Break` means the loop should stop.
pub fn apply_command(
    command: SimCommand,
    store: &mut ParticleStore,
    rng: &mut StdRng,
) -> ControlFlow<()> {
    match command {
        SimCommand::Reset => {
            store.reset_primary(rng);
            info!(vx = store.primary().velocity.x, "reset");
        }
        SimCommand::SpawnToCapacity => {
            let spawned = store.spawn_until_full(rng);
            info!(spawned, live = store.live_count(), "spawn to capacity");
        }
        SimCommand::Quit => {
            info!("quit requested");
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

/// Seed the store and boundary resources.
pub fn setup_simulation(mut commands: Commands, mut rng: ResMut<SimRng>) {
    let boundary = Boundary::default();
    let store = ParticleStore::new(MAX_BALLS, boundary.center, LAUNCH_SPEED, &mut rng.0);
    info!(
        capacity = store.capacity(),
        radius = boundary.radius,
        "simulation ready"
    );
    commands.insert_resource(boundary);
    commands.insert_resource(store);
}

/// Collapse this frame's key presses into store mutations (or an exit).
pub fn handle_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut store: ResMut<ParticleStore>,
    mut rng: ResMut<SimRng>,
    mut exit: MessageWriter<AppExit>,
) {
    for command in commands_from_keys(&keys) {
        if apply_command(command, &mut store, &mut rng.0).is_break() {
            // Quit is native-only; the browser owns the page lifetime
            if cfg!(not(target_arch = "wasm32")) {
                exit.write(AppExit::Success);
            }
            return;
        }
    }
}

/// Variable-timestep integration of every live ball.
pub fn integrate(time: Res<Time>, boundary: Res<Boundary>, mut store: ResMut<ParticleStore>) {
    let dt = time.delta_secs();
    step_all(store.live_mut(), &boundary, dt);
    debug!(dt, live = store.live_count(), "integrated");
}
