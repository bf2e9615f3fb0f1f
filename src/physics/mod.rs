use bevy::prelude::*;

pub mod draw;
pub mod fps;
pub mod integrator;
pub mod particle;
pub mod store;
pub mod systems;

pub use particle::{Boundary, Particle};
pub use store::ParticleStore;

use draw::{DrawList, apply_draw_list, record_draw_list, spawn_disc_pool};
use fps::{FpsCounter, update_fps_title};
use systems::{SimRng, handle_input, integrate, setup_simulation};

/// Particle store, per-frame integration and the pooled disc renderer.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>()
            .init_resource::<DrawList>()
            .init_resource::<FpsCounter>()
            // Store + boundary first, then the disc pool sized from the store
            .add_systems(Startup, (setup_simulation, spawn_disc_pool).chain())
            // One frame: input -> integrate -> record draws -> apply draws -> title
            .add_systems(
                Update,
                (
                    handle_input,
                    integrate,
                    record_draw_list,
                    apply_draw_list,
                    update_fps_title,
                )
                    .chain(),
            );
    }
}
