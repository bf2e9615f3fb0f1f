use bevy::prelude::*;
use bevy::window::WindowResolution;

use circle_pit::config::{BACKGROUND_COLOR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use circle_pit::physics::PhysicsPlugin;

fn main() -> AppExit {
    App::new()
        // Solid black background
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // Bevy's core engine features, fixed-size square window
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.to_string(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        // Store, integrator and disc drawing
        .add_plugins(PhysicsPlugin)
        .run()
}
