use bevy::prelude::*;

/// Window / simulation space (origin top-left, +Y down)
pub const WINDOW_WIDTH: u32 = 720;
pub const WINDOW_HEIGHT: u32 = 720;
pub const WINDOW_TITLE: &str = "Physics";

/// Boundary circle sits in the middle of the window
pub const CENTER: Vec2 = Vec2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0);
pub const BOUNDARY_RADIUS: f32 = WINDOW_HEIGHT as f32 / 2.0;

/// Ball / particle defaults
pub const BALL_RADIUS: f32 = BOUNDARY_RADIUS / 50.0;
pub const MAX_BALLS: usize = 2048;

/// Horizontal launch speeds are drawn from [-LAUNCH_SPEED, LAUNCH_SPEED]
pub const LAUNCH_SPEED: f32 = 1000.0;

/// Gravity (simulation units per second squared; +Y down)
pub const GRAVITY: f32 = 750.0;

/// Scales the displacement of each step (not the stored velocity)
pub const AIR_RESISTANCE: f32 = 0.90;

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const BOUNDARY_COLOR: Color = Color::srgb(20.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0);

/// How often the FPS title is refreshed (seconds)
pub const FPS_INTERVAL: f32 = 1.0;

/// z spacing between consecutive draw calls (later calls render on top)
pub const DRAW_Z_STEP: f32 = 1.0e-3;
