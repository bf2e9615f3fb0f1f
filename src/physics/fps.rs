use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tracing::debug;

use crate::config::{FPS_INTERVAL, WINDOW_TITLE};

/// Counts frames and reports them once per `interval` seconds.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(FPS_INTERVAL)
    }
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Count one frame. Returns the frame count once the interval has elapsed.
    pub fn tick(&mut self, dt: f32) -> Option<u32> {
        self.frames += 1;
        self.elapsed += dt.max(0.0);
        if self.elapsed < self.interval {
            return None;
        }
        let fps = self.frames;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}

pub fn title_with_fps(fps: u32) -> String {
    format!("{WINDOW_TITLE} | FPS: {fps}")
}

/// Surface the FPS in the primary window title.
pub fn update_fps_title(
    time: Res<Time>,
    mut counter: ResMut<FpsCounter>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(fps) = counter.tick(time.delta_secs()) else {
        return;
    };
    debug!(fps, "frame rate");
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.title = title_with_fps(fps);
}
