//! Balls bouncing inside a circular boundary under gravity.
//!
//! The integrator and particle store are plain Rust; Bevy only supplies the
//! window, input, frame clock and disc rendering around them.

pub mod config;
pub mod physics;
