//! Headless run: fill the store, step a fixed number of frames at a fixed dt.
//!
//! Usage: `benchmark [FRAMES]`

use std::time::Instant;

use clap::Parser;

use circle_pit::config::{BALL_RADIUS, LAUNCH_SPEED, MAX_BALLS};
use circle_pit::physics::integrator::step_all;
use circle_pit::physics::systems::SimRng;
use circle_pit::physics::{Boundary, ParticleStore};

const DEFAULT_FRAMES: u32 = 10_000;
const DT: f32 = 1.0 / 60.0;
const SEED: u64 = 42;

#[derive(Parser, Debug)]
#[command(name = "benchmark")]
#[command(about = "Headless integrator run over a full particle store", long_about = None)]
struct Args {
    /// Number of frames to step
    #[arg(default_value_t = DEFAULT_FRAMES)]
    frames: u32,
}

#[cfg_attr(feature = "profile", derive(serde::Serialize))]
#[derive(Debug)]
struct BenchReport {
    particles: usize,
    frames: u32,
    dt: f32,
    elapsed_secs: f64,
    particle_steps_per_sec: f64,
    contained: usize,
    max_speed: f32,
}

fn main() {
    let frames = Args::parse().frames;

    let boundary = Boundary::default();
    let mut rng = SimRng::seeded(SEED);
    let mut store = ParticleStore::new(MAX_BALLS, boundary.center, LAUNCH_SPEED, &mut rng.0);
    store.spawn_until_full(&mut rng.0);

    let start = Instant::now();
    for _ in 0..frames {
        step_all(store.live_mut(), &boundary, DT);
    }
    let elapsed = start.elapsed().as_secs_f64();

    // allow a little slack for the float rounding of the wall clip
    let contained = store
        .iterate_live()
        .filter(|p| boundary.contains(p.position, BALL_RADIUS - 1e-2))
        .count();
    let max_speed = store.iterate_live().map(|p| p.speed()).fold(0.0, f32::max);

    let steps = store.live_count() as f64 * f64::from(frames);
    let report = BenchReport {
        particles: store.live_count(),
        frames,
        dt: DT,
        elapsed_secs: elapsed,
        particle_steps_per_sec: if elapsed > 0.0 { steps / elapsed } else { 0.0 },
        contained,
        max_speed,
    };

    println!(
        "{} particles x {} frames (dt {:.4}) in {:.3}s ({:.0} steps/s), {} contained, max speed {:.1}",
        report.particles,
        report.frames,
        report.dt,
        report.elapsed_secs,
        report.particle_steps_per_sec,
        report.contained,
        report.max_speed
    );
    print_json(&report);
}

#[cfg(feature = "profile")]
fn print_json(report: &BenchReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize report: {e}"),
    }
}

#[cfg(not(feature = "profile"))]
fn print_json(_: &BenchReport) {}
