//! Spin Triangle headless driver
//!
//! Stands in for the windowed harness: runs the simulation at the configured
//! tick rate, draws every tick into an in-memory frame and logs contacts.
//!
//! Usage: `spin-triangle [settings.json] [ticks]`

use std::process::ExitCode;

use spin_triangle::Settings;
use spin_triangle::renderer::{FrameRecorder, draw_frame};
use spin_triangle::sim::{Contact, SimEvent, SimState, TickInput, tick};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Spin Triangle (headless) starting...");

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Ten seconds at the default rate
const DEFAULT_TICKS: u64 = 300;

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match args.first() {
        Some(path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    let ticks = match args.get(1) {
        Some(n) => n.parse()?,
        None => DEFAULT_TICKS,
    };

    let dt = settings.tick_dt();
    let mut state = SimState::new(settings)?;
    let mut recorder = FrameRecorder::default();
    let input = TickInput::default();

    let mut ball_hits = 0u32;
    let mut wall_bounces = 0u32;
    let mut skipped = 0u32;

    for _ in 0..ticks {
        tick(&mut state, &input, dt)?;

        for event in &state.events {
            match event {
                SimEvent::TriangleHit {
                    contact: Contact::Ball,
                    edge,
                    incidence,
                    reflection,
                } => {
                    ball_hits += 1;
                    log::info!(
                        "Tick {}: ball hit edge {} at {:.1}°, left at {:.1}°",
                        state.time_ticks,
                        edge,
                        incidence,
                        reflection
                    );
                }
                SimEvent::WallBounce { .. } => wall_bounces += 1,
                _ => {}
            }
        }

        // Draw strictly after this tick's mutation
        recorder.begin_frame();
        if draw_frame(&state, &mut recorder).is_err() {
            skipped += 1;
        }
    }

    log::info!(
        "Ran {} ticks: {} triangle hits, {} wall bounces, {} frames skipped, rot_angle {:.1}°",
        state.time_ticks,
        ball_hits,
        wall_bounces,
        skipped,
        state.triangle.rot_angle
    );
    log::info!(
        "Last frame: {} vertices ({} bytes)",
        recorder.vertices.len(),
        recorder.as_bytes().len()
    );
    Ok(())
}
