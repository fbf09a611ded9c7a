//! Marble Dash entry point
//!
//! Headless demo runner: drives the simulation with the autopilot at a fixed
//! 60 Hz cadence and prints a JSON summary of the session. A rendering host
//! feeds ticks the same way, with real elapsed time and real key events.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use marble_dash::consts::TICK_DT_MS;
use marble_dash::sim::{GamePhase, GameState, tick};
use marble_dash::{FpsCounter, HighScores, InputRouter};

/// Demo session length in ticks (about two minutes at 60 Hz)
const DEMO_TICKS: u64 = 7200;

#[derive(Debug, Serialize)]
struct DemoSummary {
    seed: u64,
    ticks: u64,
    runs: u32,
    score: u32,
    best_score: Option<u32>,
    fps: f32,
}

fn main() {
    env_logger::init();

    // Seed from the first CLI argument, or the wall clock
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("marble dash headless demo starting with seed {seed}");

    let mut state = GameState::new(seed);
    let mut router = InputRouter::new();
    router.set_demo(true);

    let mut fps = FpsCounter::new(0.0);
    let mut scores = HighScores::new();
    let mut runs = 0u32;
    let mut last_phase = state.phase;

    for frame in 0..DEMO_TICKS {
        let input = router.drain();
        tick(&mut state, &input, TICK_DT_MS);
        fps.frame((frame + 1) as f64 * f64::from(TICK_DT_MS));

        // Record each finished run once; the autopilot restarts on the next tick
        if state.phase == GamePhase::GameOver && last_phase == GamePhase::Running {
            runs += 1;
            match scores.record(state.score, state.time_ticks) {
                Some(rank) => {
                    log::info!("run {runs} ended at rank {rank} with score {}", state.score)
                }
                None => log::info!("run {runs} ended with score {}", state.score),
            }
        }
        last_phase = state.phase;
    }

    // The run still in progress counts too
    runs += 1;
    scores.record(state.score, state.time_ticks);

    let summary = DemoSummary {
        seed,
        ticks: state.time_ticks,
        runs,
        score: state.score,
        best_score: scores.top_score(),
        fps: fps.fps(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).expect("summary serializes")
    );
}
