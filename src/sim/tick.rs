//! Tick-driven simulation step
//!
//! Advances one session by one frame. Order within a tick is fixed: intents,
//! marble, obstacle track, spawner, collision. Each piece of state has a
//! single writer per tick, so the phases below never race each other.

use super::collision::sphere_aabb_contact;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input intents for a single tick
///
/// The host buffers raw events between frames and applies them here,
/// atomically, at the start of the step. Nothing changes mid-tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump. Ignored while airborne and after a game over.
    pub jump: bool,
    /// Restart. Ignored unless the run has ended.
    pub restart: bool,
    /// Autopilot: jumps over obstacles and restarts ended runs
    pub demo: bool,
}

/// Advance the game state by one tick.
///
/// `dt_ms` is the host-supplied elapsed time since the previous tick and must
/// be non-negative; it drives spawn timing only. Vertical motion and scroll
/// integrate per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    let mut input = input.clone();
    if input.demo {
        autopilot(state, &mut input);
    }
    let input = &input;

    if state.phase == GamePhase::GameOver {
        // The only intent accepted here is a restart
        if input.restart {
            state.restart();
        }
        return;
    }

    state.time_ticks += 1;

    // Jump is accepted only when grounded
    if input.jump {
        state.player.try_jump();
    }

    // Vertical integration with the landing clamp, then the cosmetic roll
    state.player.integrate();
    state.player.rotation -= SCROLL_SPEED * SPIN_FACTOR;

    // Scroll the track and flag newly cleared walls. The passed flag flips
    // once per obstacle, so re-checking cannot double-count.
    for obstacle in state.obstacles.iter_mut() {
        obstacle.x -= SCROLL_SPEED;
        if !obstacle.passed && obstacle.x < PLAYER_X - PLAYER_RADIUS {
            obstacle.passed = true;
            state.score += 1;
        }
    }

    // Retire walls past the exit edge. Scroll is uniform, so the oldest
    // obstacle is always the first to cross.
    while state.obstacles.front().is_some_and(|o| o.x < EXIT_X) {
        state.obstacles.pop_front();
    }

    // Spawner fires at most one wall per tick; a fresh wall holds its spawn
    // position until the next tick's scroll
    if state.advance_spawner(dt_ms) {
        state.spawn_obstacle();
    }

    // First contact ends the run; the score freezes at its current value
    let center = state.player.center();
    for obstacle in state.obstacles.iter() {
        if sphere_aabb_contact(center, PLAYER_RADIUS, &obstacle.aabb()) {
            state.phase = GamePhase::GameOver;
            log::info!("game over at tick {}, score {}", state.time_ticks, state.score);
            break;
        }
    }
}

/// Demo autopilot: jump when the nearest oncoming wall gets close, restart as
/// soon as a run ends
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::GameOver => input.restart = true,
        GamePhase::Running => {
            let oncoming = state
                .obstacles
                .iter()
                .any(|o| o.x > PLAYER_X && o.x - PLAYER_X < DEMO_JUMP_DISTANCE);
            if oncoming && !state.player.jumping {
                input.jump = true;
            }
        }
    }
}
