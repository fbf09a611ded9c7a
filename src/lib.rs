//! Marble Dash - a single-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump physics, obstacle track, game state)
//! - `input`: Raw key events to buffered per-tick intents
//! - `fps`: Frame-rate sample derived from tick cadence
//! - `highscores`: In-memory session leaderboard

pub mod fps;
pub mod highscores;
pub mod input;
pub mod sim;

pub use fps::FpsCounter;
pub use highscores::HighScores;
pub use input::InputRouter;

/// Game configuration constants
pub mod consts {
    /// Nominal tick duration at display refresh (milliseconds)
    pub const TICK_DT_MS: f32 = 1000.0 / 60.0;

    /// Length of the lane slab the marble rolls on
    pub const LANE_LENGTH: f32 = 120.0;
    /// Thickness of the lane slab
    pub const LANE_THICKNESS: f32 = 0.2;
    /// Lane depth (the single lane is this wide in z)
    pub const LANE_DEPTH: f32 = 10.0;

    /// Marble defaults
    pub const PLAYER_RADIUS: f32 = 0.5;
    /// Fixed horizontal position of the marble
    pub const PLAYER_X: f32 = 0.0;
    /// Vertical position of the marble center when resting on the lane
    pub const REST_HEIGHT: f32 = PLAYER_RADIUS + LANE_THICKNESS / 2.0;
    /// Upward velocity applied when a jump is accepted (units per tick)
    pub const JUMP_SPEED: f32 = 0.25;
    /// Vertical acceleration while airborne (units per tick squared)
    pub const GRAVITY: f32 = -0.008;
    /// Cosmetic roll rate relative to scroll speed
    pub const SPIN_FACTOR: f32 = 1.5;

    /// Obstacle defaults - a wall segment spanning the full lane depth
    pub const OBSTACLE_WIDTH: f32 = 1.0;
    pub const OBSTACLE_HEIGHT: f32 = 1.0;
    pub const OBSTACLE_DEPTH: f32 = LANE_DEPTH;
    /// Horizontal scroll speed (units per tick)
    pub const SCROLL_SPEED: f32 = 0.08;
    /// Obstacles enter at the far edge of the lane
    pub const SPAWN_X: f32 = LANE_LENGTH / 2.0;
    /// Obstacles past this point are retired
    pub const EXIT_X: f32 = -LANE_LENGTH / 2.0;

    /// Spawn delay range, drawn uniformly (milliseconds)
    pub const SPAWN_DELAY_MIN_MS: f32 = 1000.0;
    pub const SPAWN_DELAY_MAX_MS: f32 = 3000.0;

    /// Demo autopilot jumps when the nearest oncoming obstacle is this close
    pub const DEMO_JUMP_DISTANCE: f32 = 2.5;
}
