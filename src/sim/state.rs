//! Game state and core simulation types
//!
//! One `GameState` exists per play session. Everything observable by the
//! display layer (positions, roll, score, phase) lives here as plain fields.

use std::collections::VecDeque;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended on collision, waiting for a restart
    GameOver,
}

/// The player's marble
///
/// Created once at session start and reset in place on restart, never
/// recreated. The horizontal position is fixed at `PLAYER_X`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Vertical position of the sphere center
    pub y: f32,
    /// Vertical velocity (units per tick)
    pub vel_y: f32,
    /// Cosmetic roll angle in radians, driven by scroll speed
    pub rotation: f32,
    /// Whether a jump is in flight
    pub jumping: bool,
}

impl Player {
    fn grounded() -> Self {
        Self {
            y: REST_HEIGHT,
            vel_y: 0.0,
            rotation: 0.0,
            jumping: false,
        }
    }

    /// Sphere center in world space (x and z are fixed)
    pub fn center(&self) -> Vec3 {
        Vec3::new(PLAYER_X, self.y, 0.0)
    }

    /// Back to the grounded pose. The roll angle is cosmetic and carries over.
    pub(crate) fn reset(&mut self) {
        self.y = REST_HEIGHT;
        self.vel_y = 0.0;
        self.jumping = false;
    }

    /// Accept a jump if grounded; a no-op while airborne
    pub(crate) fn try_jump(&mut self) {
        if !self.jumping {
            self.jumping = true;
            self.vel_y = JUMP_SPEED;
        }
    }

    /// Advance vertical motion by one tick.
    ///
    /// The landing clamp runs whenever the integrated position reaches the
    /// rest height, however large the overshoot, so the marble can never end
    /// a tick below the lane surface.
    pub(crate) fn integrate(&mut self) {
        if self.jumping {
            self.vel_y += GRAVITY;
            self.y += self.vel_y;
            if self.y <= REST_HEIGHT {
                self.y = REST_HEIGHT;
                self.vel_y = 0.0;
                self.jumping = false;
            }
        }
    }
}

/// A wall segment scrolling toward the player
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Monotonically increasing, unique within a session
    pub id: u32,
    /// Horizontal position of the box center
    pub x: f32,
    /// Set exactly once when the marble clears this wall (scoring trigger)
    pub passed: bool,
}

impl Obstacle {
    /// Vertical center of the box, resting on the lane surface
    pub const CENTER_Y: f32 = OBSTACLE_HEIGHT / 2.0 + LANE_THICKNESS / 2.0;

    /// New obstacle at the far edge of the lane
    pub fn new(id: u32) -> Self {
        Self {
            id,
            x: SPAWN_X,
            passed: false,
        }
    }

    /// World-space bounding box
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(
            Vec3::new(self.x, Self::CENTER_Y, 0.0),
            Vec3::new(
                OBSTACLE_WIDTH / 2.0,
                OBSTACLE_HEIGHT / 2.0,
                OBSTACLE_DEPTH / 2.0,
            ),
        )
    }
}

/// Spawn timing accumulator
///
/// Re-armed with a fresh uniform delay after every spawn, including the very
/// first at session start and again on restart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnTimer {
    /// Milliseconds accumulated since the last spawn
    pub elapsed_ms: f32,
    /// Delay before the next spawn fires
    pub next_delay_ms: f32,
}

impl SpawnTimer {
    /// Fresh timer with a newly drawn delay
    pub fn armed(rng: &mut Pcg32) -> Self {
        Self {
            elapsed_ms: 0.0,
            next_delay_ms: draw_delay(rng),
        }
    }

    /// Accumulate elapsed time; returns true when a spawn is due.
    ///
    /// Fires at most once per call and immediately re-arms with a new delay.
    pub fn advance(&mut self, dt_ms: f32, rng: &mut Pcg32) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.next_delay_ms {
            self.elapsed_ms = 0.0;
            self.next_delay_ms = draw_delay(rng);
            return true;
        }
        false
    }
}

fn draw_delay(rng: &mut Pcg32) -> f32 {
    rng.random_range(SPAWN_DELAY_MIN_MS..SPAWN_DELAY_MAX_MS)
}

/// Placeholder RNG for deserialized states; reseed from `seed` to replay
fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete state for one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Spawn-delay RNG, advanced only by the spawner
    #[serde(skip, default = "detached_rng")]
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Obstacles cleared this run
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The player's marble
    pub player: Player,
    /// Live obstacles in insertion order, oldest first
    pub obstacles: VecDeque<Obstacle>,
    /// Spawn timing state
    pub spawn_timer: SpawnTimer,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_timer = SpawnTimer::armed(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            player: Player::grounded(),
            obstacles: VecDeque::new(),
            spawn_timer,
            next_id: 1,
        }
    }

    /// Restart after a game over, all in one step: empty track, grounded
    /// marble, zero score, freshly armed spawn timer. The countdown that was
    /// pending before the reset is discarded.
    pub(crate) fn restart(&mut self) {
        self.obstacles.clear();
        self.player.reset();
        self.score = 0;
        self.spawn_timer = SpawnTimer::armed(&mut self.rng);
        self.phase = GamePhase::Running;
    }

    /// Advance spawn timing; returns true when a new obstacle is due
    pub(crate) fn advance_spawner(&mut self, dt_ms: f32) -> bool {
        self.spawn_timer.advance(dt_ms, &mut self.rng)
    }

    /// Push a new obstacle at the far edge of the lane
    pub(crate) fn spawn_obstacle(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push_back(Obstacle::new(id));
    }
}
