//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only, advanced by host-supplied elapsed time
//! - Seeded RNG only
//! - Obstacles kept in FIFO order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, sphere_aabb_contact};
pub use state::{GamePhase, GameState, Obstacle, Player, SpawnTimer};
pub use tick::{TickInput, tick};
