//! Input routing
//!
//! Translates raw key events into the two intents the simulation understands.
//! Events arrive asynchronously from the host; intents are buffered here and
//! drained exactly once per tick, so nothing is applied mid-step.

use crate::sim::TickInput;

/// Buffers key events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    jump_pending: bool,
    restart_pending: bool,
    demo: bool,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw key event (`KeyboardEvent.code` style names)
    pub fn key_down(&mut self, code: &str) {
        match code {
            "Space" => self.jump_pending = true,
            "KeyR" => self.restart_pending = true,
            "KeyI" => self.demo = !self.demo,
            _ => {}
        }
    }

    /// Force autopilot on or off, bypassing the key toggle
    pub fn set_demo(&mut self, demo: bool) {
        self.demo = demo;
    }

    /// Take the buffered intents for the next tick.
    ///
    /// One-shot intents are consumed; the demo toggle persists across ticks.
    pub fn drain(&mut self) -> TickInput {
        let input = TickInput {
            jump: self.jump_pending,
            restart: self.restart_pending,
            demo: self.demo,
        };
        self.jump_pending = false;
        self.restart_pending = false;
        input
    }
}
