//! Per-tick input sampling
//!
//! The host polls raw button levels; the simulation only ever sees whether
//! the trigger was *just* pressed this tick.

use serde::{Deserialize, Serialize};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Drop the spider (pointer click or trigger key, press edge only)
    pub trigger_pressed: bool,
}

impl TickInput {
    /// Input with the trigger pressed this tick
    pub fn pressed() -> Self {
        Self {
            trigger_pressed: true,
        }
    }
}

/// Raw button levels polled by the host for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawInput {
    /// Primary pointer button currently held
    pub pointer_primary_down: bool,
    /// Designated trigger key (space) currently held
    pub trigger_key_down: bool,
}

/// Turns held levels into press edges
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    pointer_was_down: bool,
    key_was_down: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample one tick. Holding a button yields a press only on the first tick.
    pub fn sample(&mut self, raw: &RawInput) -> TickInput {
        let pointer_edge = raw.pointer_primary_down && !self.pointer_was_down;
        let key_edge = raw.trigger_key_down && !self.key_was_down;

        self.pointer_was_down = raw.pointer_primary_down;
        self.key_was_down = raw.trigger_key_down;

        TickInput {
            trigger_pressed: pointer_edge || key_edge,
        }
    }

    /// Forget held buttons
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
