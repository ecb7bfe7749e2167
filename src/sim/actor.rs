//! The spider and its drop/climb cycle

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::TETHER_ANCHOR_OFFSET;

/// Vertical movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActorMode {
    /// Climbing back up the thread (or resting at the top)
    #[default]
    Ascending,
    /// Dropping toward the floor
    Descending,
}

/// The player-controlled spider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Center position; x never changes
    pub pos: IVec2,
    pub mode: ActorMode,
}

impl Actor {
    /// Spider resting at the top of its column
    pub fn new(x: i32) -> Self {
        Self {
            pos: IVec2::new(x, 0),
            mode: ActorMode::Ascending,
        }
    }

    /// Advance one tick.
    ///
    /// A trigger only starts a drop while ascending and not past
    /// `max_descend_y`. Crossing `max_descend_y` flips the mode without clamping, so y overshoots
    /// by at most one step.
    pub fn update(&mut self, trigger_pressed: bool, descend_speed: i32, max_descend_y: i32) {
        if trigger_pressed && self.mode == ActorMode::Ascending && self.pos.y <= max_descend_y {
            self.mode = ActorMode::Descending;
        }

        match self.mode {
            ActorMode::Descending => {
                self.pos.y += descend_speed;
                if self.pos.y > max_descend_y {
                    self.mode = ActorMode::Ascending;
                }
            }
            ActorMode::Ascending => {
                self.pos.y = (self.pos.y - descend_speed).max(0);
            }
        }
    }

    /// Abort a drop after catching something. Idempotent; y is left alone.
    pub fn force_ascend(&mut self) {
        self.mode = ActorMode::Ascending;
    }

    /// Where the thread attaches to the spider's body
    pub fn tether_anchor(&self) -> IVec2 {
        self.pos + IVec2::new(0, TETHER_ANCHOR_OFFSET)
    }

    /// Where the thread is tied at the top of the screen
    pub fn tether_top(&self) -> IVec2 {
        IVec2::new(self.pos.x, 0)
    }

    pub fn is_resting(&self) -> bool {
        self.mode == ActorMode::Ascending && self.pos.y == 0
    }
}
