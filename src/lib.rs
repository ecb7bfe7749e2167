//! Spider Drop - a tiny arcade simulation
//!
//! A spider hangs from the top of the screen and drops on its thread to
//! catch insects flying in from the left edge.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor, spawning, collisions, scoring)
//! - `config`: Validated simulation constants, loadable from JSON
//! - `autopilot`: Simple controller used by the headless demo host
//!
//! Window creation, sprites, raw input polling and drawing belong to the host.

pub mod autopilot;
pub mod config;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use sim::{Simulation, SimulationState, TickInput};

/// Default simulation constants
pub mod consts {
    /// Frames per second the host is expected to tick at
    pub const TICK_HZ: u32 = 30;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 160;
    pub const SCREEN_HEIGHT: i32 = 120;

    /// Spider defaults - hangs at a fixed column
    pub const ACTOR_X: i32 = 80;
    /// Lowest point of a drop before the spider climbs back
    pub const MAX_DESCEND_Y: i32 = 100;
    /// Pixels per tick, both down and up
    pub const DESCEND_SPEED: i32 = 2;
    /// Tether starts this far below the spider's center
    pub const TETHER_ANCHOR_OFFSET: i32 = 3;

    /// Insect defaults
    pub const INSECT_SPEED: i32 = 1;
    /// Ticks between spawns (one second at 60 Hz)
    pub const SPAWN_INTERVAL: u32 = 60;
    /// Closed band for a spawned insect's y
    pub const SPAWN_Y_MIN: i32 = 70;
    pub const SPAWN_Y_MAX: i32 = 110;

    /// Hitbox half-extent on both axes (8x8 boxes)
    pub const HALF_EXTENT: i32 = 4;
}
