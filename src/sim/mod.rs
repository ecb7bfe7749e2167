//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no timing of its own
//! - Injected RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod input;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorMode};
pub use collision::{Aabb, advance_insects, expire_insects, resolve_catches};
pub use input::{InputSampler, RawInput, TickInput};
pub use session::Simulation;
pub use spawn::{FixedSpawnY, ScriptedSpawnY, SpawnRng, advance_spawn_timer};
pub use state::{Insect, InsectRegistry, SimulationState};
pub use tick::{TickReport, tick};
