//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one frame deterministically:
//! input, spider, spawning, then motion and collisions.

use serde::{Deserialize, Serialize};

use super::collision::{advance_insects, expire_insects, resolve_catches};
use super::input::TickInput;
use super::spawn::{SpawnRng, advance_spawn_timer};
use super::state::SimulationState;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// An insect appeared at the left edge
    pub spawned: bool,
    /// Insects that flew off the right edge
    pub expired: usize,
    /// Insects caught (added to score)
    pub caught: u32,
}

/// Advance the simulation state by one frame
pub fn tick(state: &mut SimulationState, input: &TickInput, rng: &mut impl SpawnRng) -> TickReport {
    state.time_ticks += 1;

    state.actor.update(
        input.trigger_pressed,
        state.config.descend_speed,
        state.config.max_descend_y,
    );

    let spawned = advance_spawn_timer(state, rng);

    // Newly spawned insects start at the edge; only older ones move this tick
    advance_insects(&mut state.insects, state.config.insect_speed);
    let expired = expire_insects(&mut state.insects, state.config.screen_width);
    if let Some(insect) = spawned {
        state.insects.push(insect);
    }

    let caught = resolve_catches(
        &mut state.actor,
        &mut state.insects,
        state.config.actor_half_extents,
        state.config.insect_half_extents,
    );
    if caught > 0 {
        state.score += u64::from(caught);
        log::debug!(
            "Caught {} insect(s) at y={}, score {}",
            caught,
            state.actor.pos.y,
            state.score
        );
    }

    TickReport {
        spawned: spawned.is_some(),
        expired,
        caught,
    }
}
