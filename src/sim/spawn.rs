//! Insect spawning
//!
//! A cyclic timer drops one insect at the left edge every `spawn_interval`
//! ticks. The y position comes from an injected [`SpawnRng`].

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Insect, SimulationState};

/// Source of spawn heights
pub trait SpawnRng {
    /// A y in the closed band `[min, max]`
    fn spawn_y(&mut self, min: i32, max: i32) -> i32;
}

impl SpawnRng for Pcg32 {
    fn spawn_y(&mut self, min: i32, max: i32) -> i32 {
        self.random_range(min..=max)
    }
}

/// Always spawns at the same height (clamped into the band)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSpawnY(pub i32);

impl SpawnRng for FixedSpawnY {
    fn spawn_y(&mut self, min: i32, max: i32) -> i32 {
        self.0.clamp(min, max)
    }
}

/// Cycles through a fixed list of heights (clamped into the band)
#[derive(Debug, Clone)]
pub struct ScriptedSpawnY {
    values: Vec<i32>,
    next: usize,
}

impl ScriptedSpawnY {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, next: 0 }
    }
}

impl SpawnRng for ScriptedSpawnY {
    fn spawn_y(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let y = self.values[self.next % self.values.len()];
        self.next = (self.next + 1) % self.values.len();
        y.clamp(min, max)
    }
}

/// Advance the spawn timer; on wrap, return a new insect at the left edge.
///
/// At most one insect per tick. The caller decides when it joins the registry.
pub fn advance_spawn_timer(state: &mut SimulationState, rng: &mut impl SpawnRng) -> Option<Insect> {
    state.spawn_timer += 1;
    if state.spawn_timer < state.config.spawn_interval {
        return None;
    }
    state.spawn_timer = 0;

    let y = rng.spawn_y(state.config.spawn_y_min, state.config.spawn_y_max);
    state.insects_spawned += 1;
    log::debug!("Spawned insect #{} at y={}", state.insects_spawned, y);
    Some(Insect::new(0, y))
}
