//! Simulation state and entity types
//!
//! Everything a tick reads or writes lives in [`SimulationState`]. The host
//! owns it and hands it to [`tick`](super::tick::tick) once per frame.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use crate::config::{ConfigError, SimConfig};

/// An insect flying left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insect {
    /// Center position
    pub pos: IVec2,
}

impl Insect {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
        }
    }
}

/// Live insects, in spawn order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsectRegistry {
    insects: Vec<Insect>,
}

impl InsectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, insect: Insect) {
        self.insects.push(insect);
    }

    pub fn len(&self) -> usize {
        self.insects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Insect> {
        self.insects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Insect> {
        self.insects.iter_mut()
    }

    pub fn as_slice(&self) -> &[Insect] {
        &self.insects
    }

    /// Keep insects matching `keep`, in one pass. Returns how many were removed.
    pub fn retain(&mut self, keep: impl FnMut(&Insect) -> bool) -> usize {
        let before = self.insects.len();
        self.insects.retain(keep);
        before - self.insects.len()
    }

    /// Remove the insects flagged in `remove` (indexed like `as_slice`).
    /// Returns how many were removed.
    pub fn remove_flagged(&mut self, remove: &[bool]) -> usize {
        debug_assert_eq!(remove.len(), self.insects.len());
        let mut flags = remove.iter();
        self.retain(|_| !flags.next().copied().unwrap_or(false))
    }

    pub fn clear(&mut self) {
        self.insects.clear();
    }
}

impl<'a> IntoIterator for &'a InsectRegistry {
    type Item = &'a Insect;
    type IntoIter = std::slice::Iter<'a, Insect>;

    fn into_iter(self) -> Self::IntoIter {
        self.insects.iter()
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Validated constants
    pub config: SimConfig,
    pub actor: Actor,
    pub insects: InsectRegistry,
    /// Insects caught since reset (never decreases)
    pub score: u64,
    /// Ticks since the last spawn, in `[0, spawn_interval)`
    pub spawn_timer: u32,
    /// Ticks since reset
    pub time_ticks: u64,
    /// Insects spawned since reset
    pub insects_spawned: u64,
}

impl SimulationState {
    /// Validate `config` and build the starting state
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            actor: Actor::new(config.actor_x),
            insects: InsectRegistry::new(),
            score: 0,
            spawn_timer: 0,
            time_ticks: 0,
            insects_spawned: 0,
            config,
        })
    }

    /// Back to starting conditions, keeping the config
    pub fn reset(&mut self) {
        self.actor = Actor::new(self.config.actor_x);
        self.insects.clear();
        self.score = 0;
        self.spawn_timer = 0;
        self.time_ticks = 0;
        self.insects_spawned = 0;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn actor_position(&self) -> IVec2 {
        self.actor.pos
    }

    pub fn insects(&self) -> &[Insect] {
        self.insects.as_slice()
    }
}
