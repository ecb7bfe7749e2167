//! Simulation configuration
//!
//! Every tunable constant lives in [`SimConfig`]. A config is validated once,
//! before any simulation state is built from it.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration faults, reported at initialization
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("spawn band is empty: min {min} > max {max}")]
    EmptySpawnBand { min: i32, max: i32 },
    #[error("actor x {x} is outside the screen (width {width})")]
    ActorOffScreen { x: i32, width: i32 },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Fixed column the spider hangs from
    pub actor_x: i32,
    /// Floor of a drop; crossing it turns the spider around
    pub max_descend_y: i32,
    pub descend_speed: i32,
    pub insect_speed: i32,
    pub spawn_interval: u32,
    /// Closed band for spawned insect y
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,
    pub actor_half_extents: IVec2,
    pub insect_half_extents: IVec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            actor_x: ACTOR_X,
            max_descend_y: MAX_DESCEND_Y,
            descend_speed: DESCEND_SPEED,
            insect_speed: INSECT_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            spawn_y_min: SPAWN_Y_MIN,
            spawn_y_max: SPAWN_Y_MAX,
            actor_half_extents: IVec2::splat(HALF_EXTENT),
            insect_half_extents: IVec2::splat(HALF_EXTENT),
        }
    }
}

impl SimConfig {
    /// Check every constant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("descend_speed", self.descend_speed),
            ("insect_speed", self.insect_speed),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::NonPositive {
                field: "spawn_interval",
            });
        }

        let non_negative = [
            ("max_descend_y", self.max_descend_y),
            ("actor_half_extents.x", self.actor_half_extents.x),
            ("actor_half_extents.y", self.actor_half_extents.y),
            ("insect_half_extents.x", self.insect_half_extents.x),
            ("insect_half_extents.y", self.insect_half_extents.y),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::Negative { field });
            }
        }

        if self.spawn_y_min > self.spawn_y_max {
            return Err(ConfigError::EmptySpawnBand {
                min: self.spawn_y_min,
                max: self.spawn_y_max,
            });
        }
        if !(0..self.screen_width).contains(&self.actor_x) {
            return Err(ConfigError::ActorOffScreen {
                x: self.actor_x,
                width: self.screen_width,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
