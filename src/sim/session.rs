//! Host-facing simulation session
//!
//! Bundles the state with its spawn rng so the host only deals with
//! `tick`, `reset` and read-only accessors.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::input::TickInput;
use super::spawn::SpawnRng;
use super::state::{Insect, SimulationState};
use super::tick::{TickReport, tick};
use crate::config::{ConfigError, SimConfig};

/// One running game
#[derive(Debug, Clone)]
pub struct Simulation<R: SpawnRng = Pcg32> {
    state: SimulationState,
    rng: R,
    last_report: TickReport,
}

impl Simulation<Pcg32> {
    /// Session with a seeded PCG spawn source
    pub fn seeded(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        log::info!("Seeding spawn rng with {}", seed);
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: SpawnRng> Simulation<R> {
    /// Validate `config` and start a fresh session
    pub fn new(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        let state = SimulationState::new(config)?;
        log::info!(
            "New simulation: {}x{} screen, spawn every {} ticks",
            state.config.screen_width,
            state.config.screen_height,
            state.config.spawn_interval
        );
        Ok(Self {
            state,
            rng,
            last_report: TickReport::default(),
        })
    }

    /// Advance one frame and return the updated state for rendering
    pub fn tick(&mut self, input: &TickInput) -> &SimulationState {
        self.last_report = tick(&mut self.state, input, &mut self.rng);
        &self.state
    }

    /// Back to starting conditions. The config and rng stream are kept.
    pub fn reset(&mut self) -> &SimulationState {
        log::info!(
            "Reset after {} ticks with score {}",
            self.state.time_ticks,
            self.state.score
        );
        self.state.reset();
        self.last_report = TickReport::default();
        &self.state
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score()
    }

    pub fn actor_position(&self) -> IVec2 {
        self.state.actor_position()
    }

    pub fn insects(&self) -> &[Insect] {
        self.state.insects()
    }

    /// Summary of the most recent tick
    pub fn last_report(&self) -> TickReport {
        self.last_report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::FixedSpawnY;

    #[test]
    fn test_new_rejects_bad_config() {
        let config = SimConfig {
            insect_speed: 0,
            ..Default::default()
        };
        assert!(Simulation::seeded(config, 1).is_err());
    }

    #[test]
    fn test_tick_and_accessors() {
        let mut sim = Simulation::new(SimConfig::default(), FixedSpawnY(95)).expect("valid config");
        for _ in 0..60 {
            sim.tick(&TickInput::default());
        }
        assert!(sim.last_report().spawned);
        assert_eq!(sim.insects(), &[Insect::new(0, 95)]);
        assert_eq!(sim.actor_position(), IVec2::new(80, 0));
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.state().time_ticks, 60);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut sim = Simulation::seeded(SimConfig::default(), 42).expect("valid config");
        sim.tick(&TickInput::pressed());
        for _ in 0..150 {
            sim.tick(&TickInput::default());
        }
        assert!(!sim.insects().is_empty());

        let state = sim.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.insects().is_empty());
        assert_eq!(state.actor_position(), IVec2::new(80, 0));
        assert_eq!(sim.last_report(), TickReport::default());
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = Simulation::seeded(SimConfig::default(), 7).expect("valid config");
        let mut b = Simulation::seeded(SimConfig::default(), 7).expect("valid config");
        for t in 0..600u32 {
            let input = TickInput {
                trigger_pressed: t % 45 == 3,
            };
            a.tick(&input);
            b.tick(&input);
        }
        assert_eq!(a.state(), b.state());
    }
}
