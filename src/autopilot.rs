//! Demo autopilot
//!
//! Drops the spider when a straight drop started now would meet an insect.
//! Used by the headless host; the simulation itself never calls it.

use glam::IVec2;

use crate::sim::{Aabb, SimulationState};

/// True when pressing the trigger this tick leads to a catch.
///
/// Only fires while the spider rests at the top. Projects each insect and the
/// spider forward tick by tick until the drop would turn around.
pub fn should_trigger(state: &SimulationState) -> bool {
    let actor = &state.actor;
    if !actor.is_resting() {
        return false;
    }

    let config = &state.config;
    let mut steps = 1;
    loop {
        let drop_y = actor.pos.y + config.descend_speed * steps;
        let spider = Aabb::from_center(IVec2::new(actor.pos.x, drop_y), config.actor_half_extents);

        let hit = state.insects.iter().any(|insect| {
            let projected = IVec2::new(insect.pos.x + config.insect_speed * steps, insect.pos.y);
            projected.x < config.screen_width
                && spider.overlaps(&Aabb::from_center(projected, config.insect_half_extents))
        });
        if hit {
            return true;
        }
        if drop_y > config.max_descend_y {
            return false;
        }
        steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::{ActorMode, FixedSpawnY, Insect, TickInput, tick};

    fn new_state() -> SimulationState {
        SimulationState::new(SimConfig::default()).expect("default config")
    }

    #[test]
    fn test_waits_with_no_insects() {
        assert!(!should_trigger(&new_state()));
    }

    #[test]
    fn test_waits_for_far_insect() {
        let mut state = new_state();
        state.insects.push(Insect::new(0, 90));
        assert!(!should_trigger(&state));
    }

    #[test]
    fn test_ignores_passed_insect() {
        let mut state = new_state();
        state.insects.push(Insect::new(100, 90));
        assert!(!should_trigger(&state));
    }

    #[test]
    fn test_never_fires_mid_drop() {
        let mut state = new_state();
        state.actor.mode = ActorMode::Descending;
        state.actor.pos.y = 10;
        state.insects.push(Insect::new(35, 90));
        assert!(!should_trigger(&state));
    }

    #[test]
    fn test_fired_drop_catches() {
        let mut state = new_state();
        // Spider needs 45 ticks to reach y=90; insect needs 45 to reach x=80
        state.insects.push(Insect::new(35, 90));
        assert!(should_trigger(&state));

        let mut rng = FixedSpawnY(90);
        tick(&mut state, &TickInput::pressed(), &mut rng);
        let mut caught = false;
        for _ in 0..60 {
            caught |= tick(&mut state, &TickInput::default(), &mut rng).caught > 0;
        }
        assert!(caught);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_scores_over_a_long_run() {
        let mut state = new_state();
        let mut rng = FixedSpawnY(90);
        for _ in 0..3000 {
            let input = TickInput {
                trigger_pressed: should_trigger(&state),
            };
            tick(&mut state, &input, &mut rng);
        }
        assert!(state.score() > 0);
    }
}
