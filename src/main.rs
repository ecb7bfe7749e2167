//! Spider Drop headless host
//!
//! Runs the simulation without a window: the autopilot stands in for the
//! player's clicks, and the final state is printed as JSON.
//!
//! Usage: `spider-drop [config.json] [seed] [frames]`

use std::error::Error;

use spider_drop::SimConfig;
use spider_drop::autopilot;
use spider_drop::consts::TICK_HZ;
use spider_drop::sim::{InputSampler, RawInput, Simulation};

/// One minute of play at the nominal tick rate
const DEFAULT_FRAMES: u64 = 60 * TICK_HZ as u64;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => SimConfig::load(&path)?,
        _ => SimConfig::default(),
    };
    let seed = match args.next() {
        Some(seed) => seed.parse()?,
        None => default_seed(),
    };
    let frames: u64 = match args.next() {
        Some(frames) => frames.parse()?,
        None => DEFAULT_FRAMES,
    };

    let mut sim = Simulation::seeded(config, seed)?;
    let mut sampler = InputSampler::new();
    let report_every = u64::from(TICK_HZ) * 10;

    for frame in 1..=frames {
        let raw = RawInput {
            pointer_primary_down: autopilot::should_trigger(sim.state()),
            trigger_key_down: false,
        };
        let input = sampler.sample(&raw);
        let state = sim.tick(&input);

        if frame % report_every == 0 {
            log::info!(
                "Frame {}: score {}, {} insect(s) in flight",
                frame,
                state.score,
                state.insects.len()
            );
        }
    }

    log::info!(
        "Finished {} frames: caught {} of {} insects",
        frames,
        sim.score(),
        sim.state().insects_spawned
    );
    println!("{}", serde_json::to_string_pretty(sim.state())?);
    Ok(())
}

fn default_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_from_clock() {
        assert_ne!(default_seed(), 0);
    }
}
