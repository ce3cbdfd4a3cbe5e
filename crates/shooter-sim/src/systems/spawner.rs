//! Spawner system: meteors on a cooldown, star waves once.

use hecs::World;
use log::debug;
use rand_chacha::ChaCha8Rng;

use shooter_core::config::GameConfig;
use shooter_core::cooldown::CooldownGate;
use shooter_core::events::GameEvent;

use crate::world_setup;

/// Spawner bookkeeping carried between ticks.
#[derive(Debug, Clone)]
pub struct SpawnerState {
    pub meteor_gate: CooldownGate,
    /// Set once the star waves have been handled, whether or not they were enabled.
    pub waves_done: bool,
}

impl SpawnerState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            meteor_gate: CooldownGate::new(config.meteor.spawn_interval_ms),
            waves_done: false,
        }
    }
}

/// Spawn star waves on the first call and at most one meteor per call.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut SpawnerState,
    config: &GameConfig,
    now_ms: u64,
    events: &mut Vec<GameEvent>,
) {
    let playfield = config.playfield();

    if !state.waves_done {
        if config.stars.waves_enabled {
            for (index, wave) in config.stars.waves.iter().enumerate() {
                world_setup::spawn_star_wave(
                    world,
                    rng,
                    &playfield,
                    wave,
                    config.stars.wave_start_y,
                    config.stars.spin_deg,
                );
                events.push(GameEvent::StarWaveSpawned {
                    wave: index,
                    count: wave.count,
                });
            }
            debug!("spawned {} star waves", config.stars.waves.len());
        }
        state.waves_done = true;
    }

    if state.meteor_gate.try_trigger(now_ms) {
        let (center, direction, speed) = world_setup::roll_meteor(rng, &playfield, &config.meteor);
        world_setup::spawn_meteor(world, center, direction, speed, &config.meteor);
        debug!("meteor at {center} heading {direction} speed {speed}");
        events.push(GameEvent::MeteorSpawned {
            center,
            direction,
            speed,
        });
    }
}
