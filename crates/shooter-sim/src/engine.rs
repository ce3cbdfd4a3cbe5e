//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies sampled input, runs
//! all systems in a fixed order, and produces `FrameSnapshot`s. Completely
//! headless (no window or graphics dependency), enabling deterministic testing.

use glam::Vec2;
use hecs::{Entity, World};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shooter_core::components::{PlayerState, Transform};
use shooter_core::config::GameConfig;
use shooter_core::enums::GamePhase;
use shooter_core::events::GameEvent;
use shooter_core::input::InputState;
use shooter_core::state::FrameSnapshot;
use shooter_core::types::{Playfield, SimTime};

use crate::systems;
use crate::systems::spawner::SpawnerState;
use crate::timestep::FixedTimestep;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all game state.
///
/// `config` is expected to have passed [`GameConfig::validate`].
pub struct SimulationEngine {
    world: World,
    config: GameConfig,
    playfield: Playfield,
    time: SimTime,
    dt: f32,
    phase: GamePhase,
    rng: ChaCha8Rng,
    ship: Entity,
    spawner: SpawnerState,
    timestep: FixedTimestep,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create the engine and populate the starting world.
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let ship = world_setup::setup_world(&mut world, &mut rng, &config);
        let timing = config.timing;

        info!(
            "new game: {}x{} playfield, {} Hz, seed {}",
            config.window.width, config.window.height, timing.tick_rate, config.seed
        );

        Self {
            world,
            playfield: config.playfield(),
            time: SimTime::default(),
            dt: timing.dt(),
            phase: GamePhase::Active,
            rng,
            ship,
            spawner: SpawnerState::new(&config),
            timestep: FixedTimestep::new(
                timing.tick_rate,
                timing.max_frame_secs,
                timing.max_steps_per_frame,
            ),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Advance by exactly one fixed step and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> FrameSnapshot {
        self.step(input);
        self.snapshot()
    }

    /// Feed one rendered frame's wall-clock duration. Runs as many fixed
    /// steps as have accumulated, applying the same held input to each,
    /// and returns the latest snapshot.
    pub fn advance(&mut self, frame_secs: f32, input: &InputState) -> FrameSnapshot {
        let steps = self.timestep.accumulate(frame_secs);
        for _ in 0..steps {
            self.step(input);
        }
        // A frame too short for a step still has to honour a quit.
        if steps == 0 && input.quit {
            self.request_quit();
        }
        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> FrameSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.playfield,
            self.ship,
            &self.spawner.meteor_gate,
            events,
        )
    }

    /// False once a quit signal has been processed.
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn ship(&self) -> Entity {
        self.ship
    }

    pub fn ship_center(&self) -> Option<Vec2> {
        self.world.get::<&Transform>(self.ship).ok().map(|t| t.center)
    }

    pub fn player_state(&self) -> Option<PlayerState> {
        self.world.get::<&PlayerState>(self.ship).ok().map(|p| *p)
    }

    /// Mutable world access for tests that need to stage entities.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn spawner_mut(&mut self) -> &mut SpawnerState {
        &mut self.spawner
    }

    fn request_quit(&mut self) {
        if self.phase == GamePhase::Terminated {
            return;
        }
        info!("quit requested at tick {}", self.time.tick);
        self.phase = GamePhase::Terminated;
        self.events.push(GameEvent::QuitRequested);
    }

    /// One fixed step, in order: quit check, player control, spawning,
    /// movement, ship clamp, teleport target, culling.
    fn step(&mut self, input: &InputState) {
        if self.phase == GamePhase::Terminated {
            return;
        }

        // 1. Quit signal; the rest of this step still runs.
        if input.quit {
            self.request_quit();
        }

        let now_ms = self.time.now_ms();

        // 2. Held input -> ship intent and gated actions
        systems::player_control::run(
            &mut self.world,
            self.ship,
            input,
            &self.config,
            now_ms,
            self.dt,
            &mut self.events,
        );
        // 3. Spawning (star waves once, meteors on cooldown)
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawner,
            &self.config,
            now_ms,
            &mut self.events,
        );
        // 4. Movement integration
        systems::movement::run(&mut self.world, self.dt);
        // 5. Keep the ship on screen
        systems::cleanup::clamp_ship(&mut self.world, &self.playfield);
        // 6. Re-aim the teleport target from where the ship ended up
        systems::player_control::refresh_teleport_target(
            &mut self.world,
            self.ship,
            input.pointer,
            self.config.player.teleport_radius,
        );
        // 7. Cull entities that left the playfield
        systems::cleanup::run(&mut self.world, &self.playfield, &mut self.despawn_buffer);

        self.time.advance(f64::from(self.dt));
    }
}
