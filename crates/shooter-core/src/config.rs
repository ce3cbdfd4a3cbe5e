//! Tunable game parameters.
//!
//! Every section deserializes with `#[serde(default)]`, so a config file only
//! needs to name the values it changes. Defaults come from [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ProjectileMotion;
use crate::types::Playfield;

/// Configuration errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("window sides must be positive and fit in i32 pixels, got {width}x{height}")]
    WindowSize { width: f32, height: f32 },

    #[error("tick rate must be positive")]
    TickRate,

    #[error("max_steps_per_frame must be at least 1")]
    StepBudget,

    #[error("max_frame_secs must be positive, got {0}")]
    FrameCap(f32),

    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("meteor spawn band is empty: near {near} > far {far}")]
    SpawnBand { near: i32, far: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. Same seed and same input = same game.
    pub seed: u64,
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub player: PlayerConfig,
    pub projectile: ProjectileConfig,
    pub meteor: MeteorConfig,
    pub stars: StarConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed simulation steps per second.
    pub tick_rate: u32,
    /// Frame times above this are clamped before accumulation (seconds).
    pub max_frame_secs: f32,
    pub max_steps_per_frame: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub aim_rate_deg: f32,
    pub shoot_cooldown_ms: u64,
    pub teleport_cooldown_ms: u64,
    pub teleport_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub cull_margin: f32,
    pub motion: ProjectileMotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeteorConfig {
    /// Spawned meteors draw an integer speed from [max_speed / 2, max_speed].
    pub max_speed: u32,
    pub spawn_interval_ms: u64,
    pub size: f32,
    pub spawn_near: i32,
    pub spawn_far: i32,
    pub cull_margin: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    /// Stars scattered across the window at startup.
    pub count: u32,
    /// Fall speed of the startup stars. 0 gives a static field.
    pub speed: f32,
    pub size: f32,
    pub spin_deg: f32,
    /// Spawn `waves` once on the first tick.
    pub waves_enabled: bool,
    pub wave_start_y: i32,
    pub waves: Vec<StarWave>,
}

/// A batch of falling stars sharing one starting height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarWave {
    pub count: u32,
    pub speed: f32,
    pub size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            window: WindowConfig::default(),
            timing: TimingConfig::default(),
            player: PlayerConfig::default(),
            projectile: ProjectileConfig::default(),
            meteor: MeteorConfig::default(),
            stars: StarConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            max_frame_secs: MAX_FRAME_SECS,
            max_steps_per_frame: MAX_STEPS_PER_FRAME,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: SHIP_SPEED,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            aim_rate_deg: AIM_RATE_DEG,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            teleport_cooldown_ms: TELEPORT_COOLDOWN_MS,
            teleport_radius: TELEPORT_RADIUS,
        }
    }
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            cull_margin: PROJECTILE_CULL_MARGIN,
            motion: ProjectileMotion::default(),
        }
    }
}

impl Default for MeteorConfig {
    fn default() -> Self {
        Self {
            max_speed: METEOR_MAX_SPEED,
            spawn_interval_ms: METEOR_SPAWN_INTERVAL_MS,
            size: METEOR_SIZE,
            spawn_near: METEOR_SPAWN_NEAR,
            spawn_far: METEOR_SPAWN_FAR,
            cull_margin: METEOR_CULL_MARGIN,
        }
    }
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            speed: STAR_SPEED,
            size: STAR_SIZE,
            spin_deg: STAR_SPIN_DEG,
            waves_enabled: false,
            wave_start_y: STAR_WAVE_START_Y,
            waves: STAR_WAVES
                .iter()
                .map(|&(count, speed, size)| StarWave { count, speed, size })
                .collect(),
        }
    }
}

impl TimingConfig {
    /// Seconds per fixed step.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}

impl GameConfig {
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.window.width, self.window.height)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = self.window;
        // Spawn and starfield placement works in whole pixels.
        let max_side = i32::MAX as f32;
        if !(w.width > 0.0 && w.height > 0.0 && w.width <= max_side && w.height <= max_side) {
            return Err(ConfigError::WindowSize {
                width: w.width,
                height: w.height,
            });
        }
        if self.timing.tick_rate == 0 {
            return Err(ConfigError::TickRate);
        }
        if self.timing.max_steps_per_frame == 0 {
            return Err(ConfigError::StepBudget);
        }
        let frame_cap = self.timing.max_frame_secs;
        if !(frame_cap.is_finite() && frame_cap > 0.0) {
            return Err(ConfigError::FrameCap(frame_cap));
        }

        let non_negative = [
            ("player.speed", self.player.speed),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("player.aim_rate_deg", self.player.aim_rate_deg),
            ("player.teleport_radius", self.player.teleport_radius),
            ("projectile.speed", self.projectile.speed),
            ("projectile.width", self.projectile.width),
            ("projectile.height", self.projectile.height),
            ("projectile.cull_margin", self.projectile.cull_margin),
            ("meteor.size", self.meteor.size),
            ("meteor.cull_margin", self.meteor.cull_margin),
            ("stars.speed", self.stars.speed),
            ("stars.size", self.stars.size),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        for wave in &self.stars.waves {
            if !(wave.speed.is_finite() && wave.speed >= 0.0) {
                return Err(ConfigError::Negative {
                    field: "stars.waves.speed",
                    value: wave.speed,
                });
            }
            if !(wave.size.is_finite() && wave.size >= 0.0) {
                return Err(ConfigError::Negative {
                    field: "stars.waves.size",
                    value: wave.size,
                });
            }
        }

        let m = self.meteor;
        if m.spawn_near < 0 || m.spawn_near > m.spawn_far {
            return Err(ConfigError::SpawnBand {
                near: m.spawn_near,
                far: m.spawn_far,
            });
        }
        Ok(())
    }
}
