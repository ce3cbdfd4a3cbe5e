//! Gameplay constants and tuning defaults.
//!
//! These are the defaults `GameConfig` starts from; a config file may
//! override any of them.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Longest wall-clock frame fed into the fixed-step accumulator (seconds).
pub const MAX_FRAME_SECS: f32 = 0.25;

/// Upper bound on simulation steps run for a single rendered frame.
pub const MAX_STEPS_PER_FRAME: u32 = 8;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Playfield ---

pub const WINDOW_WIDTH: f32 = 1920.0;
pub const WINDOW_HEIGHT: f32 = 1080.0;

// --- Player ship ---

/// Ship movement speed (px/s).
pub const SHIP_SPEED: f32 = 300.0;

/// Ship sprite size (px).
pub const SHIP_WIDTH: f32 = 69.5;
pub const SHIP_HEIGHT: f32 = 97.7;

/// Aim rotation rate (degrees per second).
pub const AIM_RATE_DEG: f32 = 150.0;

/// Minimum time between shots (ms).
pub const SHOOT_COOLDOWN_MS: u64 = 150;

/// Minimum time between teleports (ms).
pub const TELEPORT_COOLDOWN_MS: u64 = 5000;

/// Distance from the ship center to the teleport destination (px).
pub const TELEPORT_RADIUS: f32 = 320.0;

// --- Projectiles ---

/// Laser speed (px/s).
pub const PROJECTILE_SPEED: f32 = 1000.0;

pub const PROJECTILE_WIDTH: f32 = 15.5;
pub const PROJECTILE_HEIGHT: f32 = 97.7;

/// How far past the visible edge a laser may travel before removal (px).
pub const PROJECTILE_CULL_MARGIN: f32 = 15.0;

// --- Meteors ---

/// Fastest meteor speed; spawned meteors draw from [max/2, max].
pub const METEOR_MAX_SPEED: u32 = 1000;

/// Time between meteor spawns (ms).
pub const METEOR_SPAWN_INTERVAL_MS: u64 = 500;

pub const METEOR_SIZE: f32 = 100.0;

/// Meteors spawn between NEAR and FAR pixels outside the playfield.
pub const METEOR_SPAWN_NEAR: i32 = 100;
pub const METEOR_SPAWN_FAR: i32 = 500;

/// Playfield expansion used to cull meteors (px).
pub const METEOR_CULL_MARGIN: f32 = 500.0;

/// Horizontal direction components a meteor may be given.
pub const METEOR_DIRECTION_X: [i32; 4] = [-2, -1, 1, 2];

/// Vertical direction components are drawn from this inclusive range.
pub const METEOR_DIRECTION_Y_MIN: i32 = -2;
pub const METEOR_DIRECTION_Y_MAX: i32 = 2;

// --- Stars ---

/// Stars scattered across the window at startup.
pub const STAR_COUNT: u32 = 50;

/// Fall speed of the initial starfield (px/s).
pub const STAR_SPEED: f32 = 10.0;

pub const STAR_SIZE: f32 = 20.0;

/// Star rotation rate (degrees per second).
pub const STAR_SPIN_DEG: f32 = 10.0;

/// Star waves start somewhere between this y and the top edge.
pub const STAR_WAVE_START_Y: i32 = -500;

/// Default star waves: (count, speed, size).
pub const STAR_WAVES: [(u32, f32, f32); 6] = [
    (50, 50.0, 100.0),
    (60, 30.0, 75.0),
    (55, 20.0, 50.0),
    (1, 50.0, 100.0),
    (1, 30.0, 75.0),
    (1, 20.0, 50.0),
];
