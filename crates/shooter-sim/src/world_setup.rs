//! Entity spawn factories for setting up and populating the world.
//!
//! Each factory attaches the component bundle for one entity kind.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use shooter_core::components::*;
use shooter_core::config::{GameConfig, MeteorConfig, ProjectileConfig, StarConfig, StarWave};
use shooter_core::constants::{METEOR_DIRECTION_X, METEOR_DIRECTION_Y_MAX, METEOR_DIRECTION_Y_MIN};
use shooter_core::cooldown::CooldownGate;
use shooter_core::types::Playfield;

/// Set up the initial world: the player's ship and the background starfield.
/// Meteors and star waves arrive later through the spawner system.
pub fn setup_world(world: &mut World, rng: &mut ChaCha8Rng, config: &GameConfig) -> Entity {
    let playfield = config.playfield();
    spawn_starfield(world, rng, &playfield, &config.stars);
    spawn_ship(world, &playfield, config)
}

/// Spawn the ship at the window center with both action gates ready.
pub fn spawn_ship(world: &mut World, playfield: &Playfield, config: &GameConfig) -> Entity {
    let center = playfield.center();
    let player = PlayerState {
        aim_deg: 0.0,
        teleport_target: center,
        shoot: CooldownGate::new(config.player.shoot_cooldown_ms),
        teleport: CooldownGate::new(config.player.teleport_cooldown_ms),
    };

    world.spawn((
        Ship,
        Transform {
            center,
            rotation_deg: 0.0,
        },
        Kinematics {
            direction: Vec2::ZERO,
            speed: config.player.speed,
        },
        Extent {
            size: Vec2::new(config.player.width, config.player.height),
        },
        player,
    ))
}

/// Scatter the startup stars uniformly over the visible window.
pub fn spawn_starfield(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    playfield: &Playfield,
    stars: &StarConfig,
) {
    let max_x = playfield.width as i32;
    let max_y = playfield.height as i32;
    for _ in 0..stars.count {
        let x = rng.gen_range(0..=max_x) as f32;
        let y = rng.gen_range(0..=max_y) as f32;
        spawn_star(world, rng, Vec2::new(x, y), stars.speed, stars.size, stars.spin_deg);
    }
}

/// Spawn one wave of falling stars. All stars of a wave share a starting
/// height between `start_y` and the top edge.
pub fn spawn_star_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    playfield: &Playfield,
    wave: &StarWave,
    start_y: i32,
    spin_deg: f32,
) {
    let y = rng.gen_range(start_y.min(0)..=start_y.max(0)) as f32;
    let max_x = playfield.width as i32;
    for _ in 0..wave.count {
        let x = rng.gen_range(0..=max_x) as f32;
        spawn_star(world, rng, Vec2::new(x, y), wave.speed, wave.size, spin_deg);
    }
}

fn spawn_star(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Vec2,
    speed: f32,
    size: f32,
    spin_deg: f32,
) -> Entity {
    let rotation_deg = rng.gen_range(0..=360) as f32;
    world.spawn((
        Star,
        Transform {
            center,
            rotation_deg,
        },
        Kinematics {
            direction: Vec2::Y,
            speed,
        },
        Extent {
            size: Vec2::splat(size),
        },
        Spin {
            deg_per_sec: spin_deg,
        },
        Culling::BelowPlayfield,
    ))
}

/// Randomized placement for a new meteor: (center, direction, speed).
///
/// x is drawn from left or right of the window and y from above or below,
/// independently, so meteors come in from any of the four off-screen
/// corners. The direction is not normalized.
pub fn roll_meteor(
    rng: &mut ChaCha8Rng,
    playfield: &Playfield,
    meteor: &MeteorConfig,
) -> (Vec2, Vec2, f32) {
    // Widened so `w + far` cannot overflow for any accepted config.
    let w = playfield.width as i64;
    let h = playfield.height as i64;
    let (near, far) = (i64::from(meteor.spawn_near), i64::from(meteor.spawn_far));

    let x_options = [
        rng.gen_range(-far..=-near),
        rng.gen_range(w + near..=w + far),
    ];
    let y_options = [
        rng.gen_range(-far..=-near),
        rng.gen_range(h + near..=h + far),
    ];
    let x = x_options[rng.gen_range(0..x_options.len())];
    let y = y_options[rng.gen_range(0..y_options.len())];

    let dx = METEOR_DIRECTION_X[rng.gen_range(0..METEOR_DIRECTION_X.len())];
    let dy = rng.gen_range(METEOR_DIRECTION_Y_MIN..=METEOR_DIRECTION_Y_MAX);

    let speed = rng.gen_range(meteor.max_speed / 2..=meteor.max_speed);

    (
        Vec2::new(x as f32, y as f32),
        Vec2::new(dx as f32, dy as f32),
        speed as f32,
    )
}

pub fn spawn_meteor(
    world: &mut World,
    center: Vec2,
    direction: Vec2,
    speed: f32,
    meteor: &MeteorConfig,
) -> Entity {
    world.spawn((
        Meteor,
        Transform {
            center,
            rotation_deg: 0.0,
        },
        Kinematics { direction, speed },
        Extent {
            size: Vec2::splat(meteor.size),
        },
        Culling::MarginBox {
            margin: meteor.cull_margin,
        },
    ))
}

/// Spawn a laser at `origin`, turned to `rotation_deg` and flying along `direction`.
pub fn spawn_projectile(
    world: &mut World,
    origin: Vec2,
    direction: Vec2,
    rotation_deg: f32,
    projectile: &ProjectileConfig,
) -> Entity {
    world.spawn((
        Projectile,
        Transform {
            center: origin,
            rotation_deg,
        },
        Kinematics {
            direction,
            speed: projectile.speed,
        },
        Extent {
            size: Vec2::new(projectile.width, projectile.height),
        },
        Culling::Playfield {
            margin: projectile.cull_margin,
        },
    ))
}
