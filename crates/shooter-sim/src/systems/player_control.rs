//! Player controller: turns held input into ship intent and gated actions.
//!
//! Per tick, in order: movement direction, aim rotation, teleport target,
//! fire, teleport. Fire and teleport are each a READY/COOLING machine
//! driven by the ship's cooldown gates.

use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use shooter_core::components::{Kinematics, PlayerState, Transform};
use shooter_core::config::GameConfig;
use shooter_core::enums::ProjectileMotion;
use shooter_core::events::GameEvent;
use shooter_core::input::InputState;

use crate::world_setup;

/// Movement direction from held keys. Starts from zero every tick; keys are
/// applied up, down, left, right, so the later key wins on a shared axis.
pub fn resolve_direction(input: &InputState) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if input.move_up {
        direction.y = -1.0;
    }
    if input.move_down {
        direction.y = 1.0;
    }
    if input.move_left {
        direction.x = -1.0;
    }
    if input.move_right {
        direction.x = 1.0;
    }
    direction
}

/// Wrap an angle in degrees into [0, 360).
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit heading for an aim angle. 0° points up, 90° points left.
pub fn aim_direction(aim_deg: f32) -> Vec2 {
    let rad = aim_deg.to_radians();
    Vec2::new(-rad.sin(), -rad.cos())
}

/// Heading a newly fired projectile takes.
pub fn projectile_direction(aim_deg: f32, motion: ProjectileMotion) -> Vec2 {
    match motion {
        ProjectileMotion::Vertical => Vec2::NEG_Y,
        ProjectileMotion::Aimed => aim_direction(aim_deg),
    }
}

/// Point `radius` away from `center` toward `pointer`.
///
/// A pointer sitting exactly on the center gives no heading; the target is
/// then the center itself.
pub fn teleport_target(center: Vec2, pointer: Vec2, radius: f32) -> Vec2 {
    center + (pointer - center).normalize_or_zero() * radius
}

/// Recompute the ship's teleport target from its current center.
pub fn refresh_teleport_target(world: &mut World, ship: Entity, pointer: Vec2, radius: f32) {
    if let Ok((transform, player)) = world.query_one_mut::<(&Transform, &mut PlayerState)>(ship) {
        player.teleport_target = teleport_target(transform.center, pointer, radius);
    }
}

/// Apply one tick of input to the ship and spawn any projectile it fires.
pub fn run(
    world: &mut World,
    ship: Entity,
    input: &InputState,
    config: &GameConfig,
    now_ms: u64,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    let fired = {
        let Ok((transform, kinematics, player)) =
            world.query_one_mut::<(&mut Transform, &mut Kinematics, &mut PlayerState)>(ship)
        else {
            return;
        };

        kinematics.direction = resolve_direction(input);

        let rate = config.player.aim_rate_deg * dt;
        if input.rotate_right {
            player.aim_deg += rate;
        }
        if input.rotate_left {
            player.aim_deg -= rate;
        }
        player.aim_deg = wrap_degrees(player.aim_deg);
        transform.rotation_deg = player.aim_deg;

        player.teleport_target = teleport_target(
            transform.center,
            input.pointer,
            config.player.teleport_radius,
        );

        let mut fired = None;
        if input.fire && player.shoot.try_trigger(now_ms) {
            fired = Some((transform.center, player.aim_deg));
        }

        if input.teleport && player.teleport.try_trigger(now_ms) {
            let from = transform.center;
            transform.center = player.teleport_target;
            debug!("teleport {from} -> {} at {now_ms} ms", transform.center);
            events.push(GameEvent::Teleported {
                from,
                to: transform.center,
            });
        }

        fired
    };

    if let Some((origin, aim_deg)) = fired {
        let motion = config.projectile.motion;
        let direction = projectile_direction(aim_deg, motion);
        let rotation_deg = match motion {
            ProjectileMotion::Vertical => 0.0,
            ProjectileMotion::Aimed => aim_deg,
        };
        world_setup::spawn_projectile(world, origin, direction, rotation_deg, &config.projectile);
        debug!("fire from {origin} heading {direction} at {now_ms} ms");
        events.push(GameEvent::ProjectileFired { origin, direction });
    }
}
