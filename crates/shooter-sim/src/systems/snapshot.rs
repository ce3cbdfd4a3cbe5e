//! Snapshot system: queries the world and builds a complete FrameSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::{Entity, World};

use shooter_core::components::*;
use shooter_core::cooldown::CooldownGate;
use shooter_core::enums::{EntityKind, GamePhase};
use shooter_core::events::GameEvent;
use shooter_core::state::*;
use shooter_core::types::{Playfield, SimTime};

/// Build a FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    playfield: Playfield,
    ship: Entity,
    meteor_gate: &CooldownGate,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    let now_ms = time.now_ms();
    let mut entities = Vec::with_capacity(world.len() as usize);

    // Collected back to front so the renderer can draw in order.
    let counts = EntityCounts {
        stars: collect::<Star>(world, EntityKind::Star, &mut entities),
        meteors: collect::<Meteor>(world, EntityKind::Meteor, &mut entities),
        projectiles: collect::<Projectile>(world, EntityKind::Projectile, &mut entities),
        ships: collect::<Ship>(world, EntityKind::Ship, &mut entities),
    };

    let center = world.get::<&Transform>(ship).ok().map(|t| t.center);
    let state = world.get::<&PlayerState>(ship).ok().map(|p| *p);
    let player = center.zip(state);

    let aim_line = player.and_then(|(center, p)| {
        (p.teleport_target != center).then_some(AimLine {
            from: center,
            to: p.teleport_target,
        })
    });

    let cooldowns = CooldownView {
        shoot_ms: player.map_or(0, |(_, p)| p.shoot.remaining_ms(now_ms)),
        teleport_ms: player.map_or(0, |(_, p)| p.teleport.remaining_ms(now_ms)),
        meteor_spawn_ms: meteor_gate.remaining_ms(now_ms),
    };

    FrameSnapshot {
        time: *time,
        phase,
        playfield,
        entities,
        aim_line,
        events,
        counts,
        cooldowns,
    }
}

/// Push a view of every entity carrying marker `M`; returns how many.
fn collect<M: hecs::Component>(world: &World, kind: EntityKind, out: &mut Vec<EntityView>) -> u32 {
    let mut count = 0;
    for (_entity, (transform, extent, _marker)) in
        world.query::<(&Transform, &Extent, &M)>().iter()
    {
        out.push(EntityView {
            kind,
            center: transform.center,
            size: extent.size,
            rotation_deg: transform.rotation_deg,
        });
        count += 1;
    }
    count
}
