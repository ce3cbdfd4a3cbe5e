//! Bounds handling: keeps the ship on screen and removes entities that have
//! left the playfield for good.

use hecs::{Entity, World};

use shooter_core::components::{Culling, Extent, Ship, Transform};
use shooter_core::types::{Aabb, Playfield};

/// Whether an entity with bounding box `bbox` should be removed under `culling`.
pub fn is_culled(bbox: &Aabb, culling: &Culling, playfield: &Playfield) -> bool {
    match *culling {
        Culling::MarginBox { margin } | Culling::Playfield { margin } => {
            bbox.is_disjoint(&playfield.rect().expanded(margin))
        }
        Culling::BelowPlayfield => bbox.top() > playfield.height,
    }
}

/// Clamp the ship's bounding box into the playfield.
pub fn clamp_ship(world: &mut World, playfield: &Playfield) {
    for (_entity, (transform, extent, _ship)) in
        world.query_mut::<(&mut Transform, &Extent, &Ship)>()
    {
        transform.center = playfield.clamp_center(transform.center, extent.size);
    }
}

/// Remove every entity that reports out of bounds.
/// Collects first, then despawns, using a pre-allocated buffer.
pub fn run(world: &mut World, playfield: &Playfield, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (transform, extent, culling)) in
        world.query_mut::<(&Transform, &Extent, &Culling)>()
    {
        let bbox = Aabb::from_center(transform.center, extent.size);
        if is_culled(&bbox, culling, playfield) {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
