//! Frame snapshot: everything the render collaborator needs to draw a frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, GamePhase};
use crate::events::GameEvent;
use crate::types::{Playfield, SimTime};

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub playfield: Playfield,
    /// Live entities, sorted back to front by layer.
    pub entities: Vec<EntityView>,
    /// Targeting line from the ship to its teleport destination.
    pub aim_line: Option<AimLine>,
    pub events: Vec<GameEvent>,
    pub counts: EntityCounts,
    pub cooldowns: CooldownView,
}

/// One drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub center: Vec2,
    pub size: Vec2,
    /// Degrees, counter-clockwise on screen.
    pub rotation_deg: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimLine {
    pub from: Vec2,
    pub to: Vec2,
}

/// Live entity counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub ships: u32,
    pub meteors: u32,
    pub projectiles: u32,
    pub stars: u32,
}

/// Remaining cooldown per gated action (ms, 0 = ready).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownView {
    pub shoot_ms: u64,
    pub teleport_ms: u64,
    pub meteor_spawn_ms: u64,
}
