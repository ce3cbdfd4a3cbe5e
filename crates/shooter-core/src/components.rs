//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::cooldown::CooldownGate;

/// Where an entity is and how it is turned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Center of the bounding box.
    pub center: Vec2,
    /// Visual rotation in degrees. Counter-clockwise on screen.
    pub rotation_deg: f32,
}

/// Straight-line motion: each tick the center moves by `direction * speed * dt`.
///
/// `direction` is not required to be normalized; meteors use raw integer
/// headings, so their effective speed varies with heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub direction: Vec2,
    pub speed: f32,
}

/// Visual extent, used for bounds checks only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub size: Vec2,
}

/// Constant visual rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub deg_per_sec: f32,
}

/// When an entity is considered gone for good and removed from the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Culling {
    /// Bounding box entirely outside the playfield grown by `margin` on every side.
    MarginBox { margin: f32 },
    /// Bounding box entirely outside the visible playfield grown by `margin`.
    Playfield { margin: f32 },
    /// Top edge has fallen past the bottom of the playfield.
    BelowPlayfield,
}

/// Player intent and action gates. Lives on the single ship entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Aim angle in degrees, wrapped to [0, 360). 0 points up.
    pub aim_deg: f32,
    /// Where a teleport would put the ship right now.
    pub teleport_target: Vec2,
    pub shoot: CooldownGate,
    pub teleport: CooldownGate,
}

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// Marks a meteor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Meteor;

/// Marks a player-fired laser.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks a background star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star;
