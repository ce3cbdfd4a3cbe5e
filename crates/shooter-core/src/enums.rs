//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// The closed set of entity variants that live in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Star,
    Meteor,
    Projectile,
    Ship,
}

impl EntityKind {
    /// Draw order, back to front.
    pub fn layer(self) -> u8 {
        match self {
            EntityKind::Star => 0,
            EntityKind::Meteor => 1,
            EntityKind::Projectile => 2,
            EntityKind::Ship => 3,
        }
    }
}

/// Whether the game loop should keep running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// A quit signal was seen. The loop exits at the top of its next iteration.
    Terminated,
}

/// How a fired projectile picks its heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileMotion {
    /// Straight up, regardless of the aim angle.
    Vertical,
    /// Along the ship's aim angle.
    #[default]
    Aimed,
}
