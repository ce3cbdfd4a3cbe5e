//! Discrete events emitted by the simulation, drained into each snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The ship fired a laser.
    ProjectileFired { origin: Vec2, direction: Vec2 },
    /// The ship jumped.
    Teleported { from: Vec2, to: Vec2 },
    /// A meteor entered the world off-screen.
    MeteorSpawned { center: Vec2, direction: Vec2, speed: f32 },
    /// A star wave was scattered above the playfield.
    StarWaveSpawned { wave: usize, count: u32 },
    /// The input collaborator signalled that the game should exit.
    QuitRequested,
}
