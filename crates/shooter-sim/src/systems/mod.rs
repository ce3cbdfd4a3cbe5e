//! ECS systems that operate on the world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! Persistent state they need (gates, flags) is passed in by the engine.

pub mod cleanup;
pub mod movement;
pub mod player_control;
pub mod snapshot;
pub mod spawner;
