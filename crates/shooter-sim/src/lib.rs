//! Simulation engine for the space shooter.
//!
//! Owns the hecs ECS world, advances it in fixed steps, and produces
//! `FrameSnapshot`s for the renderer.

pub mod engine;
pub mod systems;
pub mod timestep;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use shooter_core as core;
