//! Core types and definitions for the space shooter.
//!
//! This crate defines the vocabulary shared by the simulation and the app:
//! components, cooldown gates, input, configuration, snapshots, events and
//! constants. It has no dependency on a windowing or rendering framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod cooldown;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
