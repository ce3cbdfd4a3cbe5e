//! Space shooter desktop application.
//!
//! Wires the headless simulation to a macroquad window: samples keyboard
//! and mouse into `InputState`, feeds frame times to the engine, and draws
//! each `FrameSnapshot`.

pub mod assets;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod render;

pub use shooter_core as core;

use std::path::PathBuf;

/// Failures that stop the app before the first frame.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("cannot read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(#[from] shooter_core::config::ConfigError),

    #[error("cannot load sprite {path}: {message}")]
    Asset { path: PathBuf, message: String },
}
