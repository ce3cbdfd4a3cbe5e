//! Level-triggered input sampled once per frame by the app.
//!
//! Every field reports whether the control is held *right now*; there are no
//! press/release edges. The simulation never blocks on input.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    pub teleport: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Pointer position in window coordinates.
    pub pointer: Vec2,
    /// The window asked to close.
    pub quit: bool,
}
