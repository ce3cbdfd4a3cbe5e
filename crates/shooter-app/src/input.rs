//! Keyboard and mouse sampling.

use glam::Vec2;
use macroquad::input::{is_key_down, is_key_pressed, is_quit_requested, mouse_position, KeyCode};

use shooter_core::input::InputState;

/// Raw device state for one frame, before it becomes an `InputState`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
    pub space: bool,
    pub t: bool,
    pub left: bool,
    pub right: bool,
    pub escape: bool,
    pub close: bool,
    pub mouse: (f32, f32),
}

impl RawInput {
    /// Read the current macroquad device state.
    pub fn sample() -> Self {
        Self {
            w: is_key_down(KeyCode::W),
            a: is_key_down(KeyCode::A),
            s: is_key_down(KeyCode::S),
            d: is_key_down(KeyCode::D),
            space: is_key_down(KeyCode::Space),
            t: is_key_down(KeyCode::T),
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            escape: is_key_pressed(KeyCode::Escape),
            close: is_quit_requested(),
            mouse: mouse_position(),
        }
    }

    pub fn to_input_state(self) -> InputState {
        InputState {
            move_up: self.w,
            move_down: self.s,
            move_left: self.a,
            move_right: self.d,
            fire: self.space,
            teleport: self.t,
            rotate_left: self.left,
            rotate_right: self.right,
            pointer: Vec2::new(self.mouse.0, self.mouse.1),
            quit: self.escape || self.close,
        }
    }
}
