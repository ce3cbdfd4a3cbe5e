//! Draws a `FrameSnapshot` with macroquad.
//!
//! Sprites are used when a `SpriteSet` was loaded; otherwise every kind is
//! drawn as a flat shape of its bounding size.

use glam::Vec2;
use macroquad::color::{Color, RED, WHITE};
use macroquad::math::vec2;
use macroquad::shapes::{draw_line, draw_poly, draw_rectangle_ex, draw_triangle, DrawRectangleParams};
use macroquad::texture::{draw_texture_ex, DrawTextureParams, Texture2D};
use macroquad::window::clear_background;

use shooter_core::enums::EntityKind;
use shooter_core::state::{AimLine, EntityView, FrameSnapshot};
use shooter_sim::systems::player_control::aim_direction;

use crate::assets::SpriteSet;

pub const AIM_LINE_THICKNESS: f32 = 2.0;

pub fn background_color() -> Color {
    Color::from_rgba(0x21, 0x23, 0x26, 0xff)
}

fn shape_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Star => Color::from_rgba(0xf5, 0xe6, 0x9c, 0xff),
        EntityKind::Meteor => Color::from_rgba(0x8a, 0x7f, 0x76, 0xff),
        EntityKind::Projectile => Color::from_rgba(0xff, 0x5a, 0x4f, 0xff),
        EntityKind::Ship => Color::from_rgba(0x6e, 0xc1, 0xff, 0xff),
    }
}

/// Screen rotation in radians for a counter-clockwise angle in degrees.
/// The window's y axis points down, so the sign flips.
pub fn screen_rotation(rotation_deg: f32) -> f32 {
    -rotation_deg.to_radians()
}

/// Nose, left and right corners of the ship triangle.
pub fn ship_outline(center: Vec2, size: Vec2, rotation_deg: f32) -> [Vec2; 3] {
    let forward = aim_direction(rotation_deg);
    let side = forward.perp();
    let half = size / 2.0;
    let back = center - forward * half.y;
    [
        center + forward * half.y,
        back - side * half.x,
        back + side * half.x,
    ]
}

/// Draw one full frame: backdrop, entities back to front, aim line.
pub fn draw_frame(snapshot: &FrameSnapshot, sprites: Option<&SpriteSet>) {
    clear_background(background_color());

    if let Some(sprites) = sprites {
        draw_texture_ex(
            &sprites.background,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(snapshot.playfield.width, snapshot.playfield.height)),
                ..Default::default()
            },
        );
    }

    // Snapshot entities are already sorted by layer.
    for view in &snapshot.entities {
        match sprites {
            Some(sprites) => draw_sprite(view, sprite_for(sprites, view.kind)),
            None => draw_shape(view),
        }
    }

    if let Some(line) = snapshot.aim_line {
        draw_aim_line(&line);
    }
}

fn sprite_for(sprites: &SpriteSet, kind: EntityKind) -> &Texture2D {
    match kind {
        EntityKind::Star => &sprites.star,
        EntityKind::Meteor => &sprites.meteor,
        EntityKind::Projectile => &sprites.laser,
        EntityKind::Ship => &sprites.player,
    }
}

fn draw_sprite(view: &EntityView, texture: &Texture2D) {
    let top_left = view.center - view.size / 2.0;
    draw_texture_ex(
        texture,
        top_left.x,
        top_left.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(view.size.x, view.size.y)),
            rotation: screen_rotation(view.rotation_deg),
            ..Default::default()
        },
    );
}

fn draw_shape(view: &EntityView) {
    let color = shape_color(view.kind);
    let (x, y) = (view.center.x, view.center.y);
    match view.kind {
        EntityKind::Star => draw_poly(x, y, 4, view.size.x / 2.0, -view.rotation_deg, color),
        EntityKind::Meteor => draw_poly(x, y, 7, view.size.x / 2.0, -view.rotation_deg, color),
        EntityKind::Projectile => draw_rectangle_ex(
            x,
            y,
            view.size.x,
            view.size.y,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation: screen_rotation(view.rotation_deg),
                color,
            },
        ),
        EntityKind::Ship => {
            let [nose, left, right] = ship_outline(view.center, view.size, view.rotation_deg);
            draw_triangle(
                vec2(nose.x, nose.y),
                vec2(left.x, left.y),
                vec2(right.x, right.y),
                color,
            );
        }
    }
}

fn draw_aim_line(line: &AimLine) {
    draw_line(
        line.from.x,
        line.from.y,
        line.to.x,
        line.to.y,
        AIM_LINE_THICKNESS,
        RED,
    );
}
