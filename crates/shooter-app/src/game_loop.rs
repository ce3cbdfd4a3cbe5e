//! Frame loop: sample input, advance the engine by the frame time, draw.
//!
//! Runs on macroquad's main-thread executor until the engine reports it has
//! processed a quit signal.

use log::{debug, info};
use macroquad::input::prevent_quit;
use macroquad::time::get_frame_time;
use macroquad::window::next_frame;

use shooter_core::events::GameEvent;
use shooter_sim::SimulationEngine;

use crate::assets::SpriteSet;
use crate::input::RawInput;
use crate::render;

pub async fn run(mut engine: SimulationEngine, sprites: Option<SpriteSet>) {
    // The close button becomes an ordinary input so the last frame still runs.
    prevent_quit();
    info!("game loop started");

    while engine.is_running() {
        let input = RawInput::sample().to_input_state();
        let snapshot = engine.advance(get_frame_time(), &input);
        log_events(&snapshot.events);
        render::draw_frame(&snapshot, sprites.as_ref());
        next_frame().await;
    }

    info!(
        "game loop stopped after {} ticks ({:.1} s)",
        engine.time().tick,
        engine.time().elapsed_secs
    );
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        debug!("{event:?}");
    }
}
