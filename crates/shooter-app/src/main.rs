use std::path::PathBuf;

use clap::Parser;
use macroquad::prelude::Conf;

use shooter_app::assets::SpriteSet;
use shooter_app::config::resolve_config;
use shooter_app::game_loop;
use shooter_core::config::GameConfig;
use shooter_sim::SimulationEngine;

/// Top-down arcade space shooter.
#[derive(Parser)]
#[command(version, about = "Fly, aim, shoot and teleport through a meteor field.")]
struct Cli {
    /// TOML file overriding the default tuning.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the random number generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory with background, player, meteor, laser and star PNGs.
    /// Without it every entity is drawn as a plain shape.
    #[arg(long, value_name = "DIR")]
    sprites: Option<PathBuf>,
}

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: "Space Shooter".to_owned(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn start(config: GameConfig, sprites_dir: Option<PathBuf>) {
    let sprites = match sprites_dir {
        Some(dir) => match SpriteSet::load(&dir).await {
            Ok(sprites) => Some(sprites),
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let engine = SimulationEngine::new(config);
    game_loop::run(engine, sprites).await;
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match resolve_config(cli.config.as_deref(), cli.seed) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    macroquad::Window::from_config(window_conf(&config), start(config, cli.sprites));
}
