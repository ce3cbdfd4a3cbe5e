//! Optional sprite set loaded from a directory at startup.

use std::path::{Path, PathBuf};

use macroquad::texture::{load_texture, FilterMode, Texture2D};

use crate::AppError;

pub const BACKGROUND_FILE: &str = "background.png";
pub const PLAYER_FILE: &str = "player.png";
pub const METEOR_FILE: &str = "meteor.png";
pub const LASER_FILE: &str = "laser.png";
pub const STAR_FILE: &str = "star.png";

/// Textures for every drawable kind plus the backdrop.
pub struct SpriteSet {
    pub background: Texture2D,
    pub player: Texture2D,
    pub meteor: Texture2D,
    pub laser: Texture2D,
    pub star: Texture2D,
}

impl SpriteSet {
    /// Load all five sprites from `dir`. The first missing or unreadable
    /// file aborts the load.
    pub async fn load(dir: &Path) -> Result<Self, AppError> {
        let sprites = Self {
            background: load_sprite(dir, BACKGROUND_FILE).await?,
            player: load_sprite(dir, PLAYER_FILE).await?,
            meteor: load_sprite(dir, METEOR_FILE).await?,
            laser: load_sprite(dir, LASER_FILE).await?,
            star: load_sprite(dir, STAR_FILE).await?,
        };
        log::info!("loaded sprites from {}", dir.display());
        Ok(sprites)
    }
}

pub fn sprite_path(dir: &Path, file: &str) -> PathBuf {
    dir.join(file)
}

async fn load_sprite(dir: &Path, file: &str) -> Result<Texture2D, AppError> {
    let path = sprite_path(dir, file);
    let texture = load_texture(&path.to_string_lossy())
        .await
        .map_err(|e| AppError::Asset {
            path: path.clone(),
            message: e.to_string(),
        })?;
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}
