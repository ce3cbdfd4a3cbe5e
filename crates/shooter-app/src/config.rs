//! Loading `GameConfig` from TOML.

use std::path::Path;

use shooter_core::config::GameConfig;

use crate::AppError;

/// Parse a config document. Missing sections and fields keep their defaults.
pub fn parse_config(contents: &str, path: &Path) -> Result<GameConfig, AppError> {
    toml::from_str(contents).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<GameConfig, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents, path)
}

/// Resolve the final config from the command line: file (or defaults),
/// then the seed override, then validation.
pub fn resolve_config(path: Option<&Path>, seed: Option<u64>) -> Result<GameConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            let config = load_config(path)?;
            log::info!("loaded config from {}", path.display());
            config
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}
