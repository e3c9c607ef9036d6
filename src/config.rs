#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::Resource;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

// Global configuration instance with thread-safe access
pub static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

// Fallback path when no user config directory exists
const CONFIG_FILE_PATH: &str = "config/gridfall.toml";

/// Rule toggles closing the original game's unchecked transitions. All
/// default to off, which keeps the observed behavior: rotation and soft
/// drop commit without a collision check, and spawning does not consult
/// the board.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub checked_rotation: bool,
    pub checked_soft_drop: bool,
    pub checked_spawn: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: Rules,
}

/// Load the configuration from disk into the global instance.
pub fn init() -> Result<(), ConfigError> {
    let config = load_config_from_file()?;
    *CONFIG.write().unwrap() = config;
    Ok(())
}

/// Load the configuration, creating a default file on first run.
pub fn load_config_from_file() -> Result<Config, ConfigError> {
    load_config_from_path(&config_file_path())
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    if !path.exists() {
        let default_config = Config::default();
        save_config_to_path(&default_config, path)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_config_to_file(config: &Config) -> Result<(), ConfigError> {
    save_config_to_path(config, &config_file_path())
}

pub fn save_config_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;
    Ok(())
}

// Environment override first, then the user's config directory.
fn config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("GRIDFALL_CONFIG") {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("gridfall").join("config.toml")
    } else {
        PathBuf::from(CONFIG_FILE_PATH)
    }
}

// Custom error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
