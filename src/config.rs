//! Configuration loading
//!
//! Reads `~/.config/courier-desk/config.toml`. A missing file is not an error;
//! a malformed one is reported so the user can fix it.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{ApiConfig, Config, DataConfig};

use crate::error::DeskError;

const CONFIG_DIR: &str = "courier-desk";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> Result<Config, DeskError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, DeskError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config file at {}", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, DeskError> {
    toml::from_str(contents).map_err(|e| DeskError::InvalidConfig(e.to_string()))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
