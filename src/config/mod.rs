//! Configuration loading.
//!
//! The endpoint URL resolves in precedence order: CLI flag, then the
//! `endpoint.url` key in the config file, then the built-in default.
//! A missing config file is normal; a broken one is a startup error.

mod types;

pub use types::{Config, EndpointConfig};

use std::path::{Path, PathBuf};

use crate::error::SkqError;

/// Endpoint queried when neither the CLI nor the config file names one
pub const DEFAULT_ENDPOINT: &str = "https://meetception-test.herokuapp.com/v1alpha1/graphql";

/// Config file location under the platform config directory
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skq").join("config.toml"))
}

/// Load configuration from the default location
pub fn load() -> Result<Config, SkqError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load configuration from a specific path
pub fn load_from(path: &Path) -> Result<Config, SkqError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(SkqError::ConfigRead {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    toml::from_str(&contents).map_err(|e| SkqError::ConfigParse {
        path: path.display().to_string(),
        source: e,
    })
}
