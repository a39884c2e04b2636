mod server;
mod storage;


pub use server::*;
pub use storage::*;

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ServerError;

/// Top-level configuration for the Inkshelf server, loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct InkshelfConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl InkshelfConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ServerError> {
        toml::from_str(contents).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Load configuration from `path`, or use defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        if !path.exists() {
            info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            ServerError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}
