//! Config file loading.

use crate::error::{AppError, AppResult};
use gateink_core::Theme;
use gateink_render::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a `--config` file. Missing sections and fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub theme: Theme,
}

impl AppConfig {
    /// Load and validate a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.layout.validate().map_err(|source| AppError::Layout {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
