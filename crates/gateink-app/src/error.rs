//! Application errors.

use gateink_core::ParseError;
use gateink_render::RendererError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RendererError),
    /// Rejected by the expression session (blank or unparseable text).
    #[error("{0}")]
    Expression(String),
    #[error("Invalid hover point {0:?}: expected X,Y")]
    HoverPoint(String),
    #[error("Failed to read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Layout {
        path: PathBuf,
        source: RendererError,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for command execution.
pub type AppResult<T> = Result<T, AppError>;
