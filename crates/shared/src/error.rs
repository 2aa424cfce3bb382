//! Error types for the Inner Gatekeeper

use std::path::PathBuf;

use gatekeeper_domain::{CatalogError, GameError};
use thiserror::Error;

/// Error thrown when a file has an extension we can't parse
#[derive(Debug, Error)]
#[error("Unsupported file format for {}: expected .yaml, .yml or .json", path.display())]
pub struct UnsupportedFormatError {
    pub path: PathBuf,
}

/// General application error type
#[derive(Debug, Error)]
pub enum GatekeeperError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Engine stopped: {0}")]
    EngineStopped(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GatekeeperError>;
