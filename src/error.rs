use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a paint configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors surfaced by the binary entry point
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to start the window: {0}")]
    Eframe(#[from] eframe::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
