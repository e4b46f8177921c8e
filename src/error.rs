//! Application error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot load prefill record {path}: {source}")]
    Prefill {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Download {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Args(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    pub fn args(message: impl Into<String>) -> Self {
        Self::Args(message.into())
    }
}
