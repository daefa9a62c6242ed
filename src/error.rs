//! Error types
//!
//! Classification and layout are total functions and never fail. Errors only
//! come from the edges: config files, roster files, CSV text and user input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, saving or parsing bullseye data
#[derive(Error, Debug)]
pub enum BullseyeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization failed: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Roster JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parse error at line {line}: {reason}")]
    Csv { line: usize, reason: String },

    #[error("Unknown engagement level: {0}")]
    UnknownLevel(String),

    #[error("Unknown view mode: {0}")]
    UnknownView(String),
}

impl BullseyeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(line: usize, reason: impl Into<String>) -> Self {
        Self::Csv {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BullseyeError>;
