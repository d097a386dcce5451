//! Error types for Platefix core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced around the trigger. Normalization itself never fails.
#[derive(Error, Debug)]
pub enum PlatefixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid cell reference: {0}")]
    InvalidCell(String),

    #[error("Cannot write {cell}: {message}")]
    Write { cell: String, message: String },
}

pub type Result<T> = std::result::Result<T, PlatefixError>;
