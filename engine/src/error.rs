use std::path::PathBuf;

use thiserror::Error;

/// Reasons a level file cannot be turned into a playable level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("level header must be `width height`, found {0:?}")]
    InvalidHeader(String),
    #[error("level dimensions must be non-zero, found {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
    #[error("level declares {expected} rows but contains {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("level has no player start `@`")]
    MissingPlayer,
    #[error("level has a second player start at ({x}, {y})")]
    DuplicatePlayer { x: usize, y: usize },
    #[error("level needs more than {capacity} objects")]
    TooManyObjects { capacity: usize },
}

/// Reasons an engine configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
