// File: src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors surfaced by the demo core. The pipeline itself only fails on
/// contract violations; the rest come from editing, snapshots and config.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("at least one category is required")]
    NoCategories,

    #[error("category '{0}' is listed more than once")]
    DuplicateCategory(String),

    #[error("sample text is empty")]
    EmptySample,

    #[error("sample {index} out of range for '{category}' ({len} samples)")]
    SampleOutOfRange {
        category: String,
        index: usize,
        len: usize,
    },

    #[error("invalid sample index '{0}'")]
    InvalidIndex(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
