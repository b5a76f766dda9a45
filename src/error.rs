use std::path::PathBuf;

use thiserror::Error;

/// Repostore error types
#[derive(Error, Debug)]
pub enum RepoStoreError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Timestamp error: {0}")]
    Timestamp(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for Repostore operations
pub type Result<T> = std::result::Result<T, RepoStoreError>;
