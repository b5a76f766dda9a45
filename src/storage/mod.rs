//! Storage module
//!
//! Whole-file JSON persistence. A repository is stored as a single document
//! holding the repository itself plus a deduplicated `users` table that owner
//! and author references are resolved against on load.

mod document;

pub use document::{load_repository, save_repository};

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{RepoStoreError, Result};

/// Load a JSON file as a generic value
pub fn load_json_file(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(RepoStoreError::NotFound(path.to_path_buf()));
    }

    let content = fs::read(path)?;
    let value = serde_json::from_slice(&content)?;
    debug!(path = %path.display(), bytes = content.len(), "loaded JSON file");
    Ok(value)
}

/// Save a value as 2-space indented JSON, replacing any existing file
pub fn save_json_file<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, json)?;
    debug!(path = %path.display(), "saved JSON file");
    Ok(())
}
