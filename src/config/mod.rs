//! Configuration module
//!
//! Loads and saves repostore.toml. The `data_file` it names is resolved
//! against the directory holding the config file, so a project can keep its
//! config and repository document side by side.

mod types;

pub use types::{Config, Display, Validation};

use crate::error::{RepoStoreError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load configuration from a TOML file.
///
/// A relative `data_file` is rebased onto the config file's directory; an
/// empty one is rejected.
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        RepoStoreError::Config(format!(
            "Cannot read config from '{}': {}. Run 'repostore config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let mut config: Config = toml::from_str(&content)?;

    if config.data_file.as_os_str().is_empty() {
        return Err(RepoStoreError::Config(format!(
            "'data_file' is empty in '{}'",
            path.display()
        )));
    }

    if config.data_file.is_relative() {
        if let Some(base) = path.parent() {
            config.data_file = base.join(&config.data_file);
        }
    }

    debug!(
        config = %path.display(),
        data_file = %config.data_file.display(),
        require_valid_email = config.validation.require_valid_email,
        "loaded configuration"
    );
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| RepoStoreError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
