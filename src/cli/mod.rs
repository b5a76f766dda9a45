//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - calc: Basic arithmetic
//! - repo init/commit/show: Manage the repository document
//! - user validate: Check an email address
//! - time format/parse: Convert timestamps
pub mod calc;
pub mod config;
pub mod repo;
pub mod time;
pub mod user;

use std::path::PathBuf;

use repostore::config::{self as settings, Config};
use repostore::error::Result;

pub(crate) const DEFAULT_CONFIG: &str = "repostore.toml";

/// Load the configuration, falling back to the default path
pub(crate) fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    settings::load(&config_path)
}
