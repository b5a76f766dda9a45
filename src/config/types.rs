use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Repostore configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repository document the CLI reads and writes
    pub data_file: PathBuf,

    /// User validation settings
    pub validation: Validation,

    /// Display settings
    pub display: Display,
}

/// Validation applied before users are saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validation {
    /// Reject owners and authors whose email fails validation
    pub require_valid_email: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Display {
    /// Show author names on commits
    pub show_authors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./repository.json"),
            validation: Validation::default(),
            display: Display::default(),
        }
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self {
            require_valid_email: true,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self { show_authors: true }
    }
}
