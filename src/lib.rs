//! Repository records persisted as JSON documents.
//!
//! Users, repositories and commits share an identifier-carrying base and
//! reference each other by id. The storage layer writes a repository together
//! with a deduplicated users table and resolves references on load.

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod logger;
pub mod models;
pub mod renderer;
pub mod storage;
pub mod timefmt;

pub use error::{RepoStoreError, Result};
