use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use super::{load_json_file, save_json_file};
use crate::error::{RepoStoreError, Result};
use crate::models::{Dict, Model, Repository, User, UserTable};

/// On-disk layout of a saved repository
#[derive(Debug, Serialize)]
struct RepositoryDocument {
    repository: Dict,
    users: Vec<Dict>,
}

/// Load a repository document.
///
/// Users are rebuilt first and indexed by identifier, then the repository
/// resolves its owner and commit authors against that table. Returns
/// `Ok(None)` when the file does not exist.
pub fn load_repository(path: &Path) -> Result<Option<Repository>> {
    let data = match load_json_file(path) {
        Ok(data) => data,
        Err(RepoStoreError::NotFound(missing)) => {
            debug!(path = %missing.display(), "repository file not found");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let document = expect_object(&data, "repository document")?;

    let mut users = UserTable::new();
    match document.get("users") {
        None | Some(Value::Null) => {}
        Some(Value::Array(entries)) => {
            for entry in entries {
                let user = User::from_dict(expect_object(entry, "user entry")?)?;
                match user.identity() {
                    Some(id) => {
                        users.insert(id, user);
                    }
                    None => warn!("user entry without id cannot be referenced"),
                }
            }
        }
        Some(_) => {
            return Err(RepoStoreError::InvalidData(
                "'users' must be an array".to_string(),
            ))
        }
    }

    let empty = Dict::new();
    let repository_data = match document.get("repository") {
        None | Some(Value::Null) => &empty,
        Some(value) => expect_object(value, "repository")?,
    };

    let repository = Repository::from_dict(repository_data, &users)?;
    debug!(
        path = %path.display(),
        users = users.len(),
        commits = repository.commits.len(),
        "loaded repository"
    );
    Ok(Some(repository))
}

/// Save a repository together with the distinct users it references
pub fn save_repository(path: &Path, repository: &Repository) -> Result<()> {
    let users = repository
        .contributors()
        .into_iter()
        .map(|user| user.to_dict())
        .collect::<Result<Vec<_>>>()?;

    let document = RepositoryDocument {
        repository: repository.to_dict()?,
        users,
    };

    save_json_file(path, &document)?;
    debug!(
        path = %path.display(),
        users = document.users.len(),
        "saved repository"
    );
    Ok(())
}

fn expect_object<'a>(value: &'a Value, what: &str) -> Result<&'a Dict> {
    value
        .as_object()
        .ok_or_else(|| RepoStoreError::InvalidData(format!("{} must be a JSON object", what)))
}
