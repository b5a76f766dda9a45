use chrono::Utc;
use std::path::PathBuf;

use repostore::config::Config;
use repostore::display::print_repository;
use repostore::error::{RepoStoreError, Result};
use repostore::logger::Logger;
use repostore::models::{create_user, generate_id, Commit, Model, Repository, User};
use repostore::storage;

use super::load_config;

/// Owner or author given as `--*-name` / `--*-email`
pub struct Person {
    pub name: String,
    pub email: String,
}

/// Create the repository document
pub fn init(
    config_path: Option<PathBuf>,
    name: String,
    url: String,
    owner: Option<Person>,
) -> Result<()> {
    let config = load_config(config_path)?;

    if config.data_file.exists() {
        Logger::warning(&format!(
            "Repository already exists at: {}",
            config.data_file.display()
        ));
        return Ok(());
    }

    let owner = owner
        .map(|person| new_user(&config, person))
        .transpose()?;

    let repository = Repository::new(Some(generate_id().into()), Some(name), Some(url), owner);
    storage::save_repository(&config.data_file, &repository)?;

    Logger::info(&format!(
        "Repository created: {}",
        config.data_file.display()
    ));
    Ok(())
}

/// Append a commit to the stored repository
pub fn commit(config_path: Option<PathBuf>, message: String, author: Option<Person>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut repository = storage::load_repository(&config.data_file)?
        .ok_or_else(|| RepoStoreError::NotFound(config.data_file.clone()))?;

    // Known emails keep their existing identity
    let author = match author {
        Some(person) => match repository.find_user_by_email(&person.email) {
            Some(existing) => Some(existing.clone()),
            None => Some(new_user(&config, person)?),
        },
        None => None,
    };

    let id = generate_id();
    let commit = Commit::new(
        Some(id.as_str().into()),
        Some(message),
        Some(Utc::now().timestamp() as f64),
        author,
    );
    repository.add_commit(commit);
    storage::save_repository(&config.data_file, &repository)?;

    Logger::info(&format!(
        "Commit {} added ({} total)",
        &id[..8],
        repository.commits.len()
    ));
    Ok(())
}

/// Render the stored repository to the terminal
pub fn show(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;

    let Some(repository) = storage::load_repository(&config.data_file)? else {
        Logger::warning(&format!(
            "No repository found at: {}",
            config.data_file.display()
        ));
        return Ok(());
    };

    if repository.identity().is_none() {
        Logger::warning("Repository has no id");
    }

    print_repository(&repository, &config);
    Ok(())
}

fn new_user(config: &Config, person: Person) -> Result<User> {
    let user = create_user(person.name, person.email);
    if config.validation.require_valid_email {
        user.validate()?;
    }
    Ok(user)
}
