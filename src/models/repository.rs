use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::commit::CommitRecord;
use super::{decode, BaseModel, Commit, Dict, EntityRef, Identifier, Model, User, UserTable};
use crate::error::Result;

/// A code repository with its owner and commit history
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Repository {
    #[serde(flatten)]
    pub base: BaseModel,
    pub name: Option<String>,
    pub url: Option<String>,
    pub owner: Option<User>,
    /// Commits in insertion order
    pub commits: Vec<Commit>,
}

#[derive(Debug, Deserialize)]
struct RepositoryRecord {
    #[serde(flatten)]
    base: BaseModel,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    owner: Option<EntityRef>,
    #[serde(default)]
    commits: Option<Vec<CommitRecord>>,
}

impl Repository {
    pub fn new(
        id: Option<Identifier>,
        name: Option<String>,
        url: Option<String>,
        owner: Option<User>,
    ) -> Self {
        Self {
            base: BaseModel::new(id),
            name,
            url,
            owner,
            commits: Vec::new(),
        }
    }

    pub fn add_commit(&mut self, commit: Commit) {
        self.commits.push(commit);
    }

    /// Rebuild a repository from its dictionary form.
    ///
    /// The owner is taken from `users` by the nested owner's `id`; the rest of
    /// the nested owner mapping is ignored, so an id missing from `users`
    /// leaves the owner unset. Commit authors resolve the same way.
    pub fn from_dict(data: &Dict, users: &UserTable) -> Result<Self> {
        let record: RepositoryRecord = decode(data)?;

        Ok(Self {
            base: record.base,
            name: record.name,
            url: record.url,
            owner: record.owner.and_then(|owner| owner.resolve(users)),
            commits: record
                .commits
                .unwrap_or_default()
                .into_iter()
                .map(|commit| commit.resolve(users))
                .collect(),
        })
    }

    /// Distinct identified users: the owner first, then commit authors in
    /// commit order. The first user seen for an identifier wins.
    pub fn contributors(&self) -> Vec<&User> {
        let mut seen = HashSet::new();
        self.owner
            .iter()
            .chain(self.commits.iter().filter_map(|c| c.author.as_ref()))
            .filter(|&user| user.identity().is_some_and(|key| seen.insert(key)))
            .collect()
    }

    /// Find a contributor by email
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.contributors()
            .into_iter()
            .find(|user| user.email.as_deref() == Some(email))
    }
}

impl Model for Repository {
    fn base(&self) -> &BaseModel {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: &str, name: &str) -> User {
        User::new(
            Some(id.into()),
            Some(name.to_string()),
            Some(format!("{}@x.com", name.to_lowercase())),
        )
    }

    fn commit(id: &str, author: Option<User>) -> Commit {
        Commit::new(
            Some(id.into()),
            Some(format!("Commit {}", id)),
            None,
            author,
        )
    }

    fn sample_repository() -> Repository {
        let mut repo = Repository::new(
            Some("r1".into()),
            Some("demo".to_string()),
            Some("https://example.com/demo.git".to_string()),
            Some(user("u1", "Ann")),
        );
        repo.add_commit(commit("c1", Some(user("u2", "Bea"))));
        repo.add_commit(commit("c2", Some(user("u1", "Ann"))));
        repo.add_commit(commit("c3", None));
        repo
    }

    #[test]
    fn test_repository_to_dict() {
        let dict = sample_repository().to_dict().unwrap();

        let mut keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["commits", "id", "name", "owner", "url"]);
        assert_eq!(dict["owner"]["id"], json!("u1"));
        assert_eq!(dict["commits"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_repository_without_owner_serializes_null() {
        let repo = Repository::new(Some("r1".into()), None, None, None);
        let dict = repo.to_dict().unwrap();
        assert_eq!(dict["owner"], json!(null));
        assert_eq!(dict["commits"], json!([]));
    }

    #[test]
    fn test_repository_roundtrip_preserves_commit_order() {
        let repo = sample_repository();
        let mut users = UserTable::new();
        for u in repo.contributors() {
            users.insert(u.identity().unwrap(), u.clone());
        }

        let rebuilt = Repository::from_dict(&repo.to_dict().unwrap(), &users).unwrap();

        let ids: Vec<_> = rebuilt.commits.iter().map(|c| c.identity().unwrap()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(rebuilt, repo);
    }

    #[test]
    fn test_owner_not_in_table_is_dropped() {
        let data = json!({
            "id": "r1",
            "name": "demo",
            "owner": { "id": "u9", "name": "Ghost", "email": "ghost@x.com" },
            "commits": []
        });
        let repo = Repository::from_dict(data.as_object().unwrap(), &UserTable::new()).unwrap();
        assert_eq!(repo.owner, None);
        assert_eq!(repo.name.as_deref(), Some("demo"));
    }

    #[test]
    fn test_owner_comes_from_table_not_nested_data() {
        let mut users = UserTable::new();
        users.insert("u1".to_string(), user("u1", "Ann"));

        let data = json!({ "owner": { "id": "u1", "name": "Outdated" } });
        let repo = Repository::from_dict(data.as_object().unwrap(), &users).unwrap();
        assert_eq!(repo.owner.unwrap().name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_numeric_owner_resolves_by_key() {
        let mut users = UserTable::new();
        users.insert("1".to_string(), User::new(Some(1u64.into()), Some("Ann".to_string()), None));

        let data = json!({ "id": 7, "owner": { "id": 1, "name": "Ann" } });
        let repo = Repository::from_dict(data.as_object().unwrap(), &users).unwrap();

        assert_eq!(repo.id(), Some(&Identifier::from(7u64)));
        assert_eq!(repo.owner.unwrap().id(), Some(&Identifier::from(1u64)));
    }

    #[test]
    fn test_contributors_dedupe_numeric_and_text_ids() {
        let mut repo = Repository::new(None, None, None, Some(User::new(Some(5u64.into()), None, None)));
        repo.add_commit(commit("c1", Some(User::new(Some("5".into()), None, None))));
        assert_eq!(repo.contributors().len(), 1);
    }

    #[test]
    fn test_from_empty_dict() {
        let repo = Repository::from_dict(&Dict::new(), &UserTable::new()).unwrap();
        assert_eq!(repo, Repository::default());
    }

    #[test]
    fn test_contributors_deduplicated() {
        let repo = sample_repository();
        let ids: Vec<_> = repo.contributors().iter().map(|u| u.identity().unwrap()).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
    }

    #[test]
    fn test_contributors_skip_unidentified() {
        let mut repo = Repository::new(None, None, None, Some(User::default()));
        repo.add_commit(commit("c1", Some(User::new(Some("".into()), None, None))));
        assert!(repo.contributors().is_empty());
    }

    #[test]
    fn test_find_user_by_email() {
        let repo = sample_repository();
        assert_eq!(
            repo.find_user_by_email("bea@x.com").unwrap().identity().as_deref(),
            Some("u2")
        );
        assert!(repo.find_user_by_email("nobody@x.com").is_none());
    }
}
