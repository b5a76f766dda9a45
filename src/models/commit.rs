use serde::{Deserialize, Serialize};

use super::{decode, BaseModel, Dict, EntityRef, Identifier, Model, User, UserTable};
use crate::error::Result;

/// A single commit recorded in a repository
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Commit {
    #[serde(flatten)]
    pub base: BaseModel,
    pub message: Option<String>,
    /// Epoch seconds
    pub timestamp: Option<f64>,
    pub author: Option<User>,
}

/// Dictionary layout of a commit before the author is resolved
#[derive(Debug, Deserialize)]
pub(crate) struct CommitRecord {
    #[serde(flatten)]
    base: BaseModel,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    timestamp: Option<f64>,
    #[serde(default)]
    author: Option<EntityRef>,
}

impl CommitRecord {
    pub(crate) fn resolve(self, users: &UserTable) -> Commit {
        Commit {
            base: self.base,
            message: self.message,
            timestamp: self.timestamp,
            author: self.author.and_then(|author| author.resolve(users)),
        }
    }
}

impl Commit {
    pub fn new(
        id: Option<Identifier>,
        message: Option<String>,
        timestamp: Option<f64>,
        author: Option<User>,
    ) -> Self {
        Self {
            base: BaseModel::new(id),
            message,
            timestamp,
            author,
        }
    }

    /// Rebuild a commit, resolving its author by identifier through `users`
    pub fn from_dict(data: &Dict, users: &UserTable) -> Result<Self> {
        let record: CommitRecord = decode(data)?;
        Ok(record.resolve(users))
    }
}

impl Model for Commit {
    fn base(&self) -> &BaseModel {
        &self.base
    }
}
