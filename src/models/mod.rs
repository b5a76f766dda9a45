//! Data models module
//!
//! Entities share an embedded `BaseModel` carrying the identifier. Owner and
//! author links are resolved by identifier through a `UserTable` when a
//! model is rebuilt from its dictionary form.

pub mod base;
pub mod commit;
pub mod identifier;
pub mod repository;
pub mod user;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RepoStoreError, Result};

pub use base::BaseModel;
pub use commit::Commit;
pub use identifier::Identifier;
pub use repository::Repository;
pub use user::{create_user, generate_id, User};

/// Plain key-value form of a model
pub type Dict = Map<String, Value>;

/// Already-constructed users keyed by `Identifier::key`
pub type UserTable = HashMap<String, User>;

/// Behavior shared by every identified entity
pub trait Model: Serialize {
    fn base(&self) -> &BaseModel;

    fn id(&self) -> Option<&Identifier> {
        self.base().id.as_ref()
    }

    /// Lookup key of the identifier, if there is a usable one
    fn identity(&self) -> Option<String> {
        self.id().and_then(Identifier::key)
    }

    /// Convert the model to its dictionary form
    fn to_dict(&self) -> Result<Dict> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(RepoStoreError::InvalidData(format!(
                "Model serialized to a non-object value: {}",
                other
            ))),
        }
    }
}

/// Nested reference to another entity; only the identifier is read
#[derive(Debug, Deserialize)]
pub(crate) struct EntityRef {
    #[serde(default)]
    id: Option<Identifier>,
}

impl EntityRef {
    /// Look the referenced user up by identifier
    pub(crate) fn resolve(&self, users: &UserTable) -> Option<User> {
        let key = self.id.as_ref().and_then(Identifier::key)?;
        users.get(&key).cloned()
    }
}

pub(crate) fn decode<T: DeserializeOwned>(data: &Dict) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(data.clone()))?)
}
