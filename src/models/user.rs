use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{decode, BaseModel, Dict, Identifier, Model};
use crate::error::{RepoStoreError, Result};

/// A system user, referenced as repository owner or commit author
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn new(id: Option<Identifier>, name: Option<String>, email: Option<String>) -> Self {
        Self {
            base: BaseModel::new(id),
            name,
            email,
        }
    }

    /// Rebuild a user from its dictionary form; missing keys stay unset
    pub fn from_dict(data: &Dict) -> Result<Self> {
        decode(data)
    }

    /// Check that the email is present and contains an `@`.
    ///
    /// Never run implicitly by construction or serialization.
    pub fn validate(&self) -> Result<()> {
        match self.email.as_deref() {
            Some(email) if email.contains('@') => Ok(()),
            _ => Err(RepoStoreError::InvalidData(
                "Invalid email address".to_string(),
            )),
        }
    }
}

impl Model for User {
    fn base(&self) -> &BaseModel {
        &self.base
    }
}

/// Create a user with a freshly generated identifier
pub fn create_user(name: impl Into<String>, email: impl Into<String>) -> User {
    User::new(
        Some(generate_id().into()),
        Some(name.into()),
        Some(email.into()),
    )
}

/// New random unique identifier
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
