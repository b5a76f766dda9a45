use serde::{Deserialize, Serialize};

use super::{decode, Dict, Identifier, Model};
use crate::error::Result;

/// Identifier shared by all entities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseModel {
    #[serde(default)]
    pub id: Option<Identifier>,
}

impl BaseModel {
    pub fn new(id: Option<Identifier>) -> Self {
        Self { id }
    }

    pub fn from_dict(data: &Dict) -> Result<Self> {
        decode(data)
    }
}

impl Model for BaseModel {
    fn base(&self) -> &BaseModel {
        self
    }
}
