//! Author entity.
//!
//! # Invariants
//! - `id` is stable and never reused for another author.
//! - `name` is trimmed and non-empty, also after deserialization.

use crate::model::validation::{non_empty_trimmed, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(self) -> Uuid {
        self.0
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// One side of the author/book relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorFields")]
pub struct Author {
    id: AuthorId,
    name: String,
}

#[derive(Deserialize)]
struct AuthorFields {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorFields> for Author {
    type Error = ValidationError;

    fn try_from(value: AuthorFields) -> Result<Self, Self::Error> {
        Self::with_id(value.id, &value.name)
    }
}

impl Author {
    /// Creates an author with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::Name` when `name` is blank after trimming.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::with_id(AuthorId::generate(), name)
    }

    /// Creates an author with a caller-provided id.
    pub fn with_id(id: AuthorId, name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: non_empty_trimmed(name, ValidationError::Name)?,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name, re-running creation-time validation.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = non_empty_trimmed(name, ValidationError::Name)?;
        Ok(())
    }
}
