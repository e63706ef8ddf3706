//! Book entity.
//!
//! # Invariants
//! - `id` is stable and never reused for another book.
//! - `title` is trimmed and non-empty, also after deserialization.

use crate::model::validation::{non_empty_trimmed, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
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

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// One side of the author/book relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookFields")]
pub struct Book {
    id: BookId,
    title: String,
}

#[derive(Deserialize)]
struct BookFields {
    id: BookId,
    title: String,
}

impl TryFrom<BookFields> for Book {
    type Error = ValidationError;

    fn try_from(value: BookFields) -> Result<Self, Self::Error> {
        Self::with_id(value.id, &value.title)
    }
}

impl Book {
    /// Creates a book with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::Title` when `title` is blank after trimming.
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        Self::with_id(BookId::generate(), title)
    }

    /// Creates a book with a caller-provided id.
    pub fn with_id(id: BookId, title: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: non_empty_trimmed(title, ValidationError::Title)?,
        })
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title, re-running creation-time validation.
    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = non_empty_trimmed(title, ValidationError::Title)?;
        Ok(())
    }
}
