//! Contract join entity linking one author to one book.
//!
//! # Responsibility
//! - Carry the relationship attributes (`date`, `royalties`).
//! - Validate the attributes it can check locally.
//!
//! # Invariants
//! - `date` is trimmed and non-empty; it is opaque text, not a calendar date.
//! - `royalties` is non-negative; the stored type is unsigned.
//! - `author` and `book` are only checked against registries when a contract
//!   is inserted through `Catalog`; a standalone value just carries the ids.

use crate::model::author::AuthorId;
use crate::model::book::BookId;
use crate::model::validation::{non_empty_trimmed, non_negative_royalties, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(Uuid);

impl ContractId {
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

impl Display for ContractId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContractFields")]
pub struct Contract {
    id: ContractId,
    author: AuthorId,
    book: BookId,
    date: String,
    royalties: u64,
}

// Signed on the wire so negative values reach validation instead of failing
// as a type mismatch.
#[derive(Deserialize)]
struct ContractFields {
    id: ContractId,
    author: AuthorId,
    book: BookId,
    date: String,
    royalties: i64,
}

impl TryFrom<ContractFields> for Contract {
    type Error = ValidationError;

    fn try_from(value: ContractFields) -> Result<Self, Self::Error> {
        Self::with_id(
            value.id,
            value.author,
            value.book,
            &value.date,
            value.royalties,
        )
    }
}

impl Contract {
    /// Creates a contract with a generated id.
    ///
    /// Fields are checked in declaration order, so the first failing field
    /// determines the error.
    ///
    /// # Errors
    /// - `ValidationError::Date` when `date` is blank after trimming.
    /// - `ValidationError::Royalties` when `royalties` is negative.
    pub fn new(
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> Result<Self, ValidationError> {
        Self::with_id(ContractId::generate(), author, book, date, royalties)
    }

    /// Creates a contract with a caller-provided id.
    pub fn with_id(
        id: ContractId,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> Result<Self, ValidationError> {
        let date = non_empty_trimmed(date, ValidationError::Date)?;
        let royalties = non_negative_royalties(royalties)?;
        Ok(Self {
            id,
            author,
            book,
            date,
            royalties,
        })
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn royalties(&self) -> u64 {
        self.royalties
    }

    pub fn set_date(&mut self, date: &str) -> Result<(), ValidationError> {
        self.date = non_empty_trimmed(date, ValidationError::Date)?;
        Ok(())
    }

    pub fn set_royalties(&mut self, royalties: i64) -> Result<(), ValidationError> {
        self.royalties = non_negative_royalties(royalties)?;
        Ok(())
    }

    // Referential checks need the registries, so only the repository layer
    // reassigns either side of the link.
    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_book(&mut self, book: BookId) {
        self.book = book;
    }
}

#[cfg(test)]
mod tests {
    use super::Contract;
    use crate::model::author::AuthorId;
    use crate::model::book::BookId;
    use crate::model::validation::ValidationError;

    #[test]
    fn new_trims_date_and_keeps_royalties() {
        let contract = Contract::new(AuthorId::generate(), BookId::generate(), " 2025-08-14 ", 15)
            .unwrap();
        assert_eq!(contract.date(), "2025-08-14");
        assert_eq!(contract.royalties(), 15);
    }

    #[test]
    fn date_is_checked_before_royalties() {
        let err = Contract::new(AuthorId::generate(), BookId::generate(), "  ", -3).unwrap_err();
        assert_eq!(err, ValidationError::Date);
    }

    #[test]
    fn failed_setter_leaves_previous_value() {
        let mut contract = Contract::new(AuthorId::generate(), BookId::generate(), "2025-08-14", 15)
            .unwrap();

        assert_eq!(
            contract.set_royalties(-1),
            Err(ValidationError::Royalties(-1))
        );
        assert_eq!(contract.royalties(), 15);

        assert_eq!(contract.set_date(""), Err(ValidationError::Date));
        assert_eq!(contract.date(), "2025-08-14");
    }
}
