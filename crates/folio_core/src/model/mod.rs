//! Domain model for books, authors and the contracts linking them.
//!
//! # Responsibility
//! - Define the three entity kinds and their field-level validation.
//! - Keep every stored text field trimmed and non-empty.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID, never by its text fields.
//! - An entity value that exists has passed validation; setters re-validate
//!   and leave the value untouched on failure.
//! - Book and Author never reference each other directly; the many-to-many
//!   edge lives only in `Contract`.

pub mod author;
pub mod book;
pub mod contract;
pub mod validation;
