//! Registry layer: ordered in-memory repositories per entity kind.
//!
//! # Responsibility
//! - Define use-case oriented access contracts for books, authors and
//!   contracts.
//! - Keep creation order and relationship indices inside the registry
//!   boundary.
//!
//! # Invariants
//! - Registries are append-only: nothing is ever removed.
//! - Listing order is insertion order.
//! - Writes either fully apply or leave the registry unchanged.

pub mod author_repo;
pub mod book_repo;
pub mod contract_repo;
pub mod error;
mod ordered;
