//! Core domain logic for Folio.
//! This crate is the single source of truth for book, author and contract
//! invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, LogConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::author::{Author, AuthorId};
pub use model::book::{Book, BookId};
pub use model::contract::{Contract, ContractId};
pub use model::validation::ValidationError;
pub use repo::author_repo::{AuthorRepository, InMemoryAuthorRepository};
pub use repo::book_repo::{BookRepository, InMemoryBookRepository};
pub use repo::contract_repo::{ContractRepository, InMemoryContractRepository};
pub use repo::error::{RepoError, RepoResult};
pub use service::catalog::Catalog;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
