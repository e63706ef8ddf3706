//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the book, author and contract registries for one caller.
//! - Provide creation, traversal and update entry points across them.
//!
//! # Invariants
//! - A contract is registered only after every field has validated; a
//!   failed write leaves all three registries unchanged.
//! - Contracts only ever reference registered authors and books.
//! - Logs carry ids and event metadata only, never titles or names.

use crate::model::author::{Author, AuthorId};
use crate::model::book::{Book, BookId};
use crate::model::contract::{Contract, ContractId};
use crate::model::validation::ValidationError;
use crate::repo::author_repo::{AuthorRepository, InMemoryAuthorRepository};
use crate::repo::book_repo::{BookRepository, InMemoryBookRepository};
use crate::repo::contract_repo::{ContractRepository, InMemoryContractRepository};
use crate::repo::error::{RepoError, RepoResult};
use log::{debug, info, warn};

/// Caller-owned context holding every registry.
///
/// Two catalogs never share state.
#[derive(Debug, Clone)]
pub struct Catalog<
    B = InMemoryBookRepository,
    A = InMemoryAuthorRepository,
    C = InMemoryContractRepository,
> {
    books: B,
    authors: A,
    contracts: C,
}

impl Catalog {
    /// Creates an empty catalog backed by in-memory registries.
    pub fn new() -> Self {
        Self::with_repositories(
            InMemoryBookRepository::new(),
            InMemoryAuthorRepository::new(),
            InMemoryContractRepository::new(),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, A, C> Catalog<B, A, C>
where
    B: BookRepository,
    A: AuthorRepository,
    C: ContractRepository,
{
    /// Creates a catalog over caller-provided registry implementations.
    pub fn with_repositories(books: B, authors: A, contracts: C) -> Self {
        Self {
            books,
            authors,
            contracts,
        }
    }

    /// Creates and registers a book.
    ///
    /// # Errors
    /// - `RepoError::Validation(ValidationError::Title)` for a blank title.
    pub fn create_book(&mut self, title: &str) -> RepoResult<Book> {
        let book = Book::new(title).map_err(|err| rejected("book_create", err))?;
        self.books.insert_book(book.clone())?;
        debug!(
            "event=book_create module=catalog status=ok book_id={}",
            book.id()
        );
        Ok(book)
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get_book(id)
    }

    /// All books in creation order.
    pub fn books(&self) -> &[Book] {
        self.books.list_books()
    }

    pub fn set_book_title(&mut self, id: BookId, title: &str) -> RepoResult<()> {
        self.books
            .set_book_title(id, title)
            .map_err(|err| rejected_repo("book_update", err))
    }

    /// Contracts for `book` in creation order.
    pub fn book_contracts(&self, book: BookId) -> RepoResult<Vec<&Contract>> {
        if !self.books.contains_book(book) {
            return Err(RepoError::BookNotFound(book));
        }
        Ok(self.contracts.contracts_for_book(book))
    }

    /// One author per contract for `book`; repeats when an author signed
    /// more than once.
    ///
    /// A contract pointing at an unregistered author fails with
    /// `AuthorNotFound` rather than being skipped.
    pub fn book_authors(&self, book: BookId) -> RepoResult<Vec<&Author>> {
        self.book_contracts(book)?
            .into_iter()
            .map(|contract| {
                self.authors
                    .get_author(contract.author())
                    .ok_or(RepoError::AuthorNotFound(contract.author()))
            })
            .collect()
    }

    /// Creates and registers an author.
    ///
    /// # Errors
    /// - `RepoError::Validation(ValidationError::Name)` for a blank name.
    pub fn create_author(&mut self, name: &str) -> RepoResult<Author> {
        let author = Author::new(name).map_err(|err| rejected("author_create", err))?;
        self.authors.insert_author(author.clone())?;
        debug!(
            "event=author_create module=catalog status=ok author_id={}",
            author.id()
        );
        Ok(author)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get_author(id)
    }

    /// All authors in creation order.
    pub fn authors(&self) -> &[Author] {
        self.authors.list_authors()
    }

    pub fn set_author_name(&mut self, id: AuthorId, name: &str) -> RepoResult<()> {
        self.authors
            .set_author_name(id, name)
            .map_err(|err| rejected_repo("author_update", err))
    }

    /// Contracts for `author` in creation order.
    pub fn author_contracts(&self, author: AuthorId) -> RepoResult<Vec<&Contract>> {
        if !self.authors.contains_author(author) {
            return Err(RepoError::AuthorNotFound(author));
        }
        Ok(self.contracts.contracts_for_author(author))
    }

    /// One book per contract for `author`; repeats are kept.
    ///
    /// A contract pointing at an unregistered book fails with `BookNotFound`.
    pub fn author_books(&self, author: AuthorId) -> RepoResult<Vec<&Book>> {
        self.author_contracts(author)?
            .into_iter()
            .map(|contract| {
                self.books
                    .get_book(contract.book())
                    .ok_or(RepoError::BookNotFound(contract.book()))
            })
            .collect()
    }

    /// Signs a new contract on behalf of `author`.
    ///
    /// Same validation and registration as [`Catalog::create_contract`].
    pub fn sign_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> RepoResult<Contract> {
        self.create_contract(author, book, date, royalties)
    }

    /// Validates and registers a contract.
    ///
    /// Fields are checked in order `author`, `book`, `date`, `royalties`;
    /// the first failure is returned and nothing is registered.
    pub fn create_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> RepoResult<Contract> {
        let contract = self
            .validate_contract(author, book, date, royalties)
            .map_err(|err| rejected("contract_create", err))?;
        self.contracts.insert_contract(contract.clone())?;
        info!(
            "event=contract_create module=catalog status=ok contract_id={} author_id={} book_id={} royalties={}",
            contract.id(),
            author,
            book,
            contract.royalties()
        );
        Ok(contract)
    }

    /// Sum of royalties over the author's contracts; `0` when there are none.
    pub fn total_royalties(&self, author: AuthorId) -> RepoResult<u64> {
        self.author_contracts(author)?
            .into_iter()
            .try_fold(0_u64, |total, contract| {
                total.checked_add(contract.royalties())
            })
            .ok_or(RepoError::Validation(ValidationError::RoyaltiesOverflow))
    }

    /// Contracts whose stored date equals `date` exactly, in creation order.
    pub fn contracts_by_date(&self, date: &str) -> Vec<&Contract> {
        self.contracts.contracts_on_date(date)
    }

    pub fn contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.get_contract(id)
    }

    /// All contracts in creation order.
    pub fn contracts(&self) -> &[Contract] {
        self.contracts.list_contracts()
    }

    /// Points an existing contract at another registered author.
    ///
    /// An unknown contract is reported before an unknown author.
    pub fn set_contract_author(&mut self, id: ContractId, author: AuthorId) -> RepoResult<()> {
        self.ensure_contract(id)?;
        if !self.authors.contains_author(author) {
            return Err(rejected("contract_update", ValidationError::Author));
        }
        self.contracts
            .reassign_author(id, author)
            .map_err(|err| rejected_repo("contract_update", err))
    }

    /// Points an existing contract at another registered book.
    ///
    /// An unknown contract is reported before an unknown book.
    pub fn set_contract_book(&mut self, id: ContractId, book: BookId) -> RepoResult<()> {
        self.ensure_contract(id)?;
        if !self.books.contains_book(book) {
            return Err(rejected("contract_update", ValidationError::Book));
        }
        self.contracts
            .reassign_book(id, book)
            .map_err(|err| rejected_repo("contract_update", err))
    }

    pub fn set_contract_date(&mut self, id: ContractId, date: &str) -> RepoResult<()> {
        self.contracts
            .set_contract_date(id, date)
            .map_err(|err| rejected_repo("contract_update", err))
    }

    pub fn set_contract_royalties(&mut self, id: ContractId, royalties: i64) -> RepoResult<()> {
        self.contracts
            .set_contract_royalties(id, royalties)
            .map_err(|err| rejected_repo("contract_update", err))
    }

    fn ensure_contract(&self, id: ContractId) -> RepoResult<()> {
        if self.contracts.get_contract(id).is_none() {
            return Err(rejected_repo(
                "contract_update",
                RepoError::ContractNotFound(id),
            ));
        }
        Ok(())
    }

    fn validate_contract(
        &self,
        author: AuthorId,
        book: BookId,
        date: &str,
        royalties: i64,
    ) -> Result<Contract, ValidationError> {
        if !self.authors.contains_author(author) {
            return Err(ValidationError::Author);
        }
        if !self.books.contains_book(book) {
            return Err(ValidationError::Book);
        }
        Contract::new(author, book, date, royalties)
    }
}

fn rejected(event: &'static str, err: ValidationError) -> RepoError {
    rejected_repo(event, err.into())
}

fn rejected_repo(event: &'static str, err: RepoError) -> RepoError {
    warn!("event={event} module=catalog status=rejected reason=\"{err}\"");
    err
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::model::author::AuthorId;
    use crate::model::book::BookId;
    use crate::model::validation::ValidationError;
    use crate::repo::error::RepoError;

    #[test]
    fn catalogs_do_not_share_registries() {
        let mut first = Catalog::new();
        let second = Catalog::new();

        first.create_book("Python Mastery").unwrap();

        assert_eq!(first.books().len(), 1);
        assert!(second.books().is_empty());
    }

    #[test]
    fn contract_fields_are_checked_in_declaration_order() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("John Doe").unwrap();
        let book = catalog.create_book("Python Mastery").unwrap();
        let (stray_author, stray_book) = (AuthorId::generate(), BookId::generate());

        let err = catalog
            .create_contract(stray_author, stray_book, "", -1)
            .unwrap_err();
        assert_eq!(err, RepoError::Validation(ValidationError::Author));

        let err = catalog
            .create_contract(author.id(), stray_book, "", -1)
            .unwrap_err();
        assert_eq!(err, RepoError::Validation(ValidationError::Book));

        let err = catalog
            .create_contract(author.id(), book.id(), " ", -1)
            .unwrap_err();
        assert_eq!(err, RepoError::Validation(ValidationError::Date));

        let err = catalog
            .create_contract(author.id(), book.id(), "2025-08-14", -1)
            .unwrap_err();
        assert_eq!(err, RepoError::Validation(ValidationError::Royalties(-1)));

        assert!(catalog.contracts().is_empty());
    }

    #[test]
    fn total_royalties_reports_overflow() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("John Doe").unwrap();
        let book = catalog.create_book("Python Mastery").unwrap();
        catalog
            .sign_contract(author.id(), book.id(), "2025-08-14", i64::MAX)
            .unwrap();
        catalog
            .sign_contract(author.id(), book.id(), "2025-08-14", i64::MAX)
            .unwrap();
        catalog
            .sign_contract(author.id(), book.id(), "2025-08-14", 2)
            .unwrap();

        assert_eq!(
            catalog.total_royalties(author.id()),
            Err(RepoError::Validation(ValidationError::RoyaltiesOverflow))
        );
    }
}
