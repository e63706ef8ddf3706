//! Book registry contract and in-memory implementation.

use crate::model::book::{Book, BookId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::ordered::Ordered;

/// Registry interface for books.
pub trait BookRepository {
    fn insert_book(&mut self, book: Book) -> RepoResult<BookId>;
    fn get_book(&self, id: BookId) -> Option<&Book>;
    /// All books in creation order.
    fn list_books(&self) -> &[Book];
    fn set_book_title(&mut self, id: BookId, title: &str) -> RepoResult<()>;

    fn contains_book(&self, id: BookId) -> bool {
        self.get_book(id).is_some()
    }
}

/// Append-only book registry kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookRepository {
    books: Ordered<BookId, Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn insert_book(&mut self, book: Book) -> RepoResult<BookId> {
        let id = book.id();
        if !self.books.push(id, book) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        Ok(id)
    }

    fn get_book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id)
    }

    fn list_books(&self) -> &[Book] {
        self.books.as_slice()
    }

    fn set_book_title(&mut self, id: BookId, title: &str) -> RepoResult<()> {
        let book = self.books.get_mut(id).ok_or(RepoError::BookNotFound(id))?;
        book.set_title(title)?;
        Ok(())
    }
}
