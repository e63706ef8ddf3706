//! Author registry contract and in-memory implementation.

use crate::model::author::{Author, AuthorId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::ordered::Ordered;

/// Registry interface for authors.
pub trait AuthorRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    /// All authors in creation order.
    fn list_authors(&self) -> &[Author];
    fn set_author_name(&mut self, id: AuthorId, name: &str) -> RepoResult<()>;

    fn contains_author(&self, id: AuthorId) -> bool {
        self.get_author(id).is_some()
    }
}

/// Append-only author registry kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthorRepository {
    authors: Ordered<AuthorId, Author>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuthorRepository for InMemoryAuthorRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        let id = author.id();
        if !self.authors.push(id, author) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        Ok(id)
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id)
    }

    fn list_authors(&self) -> &[Author] {
        self.authors.as_slice()
    }

    fn set_author_name(&mut self, id: AuthorId, name: &str) -> RepoResult<()> {
        let author = self
            .authors
            .get_mut(id)
            .ok_or(RepoError::AuthorNotFound(id))?;
        author.set_name(name)?;
        Ok(())
    }
}
