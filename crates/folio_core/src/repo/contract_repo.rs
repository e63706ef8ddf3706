//! Contract registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Store contracts in creation order.
//! - Maintain author, book and date indices incrementally so relationship
//!   traversal does not scan the whole registry.
//!
//! # Invariants
//! - Every index bucket lists registry positions in ascending order, so
//!   traversal results follow creation order, also after reassignment.
//! - Referential checks (author/book registered) are the caller's job; this
//!   registry only stores ids.

use crate::model::author::AuthorId;
use crate::model::book::BookId;
use crate::model::contract::{Contract, ContractId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::ordered::Ordered;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Registry interface for contracts.
pub trait ContractRepository {
    fn insert_contract(&mut self, contract: Contract) -> RepoResult<ContractId>;
    fn get_contract(&self, id: ContractId) -> Option<&Contract>;
    /// All contracts in creation order.
    fn list_contracts(&self) -> &[Contract];
    fn contracts_for_author(&self, author: AuthorId) -> Vec<&Contract>;
    fn contracts_for_book(&self, book: BookId) -> Vec<&Contract>;
    /// Exact match against the stored (trimmed) date.
    fn contracts_on_date(&self, date: &str) -> Vec<&Contract>;
    fn reassign_author(&mut self, id: ContractId, author: AuthorId) -> RepoResult<()>;
    fn reassign_book(&mut self, id: ContractId, book: BookId) -> RepoResult<()>;
    fn set_contract_date(&mut self, id: ContractId, date: &str) -> RepoResult<()>;
    fn set_contract_royalties(&mut self, id: ContractId, royalties: i64) -> RepoResult<()>;
}

/// Append-only contract registry with relationship indices.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContractRepository {
    contracts: Ordered<ContractId, Contract>,
    by_author: PositionIndex<AuthorId>,
    by_book: PositionIndex<BookId>,
    by_date: PositionIndex<String>,
}

impl InMemoryContractRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&Contract> {
        positions
            .iter()
            .filter_map(|&position| self.contracts.at(position))
            .collect()
    }

    fn position_of(&self, id: ContractId) -> RepoResult<usize> {
        self.contracts
            .position(id)
            .ok_or(RepoError::ContractNotFound(id))
    }
}

impl ContractRepository for InMemoryContractRepository {
    fn insert_contract(&mut self, contract: Contract) -> RepoResult<ContractId> {
        let id = contract.id();
        let position = self.contracts.len();
        let (author, book, date) = (
            contract.author(),
            contract.book(),
            contract.date().to_string(),
        );

        if !self.contracts.push(id, contract) {
            return Err(RepoError::DuplicateId(id.as_uuid()));
        }
        self.by_author.insert(author, position);
        self.by_book.insert(book, position);
        self.by_date.insert(date, position);
        Ok(id)
    }

    fn get_contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.get(id)
    }

    fn list_contracts(&self) -> &[Contract] {
        self.contracts.as_slice()
    }

    fn contracts_for_author(&self, author: AuthorId) -> Vec<&Contract> {
        self.resolve(self.by_author.positions(&author))
    }

    fn contracts_for_book(&self, book: BookId) -> Vec<&Contract> {
        self.resolve(self.by_book.positions(&book))
    }

    fn contracts_on_date(&self, date: &str) -> Vec<&Contract> {
        self.resolve(self.by_date.positions(date))
    }

    fn reassign_author(&mut self, id: ContractId, author: AuthorId) -> RepoResult<()> {
        let position = self.position_of(id)?;
        let contract = self
            .contracts
            .get_mut(id)
            .ok_or(RepoError::ContractNotFound(id))?;
        let previous = contract.author();
        contract.set_author(author);

        self.by_author.remove(&previous, position);
        self.by_author.insert(author, position);
        Ok(())
    }

    fn reassign_book(&mut self, id: ContractId, book: BookId) -> RepoResult<()> {
        let position = self.position_of(id)?;
        let contract = self
            .contracts
            .get_mut(id)
            .ok_or(RepoError::ContractNotFound(id))?;
        let previous = contract.book();
        contract.set_book(book);

        self.by_book.remove(&previous, position);
        self.by_book.insert(book, position);
        Ok(())
    }

    fn set_contract_date(&mut self, id: ContractId, date: &str) -> RepoResult<()> {
        let position = self.position_of(id)?;
        let contract = self
            .contracts
            .get_mut(id)
            .ok_or(RepoError::ContractNotFound(id))?;
        let previous = contract.date().to_string();
        contract.set_date(date)?;
        let current = contract.date().to_string();

        self.by_date.remove(previous.as_str(), position);
        self.by_date.insert(current, position);
        Ok(())
    }

    fn set_contract_royalties(&mut self, id: ContractId, royalties: i64) -> RepoResult<()> {
        let contract = self
            .contracts
            .get_mut(id)
            .ok_or(RepoError::ContractNotFound(id))?;
        contract.set_royalties(royalties)?;
        Ok(())
    }
}

/// Maps a key to the sorted registry positions carrying it.
#[derive(Debug, Clone)]
struct PositionIndex<K> {
    buckets: HashMap<K, Vec<usize>>,
}

impl<K> Default for PositionIndex<K> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> PositionIndex<K> {
    fn insert(&mut self, key: K, position: usize) {
        let bucket = self.buckets.entry(key).or_default();
        if let Err(slot) = bucket.binary_search(&position) {
            bucket.insert(slot, position);
        }
    }

    fn remove<Q>(&mut self, key: &Q, position: usize)
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let emptied = match self.buckets.get_mut(key) {
            Some(bucket) => {
                if let Ok(slot) = bucket.binary_search(&position) {
                    bucket.remove(slot);
                }
                bucket.is_empty()
            }
            None => false,
        };
        if emptied {
            self.buckets.remove(key);
        }
    }

    fn positions<Q>(&self, key: &Q) -> &[usize]
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::{ContractRepository, InMemoryContractRepository, PositionIndex};
    use crate::model::author::AuthorId;
    use crate::model::book::BookId;
    use crate::model::contract::{Contract, ContractId};
    use crate::model::validation::ValidationError;
    use crate::repo::error::RepoError;

    #[test]
    fn position_index_keeps_buckets_sorted() {
        let mut index = PositionIndex::default();
        index.insert("a", 4);
        index.insert("a", 1);
        index.insert("a", 3);
        index.insert("a", 3);
        assert_eq!(index.positions("a"), &[1, 3, 4]);

        index.remove("a", 3);
        assert_eq!(index.positions("a"), &[1, 4]);

        index.remove("a", 1);
        index.remove("a", 4);
        assert!(index.positions("a").is_empty());
        assert!(index.buckets.is_empty());
    }

    #[test]
    fn reassigned_contract_keeps_creation_order_in_new_bucket() {
        let mut repo = InMemoryContractRepository::new();
        let (first_author, second_author) = (AuthorId::generate(), AuthorId::generate());
        let book = BookId::generate();

        let early = repo
            .insert_contract(Contract::new(first_author, book, "2025-01-01", 1).unwrap())
            .unwrap();
        let late = repo
            .insert_contract(Contract::new(second_author, book, "2025-01-02", 2).unwrap())
            .unwrap();

        repo.reassign_author(early, second_author).unwrap();

        let ids: Vec<_> = repo
            .contracts_for_author(second_author)
            .iter()
            .map(|contract| contract.id())
            .collect();
        assert_eq!(ids, vec![early, late]);
        assert!(repo.contracts_for_author(first_author).is_empty());
    }

    #[test]
    fn date_update_moves_index_bucket_and_rejects_blank() {
        let mut repo = InMemoryContractRepository::new();
        let id = repo
            .insert_contract(
                Contract::new(AuthorId::generate(), BookId::generate(), "2025-08-14", 10)
                    .unwrap(),
            )
            .unwrap();

        let err = repo.set_contract_date(id, "  ").unwrap_err();
        assert_eq!(err, RepoError::Validation(ValidationError::Date));
        assert_eq!(repo.contracts_on_date("2025-08-14").len(), 1);

        repo.set_contract_date(id, " 2025-08-15 ").unwrap();
        assert!(repo.contracts_on_date("2025-08-14").is_empty());
        assert_eq!(repo.contracts_on_date("2025-08-15")[0].id(), id);
    }

    #[test]
    fn unknown_contract_ids_are_reported() {
        let mut repo = InMemoryContractRepository::new();
        let missing = ContractId::generate();
        assert_eq!(
            repo.set_contract_royalties(missing, 5),
            Err(RepoError::ContractNotFound(missing))
        );
        assert_eq!(
            repo.reassign_book(missing, BookId::generate()),
            Err(RepoError::ContractNotFound(missing))
        );
    }
}
