//! Insertion-ordered storage with id lookup, shared by all registries.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub(crate) struct Ordered<K, T> {
    items: Vec<T>,
    positions: HashMap<K, usize>,
}

impl<K, T> Default for Ordered<K, T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash, T> Ordered<K, T> {
    /// Appends `item` under `id`. Returns `false` when `id` is taken.
    pub(crate) fn push(&mut self, id: K, item: T) -> bool {
        if self.positions.contains_key(&id) {
            return false;
        }
        self.positions.insert(id, self.items.len());
        self.items.push(item);
        true
    }

    pub(crate) fn position(&self, id: K) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub(crate) fn get(&self, id: K) -> Option<&T> {
        self.position(id).map(|index| &self.items[index])
    }

    pub(crate) fn get_mut(&mut self, id: K) -> Option<&mut T> {
        let index = self.position(id)?;
        self.items.get_mut(index)
    }

    pub(crate) fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Ordered;
    use crate::model::book::BookId;

    #[test]
    fn push_keeps_insertion_order_and_rejects_duplicate_ids() {
        let mut ordered = Ordered::default();
        let first = BookId::generate();
        let second = BookId::generate();

        assert!(ordered.push(first, "a"));
        assert!(ordered.push(second, "b"));
        assert!(!ordered.push(first, "c"));

        assert_eq!(ordered.as_slice(), &["a", "b"]);
        assert_eq!(ordered.position(second), Some(1));
        assert_eq!(ordered.get(first), Some(&"a"));
        assert_eq!(ordered.len(), 2);
    }
}
