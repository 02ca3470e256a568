//! Session-scoped favorites shortlist.
//!
//! [`FavoritesStore`] keeps favorites in insertion order with no two entries
//! sharing an id. The uniqueness check and the append happen inside the same
//! `&mut self` call, so there is no window in which two adds of one id can
//! both pass the check.

use crate::domain::{CatalogItem, ItemId};

/// Result of [`FavoritesStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended.
    Added,
    /// An item with the same id was already present; nothing changed.
    AlreadyPresent,
}

/// Result of [`FavoritesStore::remove`].
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// The item was removed and is returned.
    Removed(CatalogItem),
    /// No item had that id; nothing changed.
    NotFound,
}

/// Ordered set of favorite items keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesStore {
    items: Vec<CatalogItem>,
}

impl FavoritesStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `item` unless its id is already present.
    pub fn add(&mut self, item: CatalogItem) -> AddOutcome {
        if self.contains(item.id) {
            tracing::debug!(item_id = item.id, "favorite already present");
            return AddOutcome::AlreadyPresent;
        }

        tracing::debug!(item_id = item.id, title = %item.title, "favorite added");
        self.items.push(item);
        AddOutcome::Added
    }

    /// Removes the item with `id`. Calling it again for the same id reports
    /// [`RemoveOutcome::NotFound`].
    pub fn remove(&mut self, id: ItemId) -> RemoveOutcome {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let item = self.items.remove(index);
                tracing::debug!(item_id = id, "favorite removed");
                RemoveOutcome::Removed(item)
            }
            None => {
                tracing::debug!(item_id = id, "favorite not found for removal");
                RemoveOutcome::NotFound
            }
        }
    }

    /// Empties the store and returns how many items were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        tracing::debug!(removed = removed, "favorites cleared");
        removed
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Number of favorites (the badge count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Favorites in insertion order, oldest first.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn add_remove_scenario() {
        let mut store = FavoritesStore::new();

        assert_eq!(store.add(CatalogItem::new(1, "X")), AddOutcome::Added);
        assert_eq!(store.len(), 1);

        assert_eq!(store.add(CatalogItem::new(1, "X again")), AddOutcome::AlreadyPresent);
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].title, "X");

        assert!(matches!(store.remove(1), RemoveOutcome::Removed(item) if item.id == 1));
        assert_eq!(store.len(), 0);

        assert_eq!(store.remove(1), RemoveOutcome::NotFound);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn ids_stay_unique_and_ordered() {
        let mut store = FavoritesStore::new();
        for id in [3, 1, 3, 2, 1, 4, 2] {
            store.add(CatalogItem::new(id, format!("{id}")));
        }

        let ids: Vec<_> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn double_remove_matches_single_remove() {
        let mut once = FavoritesStore::new();
        let mut twice = FavoritesStore::new();
        for store in [&mut once, &mut twice] {
            store.add(CatalogItem::new(1, "a"));
            store.add(CatalogItem::new(2, "b"));
        }

        once.remove(1);
        twice.remove(1);
        twice.remove(1);
        assert_eq!(once, twice);
    }

    #[test]
    fn clear_reports_count_and_empties() {
        let mut store = FavoritesStore::new();
        assert_eq!(store.clear(), 0);

        store.add(CatalogItem::new(1, "a"));
        store.add(CatalogItem::new(2, "b"));
        assert_eq!(store.clear(), 2);
        assert!(store.is_empty());
        assert!(!store.contains(1));
    }
}
