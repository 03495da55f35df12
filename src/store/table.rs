//! Generic record table
//!
//! `HashMap` keyed by record id behind a `tokio::sync::RwLock`, with an
//! atomic id allocator. Listing returns rows in id order so API output is
//! stable.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// One resource table in the in-memory store
pub struct Table<T> {
    rows: RwLock<HashMap<u64, T>>,
    next_id: AtomicU64,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Allocate the next record id
    pub fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Insert a row during store construction, before the table is shared.
    ///
    /// A fresh table's lock is never contended, so a failed `try_write` only
    /// means the row is skipped; used for demo seed data only.
    pub fn seed(&self, id: u64, row: T) {
        if let Ok(mut rows) = self.rows.try_write() {
            rows.insert(id, row);
        }
    }

    /// All rows, ordered by id
    pub async fn list(&self) -> Vec<T> {
        let rows = self.rows.read().await;
        let mut pairs: Vec<(u64, T)> = rows.iter().map(|(id, row)| (*id, row.clone())).collect();
        pairs.sort_by_key(|(id, _)| *id);
        pairs.into_iter().map(|(_, row)| row).collect()
    }

    pub async fn get(&self, id: u64) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    pub async fn insert(&self, id: u64, row: T) {
        self.rows.write().await.insert(id, row);
    }

    /// Replace an existing row; returns false when the id is unknown
    pub async fn replace(&self, id: u64, row: T) -> bool {
        let mut rows = self.rows.write().await;
        if let std::collections::hash_map::Entry::Occupied(mut entry) = rows.entry(id) {
            entry.insert(row);
            true
        } else {
            false
        }
    }

    /// Remove a row; returns false when the id is unknown
    pub async fn remove(&self, id: u64) -> bool {
        self.rows.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let table: Table<&str> = Table::new();
        assert_eq!(table.allocate_id(), 1);
        assert_eq!(table.allocate_id(), 2);
        assert_eq!(table.allocate_id(), 3);
    }

    #[tokio::test]
    async fn test_list_is_id_ordered() {
        let table: Table<&str> = Table::new();
        table.insert(3, "c").await;
        table.insert(1, "a").await;
        table.insert(2, "b").await;
        assert_eq!(table.list().await, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_replace_requires_existing_row() {
        let table: Table<&str> = Table::new();
        table.insert(1, "a").await;
        assert!(table.replace(1, "a2").await);
        assert!(!table.replace(2, "b").await);
        assert_eq!(table.get(1).await, Some("a2"));
        assert_eq!(table.get(2).await, None);
    }

    #[tokio::test]
    async fn test_remove() {
        let table: Table<&str> = Table::new();
        table.insert(1, "a").await;
        assert!(table.remove(1).await);
        assert!(!table.remove(1).await);
        assert_eq!(table.len().await, 0);
    }
}
