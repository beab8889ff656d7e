// ABOUTME: Ordered in-memory item collection guarded by a single async mutex.
// ABOUTME: Provides insert, list, and first-match find/replace/delete by id.

use thiserror::Error;
use tokio::sync::Mutex;

use crate::item::Item;

/// Errors returned by id-based store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("item not found: {0}")]
    NotFound(i64),
}

/// The authoritative item collection. Items keep their insertion order;
/// replacement is in place and deletion shifts later items left.
///
/// Every operation takes the same lock, so a scan never observes the
/// collection changing shape underneath it.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Mutex<Vec<Item>>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the end of the collection. Ids are not checked for uniqueness.
    pub async fn insert(&self, item: Item) {
        let mut items = self.items.lock().await;
        items.push(item);
        tracing::debug!(len = items.len(), "item inserted");
    }

    /// Snapshot of every item in current order.
    pub async fn list_all(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }

    /// Return the first item whose id matches.
    pub async fn find_by_id(&self, id: i64) -> Result<Item, StoreError> {
        let items = self.items.lock().await;
        let index = position_of(&items, id)?;
        Ok(items[index].clone())
    }

    /// Overwrite the first item whose id matches. The replacement's own id is
    /// stored as given, so this may change which id occupies the slot.
    pub async fn replace_by_id(&self, id: i64, item: Item) -> Result<Item, StoreError> {
        let mut items = self.items.lock().await;
        let index = position_of(&items, id)?;
        items[index] = item.clone();
        Ok(item)
    }

    /// Remove the first item whose id matches, preserving the order of the rest.
    pub async fn delete_by_id(&self, id: i64) -> Result<Item, StoreError> {
        let mut items = self.items.lock().await;
        let index = position_of(&items, id)?;
        Ok(items.remove(index))
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}

/// Linear scan shared by every id-based operation; duplicates resolve to the earliest.
fn position_of(items: &[Item], id: i64) -> Result<usize, StoreError> {
    items
        .iter()
        .position(|item| item.id == id)
        .ok_or(StoreError::NotFound(id))
}
