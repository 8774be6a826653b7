//! In-memory item collection backing the resource endpoints.

use api_types::item::{Item, ItemDraft, ItemId};
use tokio::sync::RwLock;

#[derive(Debug)]
struct Inner {
    items: Vec<Item>,
    /// `None` once the numeric id space is used up.
    next_id: Option<u64>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(1),
        }
    }
}

/// Ordered set of items with server-assigned numeric identifiers.
///
/// Insertion order is the listing order. Identifiers are never reused.
/// Lookups compare the identifier as it appears in a URL path, so a seeded
/// `"1"` and a generated `1` are both reached through `/items/1`.
#[derive(Debug, Default)]
pub struct Collection {
    inner: RwLock<Inner>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing items, keeping their identifiers.
    ///
    /// New identifiers continue after the highest numeric one found.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items
            .iter()
            .filter_map(|item| match item.id {
                ItemId::Number(id) => Some(id),
                ItemId::Text(_) => None,
            })
            .max()
            .map_or(Some(1), |id| id.checked_add(1));

        if next_id.is_none() {
            tracing::warn!("seeded ids reach u64::MAX, new items will be refused");
        }

        Self {
            inner: RwLock::new(Inner { items, next_id }),
        }
    }

    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.clone()
    }

    /// Appends a new item, or `None` when no identifier is left.
    pub async fn insert(&self, draft: ItemDraft) -> Option<Item> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id?;
        inner.next_id = id.checked_add(1);

        let item = Item {
            id: ItemId::Number(id),
            name: draft.name,
            description: draft.description,
        };
        inner.items.push(item.clone());
        Some(item)
    }

    /// Replaces name and description of the item with `id`, in place.
    pub async fn replace(&self, id: &str, draft: ItemDraft) -> Option<Item> {
        let mut inner = self.inner.write().await;
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id.to_string() == id)?;
        item.name = draft.name;
        item.description = draft.description;
        Some(item.clone())
    }

    pub async fn remove(&self, id: &str) -> Option<Item> {
        let mut inner = self.inner.write().await;
        let position = inner
            .items
            .iter()
            .position(|item| item.id.to_string() == id)?;
        Some(inner.items.remove(position))
    }
}
