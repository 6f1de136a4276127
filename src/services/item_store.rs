use crate::models::item_types::ImageItem;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Ordered collection of image items, keyed by item id.
///
/// Cloning the store clones a handle to the same collection. Every
/// operation holds the lock for its whole duration, so a reader never
/// observes a partially applied batch.
#[derive(Clone, Default)]
pub struct ItemStore {
    items: Arc<Mutex<Vec<ImageItem>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch to the end, preserving the batch's relative order.
    pub async fn append(&self, batch: Vec<ImageItem>) {
        self.items.lock().await.extend(batch);
    }

    /// Mutate the item with the matching id in place.
    ///
    /// Returns `false` without touching the collection when no live item
    /// has that id, e.g. because it was removed while a request was still
    /// in flight.
    pub async fn update_by_key<F>(&self, id: &str, mutate: F) -> bool
    where
        F: FnOnce(&mut ImageItem),
    {
        let mut items = self.items.lock().await;
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                mutate(item);
                true
            }
            None => false,
        }
    }

    /// Remove the item with the matching id, leaving the relative order of
    /// the rest unchanged; no-op when absent.
    pub async fn remove_by_key(&self, id: &str) -> bool {
        let mut items = self.items.lock().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        items.len() < before
    }

    pub async fn clear(&self) {
        self.items.lock().await.clear();
    }

    /// Clone of the current contents, in insertion order.
    pub async fn snapshot(&self) -> Vec<ImageItem> {
        self.items.lock().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<ImageItem> {
        self.items
            .lock()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn batch(names: &[&str]) -> Vec<ImageItem> {
        names
            .iter()
            .map(|name| ImageItem::placeholder(Path::new(name)))
            .collect()
    }

    #[tokio::test]
    async fn append_preserves_batch_order() {
        let store = ItemStore::new();
        store.append(batch(&["a.jpg", "b.jpg"])).await;
        store.append(batch(&["c.jpg"])).await;

        let images: Vec<String> = store
            .snapshot()
            .await
            .into_iter()
            .map(|item| item.image)
            .collect();
        assert_eq!(images, ["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[tokio::test]
    async fn update_by_key_mutates_only_the_matching_item() {
        let store = ItemStore::new();
        store.append(batch(&["a.jpg", "b.jpg"])).await;
        let target = store.snapshot().await[1].id.clone();

        let updated = store
            .update_by_key(&target, |item| {
                item.prediction = Some("cat".to_string());
                item.is_loading = false;
            })
            .await;

        assert!(updated);
        let items = store.snapshot().await;
        assert!(items[0].is_loading);
        assert_eq!(items[0].prediction, None);
        assert_eq!(items[1].prediction.as_deref(), Some("cat"));
        assert!(!items[1].is_loading);
    }

    #[tokio::test]
    async fn update_of_an_absent_id_is_a_silent_noop() {
        let store = ItemStore::new();
        store.append(batch(&["a.jpg"])).await;

        let updated = store
            .update_by_key("gone", |item| item.is_loading = false)
            .await;

        assert!(!updated);
        assert_eq!(store.len().await, 1);
        assert!(store.snapshot().await[0].is_loading);
    }

    #[tokio::test]
    async fn remove_by_key_keeps_the_rest_in_order() {
        let store = ItemStore::new();
        store.append(batch(&["a.jpg", "b.jpg", "c.jpg"])).await;
        let middle = store.snapshot().await[1].id.clone();

        assert!(store.remove_by_key(&middle).await);
        assert!(!store.remove_by_key(&middle).await);

        let images: Vec<String> = store
            .snapshot()
            .await
            .into_iter()
            .map(|item| item.image)
            .collect();
        assert_eq!(images, ["a.jpg", "c.jpg"]);
    }

    #[tokio::test]
    async fn clear_empties_the_collection() {
        let store = ItemStore::new();
        store.append(batch(&["a.jpg", "b.jpg"])).await;
        store.clear().await;
        assert!(store.is_empty().await);
    }
}
