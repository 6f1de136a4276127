use crate::models::item_types::ImageItem;
use crate::services::classifier::Classify;
use crate::services::encode_service;
use crate::services::item_store::ItemStore;
use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Drives batches of selected files to terminal states in the item store.
///
/// Each submitted file gets its own encode-and-predict pipeline; pipelines
/// share nothing but the store, and each one writes only to its own item,
/// matched by id rather than by position.
pub struct Uploader<C> {
    store: ItemStore,
    classifier: Arc<C>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl<C: Classify> Uploader<C> {
    pub fn new(store: ItemStore, classifier: C) -> Self {
        Self {
            store,
            classifier: Arc::new(classifier),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Submit a batch of files.
    ///
    /// Appends one loading placeholder per file in a single store
    /// operation, then spawns an independent pipeline per file. Returns the
    /// new item ids in batch order; an empty batch changes nothing.
    pub async fn submit(&self, paths: Vec<PathBuf>) -> Vec<String> {
        if paths.is_empty() {
            return Vec::new();
        }

        let batch: Vec<ImageItem> = paths
            .iter()
            .map(|path| ImageItem::placeholder(path))
            .collect();
        let ids: Vec<String> = batch.iter().map(|item| item.id.clone()).collect();

        tracing::info!(count = batch.len(), "Submitting image batch");
        self.store.append(batch).await;

        let mut tasks = self.tasks.lock().await;
        for (id, path) in ids.iter().cloned().zip(paths) {
            let store = self.store.clone();
            let classifier = Arc::clone(&self.classifier);
            tasks.push(tokio::spawn(run_pipeline(store, classifier, id, path)));
        }

        ids
    }

    /// Wait until every in-flight pipeline has reconciled its result.
    pub async fn wait_idle(&self) {
        let tasks: Vec<_> = self.tasks.lock().await.drain(..).collect();
        join_all(tasks).await;
    }

    /// Remove one item. A pipeline still running for it keeps going and
    /// reconciles into a no-op.
    pub async fn remove(&self, id: &str) -> bool {
        self.store.remove_by_key(id).await
    }

    pub async fn clear(&self) {
        self.store.clear().await;
    }
}

/// One file's pipeline: encode, predict, reconcile by id.
///
/// Every failure mode ends in the item's terminal error state; nothing
/// escapes to abort sibling pipelines.
async fn run_pipeline<C: Classify>(store: ItemStore, classifier: Arc<C>, id: String, path: PathBuf) {
    tracing::debug!(%id, path = %path.display(), "Pipeline started");

    let outcome = match encode_service::encode_data_uri(&path).await {
        Ok(data_uri) => classifier
            .predict(&data_uri)
            .await
            .map(|label| (data_uri, label)),
        Err(e) => Err(e),
    };

    match outcome {
        Ok((data_uri, label)) => {
            tracing::info!(%id, %label, "Image classified");
            store
                .update_by_key(&id, |item| {
                    item.image = data_uri;
                    item.prediction = Some(label);
                    item.is_loading = false;
                })
                .await;
        }
        Err(e) => {
            tracing::warn!(%id, "Classification failed: {}", e);
            store
                .update_by_key(&id, |item| {
                    item.error = Some(e.to_string());
                    item.is_loading = false;
                })
                .await;
        }
    }
}
