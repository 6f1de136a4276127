use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

/// One image's end-to-end submission-and-result record.
#[derive(Debug, Serialize, Clone)]
pub struct ImageItem {
    /// Unique id minted at placeholder-creation time; the only key used to
    /// reconcile and remove this item. Never reused.
    pub id: String,
    /// Display source: the local path while the upload is in flight,
    /// replaced by a `data:` URI once the file has been encoded.
    pub image: String,
    pub prediction: Option<String>,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl ImageItem {
    /// Build a loading placeholder for a newly selected file.
    pub fn placeholder(path: &Path) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image: path.display().to_string(),
            prediction: None,
            error: None,
            is_loading: true,
        }
    }

    /// True once the item carries a prediction or an error.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading && (self.prediction.is_some() || self.error.is_some())
    }
}
