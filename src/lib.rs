//! Client-side orchestration for a remote image classification service.
//!
//! Submits batches of image files, runs one asynchronous encode-and-predict
//! pipeline per file, and reconciles every outcome into an ordered,
//! id-keyed [`ItemStore`] that a presentation layer can render after each
//! change. Items move from a loading placeholder to exactly one terminal
//! state (label or error) independently of their siblings.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::ClientConfig;
pub use error::{ClassifyError, Result};
pub use models::item_types::ImageItem;
pub use services::classifier::{Classify, RemoteClassifier};
pub use services::item_store::ItemStore;
pub use services::upload_service::Uploader;
