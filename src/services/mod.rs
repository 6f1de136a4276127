pub mod classifier;
pub mod encode_service;
pub mod fs_service;
pub mod item_store;
pub mod upload_service;
