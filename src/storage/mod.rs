mod error;
mod file_store;
mod service;
mod store;

pub use error::StorageError;
pub use file_store::FileStore;
pub use service::{StorageService, DEFAULT_PREFIX};
pub use store::{KeyValueStore, MemoryStore};
