//! Key/value storage implementations
//!
//! Values are opaque JSON strings keyed by name, matching the
//! [`KeyValueStore`](lu_core::services::KeyValueStore) contract.

pub mod file;
pub mod memory;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use lu_core::errors::DomainResult;
use lu_core::services::KeyValueStore;
use lu_shared::StorageConfig;
use tracing::info;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

/// Store selected by configuration
pub enum Store {
    Memory(InMemoryStore),
    File(JsonFileStore),
}

impl Store {
    /// File-backed when a path is configured, in-memory otherwise
    pub fn from_config(config: &StorageConfig) -> Self {
        match &config.path {
            Some(path) => {
                info!(path = %path.display(), "Using JSON file storage");
                Store::File(JsonFileStore::new(path.clone()))
            }
            None => {
                info!("Using in-memory storage");
                Store::Memory(InMemoryStore::new())
            }
        }
    }
}

#[async_trait]
impl KeyValueStore for Store {
    async fn save(&self, key: &str, value: &str) -> DomainResult<()> {
        match self {
            Store::Memory(store) => store.save(key, value).await,
            Store::File(store) => store.save(key, value).await,
        }
    }

    async fn load(&self, key: &str) -> DomainResult<Option<String>> {
        match self {
            Store::Memory(store) => store.load(key).await,
            Store::File(store) => store.load(key).await,
        }
    }
}
