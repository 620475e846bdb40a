//! In-memory store

use std::collections::HashMap;

use async_trait::async_trait;
use lu_core::errors::DomainResult;
use lu_core::services::KeyValueStore;
use tokio::sync::RwLock;

/// Process-local store, lost on exit
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn remove(&self, key: &str) -> Option<String> {
        self.values.write().await.remove(key)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn save(&self, key: &str, value: &str) -> DomainResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn load(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }
}
