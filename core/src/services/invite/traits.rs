//! Storage abstraction for the invite pipeline

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Async key-value storage holding JSON documents
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    async fn save(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Read the value under `key`, `None` if never stored
    async fn load(&self, key: &str) -> DomainResult<Option<String>>;
}
