//! JSON file store
//!
//! The whole store is one JSON object `{ key: value }` rewritten on every
//! save. Writes go to a sibling temp file that is then renamed over the
//! original.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lu_core::errors::DomainResult;
use lu_core::services::KeyValueStore;
use tokio::sync::Mutex;
use tracing::debug;

use crate::InfrastructureError;

type Document = BTreeMap<String, String>;

/// File-backed store persisting across restarts
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Document, InfrastructureError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(Document::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, document: &Document) -> Result<(), InfrastructureError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(document)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn save(&self, key: &str, value: &str) -> DomainResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document).await?;
        debug!(path = %self.path.display(), key, "Saved value");
        Ok(())
    }

    async fn load(&self, key: &str) -> DomainResult<Option<String>> {
        let _guard = self.lock.lock().await;
        let document = self.read_document().await?;
        Ok(document.get(key).cloned())
    }
}
