//! Storage configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Key under which the invited-contact list is persisted
pub const INVITED_CONTACTS_KEY: &str = "invitedContacts";

/// Key/value storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Backing file for the JSON store; `None` keeps everything in memory
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Key for the invited-contact list
    #[serde(default = "default_invited_contacts_key")]
    pub invited_contacts_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            invited_contacts_key: default_invited_contacts_key(),
        }
    }
}

impl StorageConfig {
    /// Create a file-backed storage configuration
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.invited_contacts_key.trim().is_empty() {
            return Err("storage: invited_contacts_key must not be empty".to_string());
        }
        Ok(())
    }
}

fn default_invited_contacts_key() -> String {
    INVITED_CONTACTS_KEY.to_string()
}
