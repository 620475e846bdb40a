//! Mock collaborators for invite tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{DomainError, DomainResult};
use crate::services::invite::KeyValueStore;
use crate::services::navigation::{NavParams, Navigator};

/// In-memory store with switchable failures
#[derive(Default)]
pub struct MockStore {
    pub values: Mutex<HashMap<String, String>>,
    pub fail_saves: bool,
    pub fail_loads: bool,
}

impl MockStore {
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            fail_loads: true,
            ..Self::default()
        }
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MockStore {
    async fn save(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.fail_saves {
            return Err(DomainError::Storage {
                message: "disk full".to_string(),
            });
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn load(&self, key: &str) -> DomainResult<Option<String>> {
        if self.fail_loads {
            return Err(DomainError::Storage {
                message: "storage unavailable".to_string(),
            });
        }
        Ok(self.get(key))
    }
}

#[derive(Default)]
pub struct MockNavigator {
    pub calls: RefCell<Vec<(String, Option<NavParams>)>>,
}

impl MockNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(r, _)| r.clone()).collect()
    }
}

impl Navigator for MockNavigator {
    fn navigate(&self, route: &str, params: Option<&NavParams>) {
        self.calls
            .borrow_mut()
            .push((route.to_string(), params.cloned()));
    }
}
