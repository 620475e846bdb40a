//! Navigation adapter that logs and records every route change

use std::cell::RefCell;

use lu_core::services::{NavParams, Navigator};
use tracing::info;

/// Records route history for hosts without a native router (CLI, tests)
#[derive(Debug, Default)]
pub struct LoggingNavigator {
    history: RefCell<Vec<(String, Option<NavParams>)>>,
}

impl LoggingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route names visited so far, oldest first
    pub fn routes(&self) -> Vec<String> {
        self.history.borrow().iter().map(|(route, _)| route.clone()).collect()
    }

    /// Most recent route and its parameters
    pub fn current(&self) -> Option<(String, Option<NavParams>)> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: &str, params: Option<&NavParams>) {
        let keys: Vec<&str> = params
            .map(|p| p.keys().map(String::as_str).collect())
            .unwrap_or_default();
        info!(route, params = ?keys, "Navigating");
        self.history
            .borrow_mut()
            .push((route.to_string(), params.cloned()));
    }
}
