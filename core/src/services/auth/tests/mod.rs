//! Tests for the authentication forms


use std::cell::RefCell;

use crate::services::navigation::{NavParams, Navigator};

#[derive(Default)]
pub struct MockNavigator {
    pub calls: RefCell<Vec<(String, Option<NavParams>)>>,
}

impl Navigator for MockNavigator {
    fn navigate(&self, route: &str, params: Option<&NavParams>) {
        self.calls
            .borrow_mut()
            .push((route.to_string(), params.cloned()));
    }
}
