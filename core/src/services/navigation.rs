//! Navigation collaborator
//!
//! The core never sees the routing table. It only asks the host to move to a
//! named route, optionally with a small bag of string parameters.

use std::collections::BTreeMap;

/// Parameters forwarded with a navigation request (e.g. `{ "email": ... }`)
pub type NavParams = BTreeMap<String, String>;

/// Host-provided navigation trigger
pub trait Navigator {
    fn navigate(&self, route: &str, params: Option<&NavParams>);
}

/// Build a parameter bag holding a single entry
pub fn single_param(key: impl Into<String>, value: impl Into<String>) -> NavParams {
    let mut params = NavParams::new();
    params.insert(key.into(), value.into());
    params
}
