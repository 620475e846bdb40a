//! Address-book contact as picked for an invite.

use serde::{Deserialize, Serialize};

/// A contact from the device address book
///
/// Persisted as `{ "id", "name", "phoneNumber" }` in the invited-contact list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone_number: String,
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}
