//! Invite service: persist the invited contacts and continue to OTP

use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use lu_shared::config::StorageConfig;
use lu_shared::routes;

use crate::domain::entities::Contact;
use crate::errors::{DomainError, DomainResult};
use crate::services::navigation::Navigator;

use super::traits::KeyValueStore;

/// Persists invited contacts and hands off to the invite OTP screen
pub struct InviteService<S: KeyValueStore, R: Navigator> {
    store: Arc<S>,
    navigator: Rc<R>,
    key: String,
    route: String,
}

impl<S: KeyValueStore, R: Navigator> InviteService<S, R> {
    /// Create a service storing under the configured key and continuing to
    /// the mobile invite OTP screen
    pub fn new(store: Arc<S>, navigator: Rc<R>, storage: &StorageConfig) -> Self {
        Self {
            store,
            navigator,
            key: storage.invited_contacts_key.clone(),
            route: routes::INVITE_MOBILE_OTP.to_string(),
        }
    }

    /// Continue to a different OTP route (e.g. the email invite screen)
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Invite the selected contacts
    ///
    /// The selection is merged into the stored list (first occurrence of an
    /// id wins). If the stored list cannot be read, nothing is saved. A
    /// storage failure is logged and does not stop navigation.
    pub async fn invite(&self, selected: &[Contact]) {
        match self.persist(selected).await {
            Ok(total) => info!(
                event = "contacts_invited",
                selected = selected.len(),
                total,
                "Invited contacts saved"
            ),
            Err(e) => error!(
                event = "contacts_invite_save_failed",
                selected = selected.len(),
                error = %e,
                "Failed to save invited contacts"
            ),
        }

        self.navigator.navigate(&self.route, None);
    }

    /// Contacts invited so far
    ///
    /// Missing or unreadable data reads as an empty list.
    pub async fn invited_contacts(&self) -> Vec<Contact> {
        match self.load().await {
            Ok(contacts) => contacts,
            Err(e) => {
                warn!(error = %e, "Could not read invited contacts");
                Vec::new()
            }
        }
    }

    async fn persist(&self, selected: &[Contact]) -> DomainResult<usize> {
        // A failed read must not overwrite the stored list
        let existing = match self.load().await {
            Err(DomainError::Serialization(e)) => {
                warn!(error = %e, "Replacing unreadable invited contacts");
                Vec::new()
            }
            result => result?,
        };
        let merged = merge_contacts(existing, selected);
        let json = serde_json::to_string(&merged)?;
        self.store.save(&self.key, &json).await?;
        Ok(merged.len())
    }

    async fn load(&self) -> DomainResult<Vec<Contact>> {
        let Some(json) = self.store.load(&self.key).await? else {
            debug!(key = %self.key, "No invited contacts stored yet");
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&json)?)
    }
}

/// Append `selected` to `existing`, skipping ids already present
fn merge_contacts(mut existing: Vec<Contact>, selected: &[Contact]) -> Vec<Contact> {
    for contact in selected {
        if !existing.iter().any(|c| c.id == contact.id) {
            existing.push(contact.clone());
        }
    }
    existing
}
