//! Picker selection state

use crate::domain::entities::Contact;

/// Ids of the contacts ticked in the picker, in the order they were ticked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSelection {
    ids: Vec<String>,
}

impl ContactSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick or untick a contact; returns whether it is now selected
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected contacts looked up in `contacts`, in selection order
    ///
    /// Ids no longer present in `contacts` are skipped.
    pub fn selected<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        self.ids
            .iter()
            .filter_map(|id| contacts.iter().find(|contact| &contact.id == id))
            .collect()
    }
}
