//! Contact search

use lu_shared::utils::phone::digits_only;

use crate::domain::entities::Contact;

/// Contacts matching a search query, in their original order
///
/// A blank query returns every contact. Otherwise a contact matches when its
/// name contains the query (case-insensitive), or when the query has digits
/// and the contact's phone digits contain them.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let query = query.trim();
    if query.is_empty() {
        return contacts.iter().collect();
    }

    let needle = query.to_lowercase();
    let query_digits = digits_only(query);

    contacts
        .iter()
        .filter(|contact| {
            contact.name.to_lowercase().contains(&needle)
                || (!query_digits.is_empty()
                    && digits_only(&contact.phone_number).contains(&query_digits))
        })
        .collect()
}
