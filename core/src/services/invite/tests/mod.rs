//! Tests for the invite pipeline

#[cfg(test)]
mod mocks;

use crate::domain::entities::Contact;

pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("1", "Alice Martin", "+1 (555) 010-2000"),
        Contact::new("2", "Bob Stone", "555 010 3000"),
        Contact::new("3", "Carla Alvarez", "+44 7700 900123"),
    ]
}
