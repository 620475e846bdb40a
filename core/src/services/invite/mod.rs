//! Contact invite module
//!
//! The address-book picker feeds this pipeline: filter the contact list,
//! toggle a selection, persist the invited set and continue to the invite
//! OTP screen.

mod filter;
mod selection;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use filter::filter_contacts;
pub use selection::ContactSelection;
pub use service::InviteService;
pub use traits::KeyValueStore;
