//! Invoicing domain module.
//!
//! Immutable invoice snapshots of a finished selection, and the text forms
//! handed to the print and share collaborators.

pub mod delivery;
pub mod invoice;

pub use delivery::{ShareSettings, is_valid_share_number, receipt_text, share_message, share_url};
pub use invoice::{Invoice, generate_invoice};
