//! Draft item and append-only item ledger.
//!
//! A draft collects the four form fields. Adding it to the ledger copies it
//! into an immutable `LineItem` and the caller resets the draft. Items are
//! never edited, reordered, or removed.

pub mod book;
pub mod error;
pub mod item;

pub use book::Ledger;
pub use error::LedgerError;
pub use item::{DraftItem, LineItem};
