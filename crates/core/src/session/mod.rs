//! Per-user session state and the in-memory session store.
//!
//! A session owns the draft item, the ledger, the current summary, and the
//! edit-mode flag. Every transition goes through a method on `Session`; the
//! store hands out exclusive access to one session at a time.

pub mod error;
pub mod state;
pub mod store;

pub use error::SessionError;
pub use state::{ComputeOutcome, Session};
pub use store::SessionStore;
