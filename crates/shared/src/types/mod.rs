//! Common types used across the application.

pub mod id;
pub mod number;

pub use id::SessionId;
pub use number::{NumberError, parse_number};
