//! Averaged budget summary and override inference.

pub mod engine;
pub mod error;
pub mod types;


pub use engine::SummaryEngine;
pub use error::SummaryError;
pub use types::{BudgetSummary, SummaryOrigin};
