//! Summary document export and share links.
//!
//! Both render the same three labeled lines built from a `BudgetSummary`.

pub mod document;
pub mod pdf;
pub mod share;

pub use document::SummaryDocument;
pub use pdf::render_pdf;
pub use share::ShareLinks;
