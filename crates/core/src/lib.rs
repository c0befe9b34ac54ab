//! Core budgeting logic for Orcamento.
//!
//! This crate contains pure budgeting logic with ZERO web dependencies.
//! All domain types, the averaging engine, and document rendering live here.
//!
//! # Modules
//!
//! - `field` - The three budget figures (time, complexity, cost)
//! - `ledger` - Draft item and append-only item ledger
//! - `summary` - Averaged summary and override inference
//! - `session` - Per-user session state and the in-memory session store
//! - `publish` - Summary document export and share links

pub mod field;
pub mod ledger;
pub mod publish;
pub mod session;
pub mod summary;

pub use field::BudgetField;
