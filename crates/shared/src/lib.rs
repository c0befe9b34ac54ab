//! Shared types, errors, and configuration for Orcamento.
//!
//! This crate provides common types used across all other crates:
//! - Explicit numeric parsing for form input
//! - Typed session IDs
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
