//! Shared domain types and errors for the stockroom catalog service.

pub mod error;
pub mod types;
