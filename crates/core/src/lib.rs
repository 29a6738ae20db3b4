//! Shared domain types, errors, and validation for the posts service.

pub mod error;
pub mod posts;
pub mod types;
