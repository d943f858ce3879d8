//! Shared leaf crate for the cratedigger service layer.
//!
//! Holds the error taxonomy, shared types, id generation, the sorting
//! value object, and pure validation helpers. Depends on nothing else in
//! the workspace so the db and service layers can both reference it.

pub mod crates;
pub mod error;
pub mod id;
pub mod review;
pub mod sorting;
pub mod types;
