//! Persistence layer: entity models, repository capability traits, and the
//! in-memory backend.
//!
//! Services depend on the traits in [`repositories`] only; the storage
//! engine behind them is a swappable collaborator. The in-memory backend
//! exists for tests and local development and honors the same contracts a
//! server-backed implementation must.

pub mod models;
pub mod repositories;
