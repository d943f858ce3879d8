//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `Serialize` entity structs matching the stored row shape
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod crates;
pub mod review;
