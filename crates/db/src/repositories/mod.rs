//! Repository layer.
//!
//! Each repository is an object-safe capability trait the services consume
//! through `Arc<dyn …>`. Implementations own all storage detail; failures
//! cross the boundary as opaque [`RepoError`] strings that callers surface
//! verbatim.

pub mod crate_repo;
pub mod memory;
pub mod review_repo;

pub use crate_repo::CrateRepository;
pub use memory::{MemoryCrateRepo, MemoryReviewRepo};
pub use review_repo::{LikeOutcome, ReviewRepository, UnlikeOutcome};

/// Opaque failure reported by a persistence collaborator.
///
/// The message is the user-visible cause; services pass it through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RepoError(pub String);

impl RepoError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Outcome of every repository call.
pub type RepoResult<T> = Result<T, RepoError>;
