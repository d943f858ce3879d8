//! Business-rule services for crates and reviews.
//!
//! Each service wraps one repository capability trait injected at
//! construction and returns uniform [`CoreResult`] outcomes: validation
//! first, one repository read before any authorization decision, and
//! repository failures surfaced verbatim. The two services never talk to
//! each other.
//!
//! [`CoreResult`]: cratedigger_core::error::CoreResult

pub mod crate_service;
pub mod review_service;

pub use crate_service::CrateService;
pub use review_service::ReviewService;

use cratedigger_core::error::CoreError;
use cratedigger_db::repositories::RepoError;

/// Surface a repository failure as-is; the collaborator's message is the
/// user-visible cause.
pub(crate) fn repo_err(err: RepoError) -> CoreError {
    CoreError::Repository(err.to_string())
}
