//! Capability contract for crate persistence.

use async_trait::async_trait;

use crate::models::crates::{Crate, CrateFeed, CrateSubmission, CrateTrack, SubmissionStatus};

use super::RepoResult;

/// CRUD, membership, and submission persistence for crates.
///
/// Pure storage: no authorization or input policy lives here. Lookup
/// methods report a missing row as `Ok(None)`, not an error, so the
/// service layer decides what absence means.
#[async_trait]
pub trait CrateRepository: Send + Sync {
    /// Whether the track is already a member of the crate.
    async fn check_track_exists(&self, crate_id: &str, track_id: &str) -> RepoResult<bool>;

    async fn get_by_id(&self, crate_id: &str) -> RepoResult<Option<Crate>>;

    /// All crates containing the given external track.
    async fn get_by_track_id(&self, track_id: &str) -> RepoResult<Vec<Crate>>;

    /// A server-curated feed; the ranking is this repository's concern.
    async fn get_crates(&self, feed: CrateFeed) -> RepoResult<Vec<Crate>>;

    /// All crates owned by the user, public and private.
    async fn get_by_user_id(&self, user_id: &str) -> RepoResult<Vec<Crate>>;

    async fn get_by_submission_id(
        &self,
        submission_id: &str,
    ) -> RepoResult<Option<CrateSubmission>>;

    /// All submissions addressed to the crate, any status.
    async fn get_submissions(&self, crate_id: &str) -> RepoResult<Vec<CrateSubmission>>;

    /// Stamp a terminal status onto a submission and refresh its
    /// `updated_at`.
    async fn resolve_submission(
        &self,
        submission_id: &str,
        status: SubmissionStatus,
    ) -> RepoResult<()>;

    async fn create(&self, crate_row: Crate) -> RepoResult<Crate>;

    /// Persist an already-merged crate row keyed by its id.
    async fn update(&self, crate_row: Crate) -> RepoResult<Crate>;

    /// Delete the crate; cascading removal of its tracks and submissions
    /// is a storage concern.
    async fn delete(&self, crate_id: &str) -> RepoResult<()>;

    /// Append the track at the end of the crate's ordering.
    async fn add_track(&self, crate_id: &str, track_id: &str) -> RepoResult<()>;

    /// Remove the track and close the gap in the ordering.
    async fn remove_track(&self, crate_id: &str, track_id: &str) -> RepoResult<()>;

    /// Rewrite the crate's ordering to match `new_order` (track ids,
    /// first = position 0). The caller has already verified this is a
    /// permutation of the current membership.
    async fn reorder_tracks(&self, crate_id: &str, new_order: &[String]) -> RepoResult<()>;

    /// Tracks in the crate, `order` ascending.
    async fn get_tracks(&self, crate_id: &str) -> RepoResult<Vec<CrateTrack>>;

    /// Record a pending submission. The recipient is derived from the
    /// crate's owner; an unknown crate is a repository error.
    async fn submit_track(
        &self,
        crate_id: &str,
        track_id: &str,
        from_id: &str,
        message: Option<&str>,
    ) -> RepoResult<CrateSubmission>;
}
