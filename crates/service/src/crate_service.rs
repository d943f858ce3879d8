//! Crate lifecycle, visibility, track membership, and the submission
//! workflow.
//!
//! Every operation validates its input before touching the repository,
//! re-checks ownership on each call rather than caching it, and treats
//! fetch-then-mutate pairs as best-effort: the repository serializes each
//! single write, but nothing holds a lock between the ownership read and
//! the mutation that follows it.

use std::collections::HashSet;
use std::sync::Arc;

use cratedigger_core::crates::{
    validate_crate_id, validate_crate_name, validate_submission_id, validate_track_id,
    validate_user_id,
};
use cratedigger_core::error::{CoreError, CoreResult};
use cratedigger_core::id::{generate_id, CRATE_ID_PREFIX};
use cratedigger_core::types::now;
use cratedigger_db::models::crates::{
    Crate, CrateFeed, CrateSubmission, CrateTrack, CreateCrate, SubmissionStatus, UpdateCrate,
};
use cratedigger_db::repositories::CrateRepository;

use crate::repo_err;

/// Business rules for crates, backed by an injected repository.
#[derive(Clone)]
pub struct CrateService {
    repo: Arc<dyn CrateRepository>,
}

impl CrateService {
    pub fn new(repo: Arc<dyn CrateRepository>) -> Self {
        Self { repo }
    }

    // -----------------------------------------------------------------
    // Fetchers
    // -----------------------------------------------------------------

    /// Fetch one crate by id. No ownership filter: any caller may read by
    /// id; visibility is enforced at list level.
    pub async fn get_crate_by_id(&self, crate_id: &str) -> CoreResult<Crate> {
        validate_crate_id(crate_id)?;
        self.repo
            .get_by_id(crate_id)
            .await
            .map_err(repo_err)?
            .ok_or_else(|| CoreError::NotFound("Crate not found".to_string()))
    }

    /// All crates that contain the given external track.
    pub async fn get_crates_including_track(&self, track_id: &str) -> CoreResult<Vec<Crate>> {
        validate_track_id(track_id)?;
        self.repo.get_by_track_id(track_id).await.map_err(repo_err)
    }

    /// The popular feed, as the repository defines it.
    pub async fn get_popular_crates(&self) -> CoreResult<Vec<Crate>> {
        self.repo
            .get_crates(CrateFeed::Popular)
            .await
            .map_err(repo_err)
    }

    /// The new-crates feed, as the repository defines it.
    pub async fn get_new_crates(&self) -> CoreResult<Vec<Crate>> {
        self.repo.get_crates(CrateFeed::New).await.map_err(repo_err)
    }

    /// A user's crates. Viewing your own profile returns everything;
    /// viewing someone else's returns only their public crates.
    pub async fn get_user_crates(
        &self,
        user_id: &str,
        target_user_id: Option<&str>,
    ) -> CoreResult<Vec<Crate>> {
        validate_user_id(user_id)?;
        match target_user_id {
            None => self.repo.get_by_user_id(user_id).await.map_err(repo_err),
            Some(target) if target == user_id => {
                self.repo.get_by_user_id(user_id).await.map_err(repo_err)
            }
            Some(target) => {
                validate_user_id(target)?;
                let crates = self.repo.get_by_user_id(target).await.map_err(repo_err)?;
                Ok(crates.into_iter().filter(|c| c.is_public).collect())
            }
        }
    }

    /// Submissions addressed to a crate, owner only. Ownership is
    /// re-checked on every call, never cached.
    pub async fn get_crate_submissions(
        &self,
        user_id: &str,
        crate_id: &str,
    ) -> CoreResult<Vec<CrateSubmission>> {
        validate_user_id(user_id)?;
        validate_crate_id(crate_id)?;
        let crate_row = self.get_crate_by_id(crate_id).await?;
        if crate_row.creator_id != user_id {
            tracing::warn!(
                user_id = %user_id,
                crate_id = %crate_id,
                "submission listing denied"
            );
            return Err(CoreError::Unauthorized(
                "User does not own the crate".to_string(),
            ));
        }
        self.repo.get_submissions(crate_id).await.map_err(repo_err)
    }

    // -----------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------

    /// Create a crate owned by `user_id`. Public unless the caller says
    /// otherwise; tags default to empty.
    pub async fn create_crate(&self, input: CreateCrate, user_id: &str) -> CoreResult<Crate> {
        validate_user_id(user_id)?;
        validate_crate_name(&input.name)?;
        let timestamp = now();
        let crate_row = Crate {
            id: generate_id(CRATE_ID_PREFIX),
            name: input.name,
            description: input.description.unwrap_or_default(),
            cover_image: input.cover_image,
            tags: input.tags.unwrap_or_default(),
            creator_id: user_id.to_string(),
            is_public: input.is_public.unwrap_or(true),
            created_at: timestamp,
            updated_at: timestamp,
        };
        let created = self.repo.create(crate_row).await.map_err(repo_err)?;
        tracing::info!(crate_id = %created.id, user_id = %user_id, "Crate created");
        Ok(created)
    }

    /// Apply a partial update. Absent fields keep their previous value;
    /// `creator_id`, `created_at`, and `id` never change.
    pub async fn update_crate(
        &self,
        crate_id: &str,
        updates: UpdateCrate,
        user_id: &str,
    ) -> CoreResult<Crate> {
        validate_crate_id(crate_id)?;
        validate_user_id(user_id)?;
        if updates.is_empty() {
            return Err(CoreError::InvalidInput(
                "No update data provided".to_string(),
            ));
        }
        if let Some(ref name) = updates.name {
            validate_crate_name(name)?;
        }

        let mut crate_row = self.get_crate_by_id(crate_id).await?;
        if crate_row.creator_id != user_id {
            return Err(CoreError::Unauthorized(
                "You do not own this crate".to_string(),
            ));
        }

        if let Some(name) = updates.name {
            crate_row.name = name;
        }
        if let Some(description) = updates.description {
            crate_row.description = description;
        }
        if let Some(cover_image) = updates.cover_image {
            crate_row.cover_image = Some(cover_image);
        }
        if let Some(tags) = updates.tags {
            crate_row.tags = tags;
        }
        if let Some(is_public) = updates.is_public {
            crate_row.is_public = is_public;
        }
        crate_row.updated_at = now();

        let updated = self.repo.update(crate_row).await.map_err(repo_err)?;
        tracing::info!(crate_id = %updated.id, user_id = %user_id, "Crate updated");
        Ok(updated)
    }

    /// Delete a crate the caller owns. Cascading removal of tracks and
    /// submissions is the storage collaborator's concern.
    pub async fn delete_crate(&self, crate_id: &str, user_id: &str) -> CoreResult<()> {
        validate_crate_id(crate_id)?;
        validate_user_id(user_id)?;
        let crate_row = self.get_crate_by_id(crate_id).await?;
        if crate_row.creator_id != user_id {
            return Err(CoreError::Unauthorized(
                "You do not own this crate".to_string(),
            ));
        }
        self.repo.delete(crate_id).await.map_err(repo_err)?;
        tracing::info!(crate_id = %crate_id, user_id = %user_id, "Crate deleted");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Track membership
    // -----------------------------------------------------------------

    pub async fn add_track_to_crate(&self, crate_id: &str, track_id: &str) -> CoreResult<()> {
        validate_crate_id(crate_id)?;
        validate_track_id(track_id)?;
        self.get_crate_by_id(crate_id).await?;
        let exists = self
            .repo
            .check_track_exists(crate_id, track_id)
            .await
            .map_err(repo_err)?;
        if exists {
            return Err(CoreError::Conflict(
                "Track already exists in crate".to_string(),
            ));
        }
        self.repo
            .add_track(crate_id, track_id)
            .await
            .map_err(repo_err)
    }

    pub async fn remove_track_from_crate(&self, crate_id: &str, track_id: &str) -> CoreResult<()> {
        validate_crate_id(crate_id)?;
        validate_track_id(track_id)?;
        self.get_crate_by_id(crate_id).await?;
        let exists = self
            .repo
            .check_track_exists(crate_id, track_id)
            .await
            .map_err(repo_err)?;
        if !exists {
            return Err(CoreError::NotFound(
                "Track not found in crate".to_string(),
            ));
        }
        self.repo
            .remove_track(crate_id, track_id)
            .await
            .map_err(repo_err)
    }

    /// Rewrite a crate's track ordering. `new_order` must be a
    /// permutation of the crate's current track ids.
    pub async fn reorder_tracks(&self, crate_id: &str, new_order: &[String]) -> CoreResult<()> {
        validate_crate_id(crate_id)?;
        self.get_crate_by_id(crate_id).await?;
        let current = self.repo.get_tracks(crate_id).await.map_err(repo_err)?;

        if new_order.len() != current.len() {
            return Err(CoreError::InvalidInput(format!(
                "New order must contain exactly {} tracks",
                current.len()
            )));
        }
        let current_ids: HashSet<&str> = current.iter().map(|t| t.track_id.as_str()).collect();
        let mut seen = HashSet::new();
        for track_id in new_order {
            if !current_ids.contains(track_id.as_str()) {
                return Err(CoreError::InvalidInput(format!(
                    "Track {track_id} is not in the crate"
                )));
            }
            if !seen.insert(track_id.as_str()) {
                return Err(CoreError::InvalidInput(format!(
                    "Track {track_id} appears more than once in the new order"
                )));
            }
        }
        // Equal length, all members, no duplicates: a permutation.

        self.repo
            .reorder_tracks(crate_id, new_order)
            .await
            .map_err(repo_err)
    }

    /// Tracks in the crate, position ascending.
    pub async fn get_tracks_in_crate(&self, crate_id: &str) -> CoreResult<Vec<CrateTrack>> {
        validate_crate_id(crate_id)?;
        self.repo.get_tracks(crate_id).await.map_err(repo_err)
    }

    // -----------------------------------------------------------------
    // Submissions
    // -----------------------------------------------------------------

    /// Propose a track for another user's crate. The submission starts
    /// pending; domain errors (unknown crate, unknown user, bad track)
    /// surface verbatim from the repository.
    pub async fn submit_track_to_crate(
        &self,
        from_id: &str,
        to_id: &str,
        track_id: &str,
        crate_id: &str,
        message: Option<&str>,
    ) -> CoreResult<CrateSubmission> {
        validate_user_id(from_id)?;
        validate_user_id(to_id)?;
        validate_track_id(track_id)?;
        validate_crate_id(crate_id)?;
        let submission = self
            .repo
            .submit_track(crate_id, track_id, from_id, message)
            .await
            .map_err(repo_err)?;
        tracing::info!(
            submission_id = %submission.id,
            crate_id = %crate_id,
            from_id = %from_id,
            "Track submitted to crate"
        );
        Ok(submission)
    }

    /// Accept a pending submission: stamp it accepted, then add its track
    /// to the crate. The two steps are not atomic; if the add fails its
    /// error surfaces while the submission stays accepted.
    pub async fn accept_track_submission(&self, submission_id: &str) -> CoreResult<()> {
        let submission = self.resolve_submission(submission_id, SubmissionStatus::Accepted).await?;
        self.add_track_to_crate(&submission.crate_id, &submission.track_id)
            .await?;
        tracing::info!(submission_id = %submission_id, "Submission accepted");
        Ok(())
    }

    /// Reject a pending submission. No side effect beyond the status
    /// stamp.
    pub async fn reject_track_submission(&self, submission_id: &str) -> CoreResult<()> {
        self.resolve_submission(submission_id, SubmissionStatus::Rejected)
            .await?;
        tracing::info!(submission_id = %submission_id, "Submission rejected");
        Ok(())
    }

    /// Shared resolution path: a submission resolves exactly once.
    async fn resolve_submission(
        &self,
        submission_id: &str,
        status: SubmissionStatus,
    ) -> CoreResult<CrateSubmission> {
        validate_submission_id(submission_id)?;
        let submission = self
            .repo
            .get_by_submission_id(submission_id)
            .await
            .map_err(repo_err)?
            .ok_or_else(|| CoreError::NotFound("Submission not found".to_string()))?;
        match submission.status {
            SubmissionStatus::Accepted => {
                return Err(CoreError::Conflict(
                    "Submission already accepted".to_string(),
                ))
            }
            SubmissionStatus::Rejected => {
                return Err(CoreError::Conflict(
                    "Submission already rejected".to_string(),
                ))
            }
            SubmissionStatus::Pending => {}
        }
        self.repo
            .resolve_submission(submission_id, status)
            .await
            .map_err(repo_err)?;
        Ok(submission)
    }
}
