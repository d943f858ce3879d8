//! In-memory crate repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cratedigger_core::id::{generate_id, CRATE_TRACK_ID_PREFIX, SUBMISSION_ID_PREFIX};
use cratedigger_core::types::now;

use crate::models::crates::{Crate, CrateFeed, CrateSubmission, CrateTrack, SubmissionStatus};
use crate::repositories::crate_repo::CrateRepository;
use crate::repositories::{RepoError, RepoResult};

#[derive(Default)]
struct CrateState {
    crates: HashMap<String, Crate>,
    /// Tracks per crate, kept sorted by `order`.
    tracks: HashMap<String, Vec<CrateTrack>>,
    submissions: HashMap<String, CrateSubmission>,
}

/// Map-backed [`CrateRepository`].
#[derive(Default)]
pub struct MemoryCrateRepo {
    state: RwLock<CrateState>,
}

impl MemoryCrateRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rewrite `order` fields to be contiguous from zero, preserving the
/// vector's current sequence.
fn reindex(tracks: &mut [CrateTrack]) {
    for (i, track) in tracks.iter_mut().enumerate() {
        track.order = i as i32;
    }
}

#[async_trait]
impl CrateRepository for MemoryCrateRepo {
    async fn check_track_exists(&self, crate_id: &str, track_id: &str) -> RepoResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .tracks
            .get(crate_id)
            .is_some_and(|tracks| tracks.iter().any(|t| t.track_id == track_id)))
    }

    async fn get_by_id(&self, crate_id: &str) -> RepoResult<Option<Crate>> {
        let state = self.state.read().await;
        Ok(state.crates.get(crate_id).cloned())
    }

    async fn get_by_track_id(&self, track_id: &str) -> RepoResult<Vec<Crate>> {
        let state = self.state.read().await;
        let mut found: Vec<Crate> = state
            .tracks
            .iter()
            .filter(|(_, tracks)| tracks.iter().any(|t| t.track_id == track_id))
            .filter_map(|(crate_id, _)| state.crates.get(crate_id).cloned())
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }

    async fn get_crates(&self, feed: CrateFeed) -> RepoResult<Vec<Crate>> {
        let state = self.state.read().await;
        let mut crates: Vec<Crate> = state.crates.values().cloned().collect();
        match feed {
            // Newest first.
            CrateFeed::New => crates.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            // Most tracks first; creation date breaks ties.
            CrateFeed::Popular => {
                let count = |c: &Crate| state.tracks.get(&c.id).map_or(0, Vec::len);
                crates.sort_by(|a, b| {
                    count(b)
                        .cmp(&count(a))
                        .then_with(|| b.created_at.cmp(&a.created_at))
                });
            }
        }
        Ok(crates)
    }

    async fn get_by_user_id(&self, user_id: &str) -> RepoResult<Vec<Crate>> {
        let state = self.state.read().await;
        let mut crates: Vec<Crate> = state
            .crates
            .values()
            .filter(|c| c.creator_id == user_id)
            .cloned()
            .collect();
        crates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(crates)
    }

    async fn get_by_submission_id(
        &self,
        submission_id: &str,
    ) -> RepoResult<Option<CrateSubmission>> {
        let state = self.state.read().await;
        Ok(state.submissions.get(submission_id).cloned())
    }

    async fn get_submissions(&self, crate_id: &str) -> RepoResult<Vec<CrateSubmission>> {
        let state = self.state.read().await;
        let mut submissions: Vec<CrateSubmission> = state
            .submissions
            .values()
            .filter(|s| s.crate_id == crate_id)
            .cloned()
            .collect();
        submissions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(submissions)
    }

    async fn resolve_submission(
        &self,
        submission_id: &str,
        status: SubmissionStatus,
    ) -> RepoResult<()> {
        let mut state = self.state.write().await;
        let submission = state
            .submissions
            .get_mut(submission_id)
            .ok_or_else(|| RepoError::new("Submission not found"))?;
        submission.status = status;
        submission.updated_at = now();
        Ok(())
    }

    async fn create(&self, crate_row: Crate) -> RepoResult<Crate> {
        let mut state = self.state.write().await;
        tracing::debug!(crate_id = %crate_row.id, "storing crate");
        state.tracks.entry(crate_row.id.clone()).or_default();
        state.crates.insert(crate_row.id.clone(), crate_row.clone());
        Ok(crate_row)
    }

    async fn update(&self, crate_row: Crate) -> RepoResult<Crate> {
        let mut state = self.state.write().await;
        if !state.crates.contains_key(&crate_row.id) {
            return Err(RepoError::new("Crate not found"));
        }
        state.crates.insert(crate_row.id.clone(), crate_row.clone());
        Ok(crate_row)
    }

    async fn delete(&self, crate_id: &str) -> RepoResult<()> {
        let mut state = self.state.write().await;
        state.crates.remove(crate_id);
        state.tracks.remove(crate_id);
        // Cascade: submissions addressed to the crate go with it.
        state.submissions.retain(|_, s| s.crate_id != crate_id);
        Ok(())
    }

    async fn add_track(&self, crate_id: &str, track_id: &str) -> RepoResult<()> {
        let mut state = self.state.write().await;
        if !state.crates.contains_key(crate_id) {
            return Err(RepoError::new("Crate not found"));
        }
        let tracks = state.tracks.entry(crate_id.to_string()).or_default();
        let order = tracks.len() as i32;
        tracks.push(CrateTrack {
            id: generate_id(CRATE_TRACK_ID_PREFIX),
            crate_id: crate_id.to_string(),
            track_id: track_id.to_string(),
            order,
        });
        Ok(())
    }

    async fn remove_track(&self, crate_id: &str, track_id: &str) -> RepoResult<()> {
        let mut state = self.state.write().await;
        let tracks = state
            .tracks
            .get_mut(crate_id)
            .ok_or_else(|| RepoError::new("Crate not found"))?;
        let before = tracks.len();
        tracks.retain(|t| t.track_id != track_id);
        if tracks.len() == before {
            return Err(RepoError::new("Track not found in crate"));
        }
        reindex(tracks);
        Ok(())
    }

    async fn reorder_tracks(&self, crate_id: &str, new_order: &[String]) -> RepoResult<()> {
        let mut state = self.state.write().await;
        let tracks = state
            .tracks
            .get_mut(crate_id)
            .ok_or_else(|| RepoError::new("Crate not found"))?;
        for track in tracks.iter_mut() {
            let position = new_order
                .iter()
                .position(|id| *id == track.track_id)
                .ok_or_else(|| RepoError::new("Track not found in crate"))?;
            track.order = position as i32;
        }
        tracks.sort_by_key(|t| t.order);
        Ok(())
    }

    async fn get_tracks(&self, crate_id: &str) -> RepoResult<Vec<CrateTrack>> {
        let state = self.state.read().await;
        let mut tracks = state.tracks.get(crate_id).cloned().unwrap_or_default();
        tracks.sort_by_key(|t| t.order);
        Ok(tracks)
    }

    async fn submit_track(
        &self,
        crate_id: &str,
        track_id: &str,
        from_id: &str,
        message: Option<&str>,
    ) -> RepoResult<CrateSubmission> {
        let mut state = self.state.write().await;
        let to_id = state
            .crates
            .get(crate_id)
            .map(|c| c.creator_id.clone())
            .ok_or_else(|| RepoError::new("Crate not found"))?;
        let timestamp = now();
        let submission = CrateSubmission {
            id: generate_id(SUBMISSION_ID_PREFIX),
            from_id: from_id.to_string(),
            to_id,
            track_id: track_id.to_string(),
            crate_id: crate_id.to_string(),
            message: message.map(str::to_string),
            status: SubmissionStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        };
        state
            .submissions
            .insert(submission.id.clone(), submission.clone());
        Ok(submission)
    }
}
