//! Shared test doubles for the service suites.
//!
//! `Recording*Repo` wraps the in-memory backend and logs every capability
//! call so tests can assert the repository was (or was not) touched.
//! `Failing*Repo` refuses every call with the same opaque message so
//! tests can assert verbatim passthrough.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use cratedigger_core::sorting::Sorting;
use cratedigger_db::models::crates::{
    Crate, CrateFeed, CrateSubmission, CrateTrack, SubmissionStatus,
};
use cratedigger_db::models::review::Review;
use cratedigger_db::repositories::{
    CrateRepository, LikeOutcome, MemoryCrateRepo, MemoryReviewRepo, RepoError, RepoResult,
    ReviewRepository, UnlikeOutcome,
};

/// The message every failing double reports.
pub const DB_ERROR: &str = "Database error";

// ---------------------------------------------------------------------------
// Recording crate repo
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingCrateRepo {
    pub inner: MemoryCrateRepo,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingCrateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl CrateRepository for RecordingCrateRepo {
    async fn check_track_exists(&self, crate_id: &str, track_id: &str) -> RepoResult<bool> {
        self.record("check_track_exists");
        self.inner.check_track_exists(crate_id, track_id).await
    }

    async fn get_by_id(&self, crate_id: &str) -> RepoResult<Option<Crate>> {
        self.record("get_by_id");
        self.inner.get_by_id(crate_id).await
    }

    async fn get_by_track_id(&self, track_id: &str) -> RepoResult<Vec<Crate>> {
        self.record("get_by_track_id");
        self.inner.get_by_track_id(track_id).await
    }

    async fn get_crates(&self, feed: CrateFeed) -> RepoResult<Vec<Crate>> {
        self.record("get_crates");
        self.inner.get_crates(feed).await
    }

    async fn get_by_user_id(&self, user_id: &str) -> RepoResult<Vec<Crate>> {
        self.record("get_by_user_id");
        self.inner.get_by_user_id(user_id).await
    }

    async fn get_by_submission_id(
        &self,
        submission_id: &str,
    ) -> RepoResult<Option<CrateSubmission>> {
        self.record("get_by_submission_id");
        self.inner.get_by_submission_id(submission_id).await
    }

    async fn get_submissions(&self, crate_id: &str) -> RepoResult<Vec<CrateSubmission>> {
        self.record("get_submissions");
        self.inner.get_submissions(crate_id).await
    }

    async fn resolve_submission(
        &self,
        submission_id: &str,
        status: SubmissionStatus,
    ) -> RepoResult<()> {
        self.record("resolve_submission");
        self.inner.resolve_submission(submission_id, status).await
    }

    async fn create(&self, crate_row: Crate) -> RepoResult<Crate> {
        self.record("create");
        self.inner.create(crate_row).await
    }

    async fn update(&self, crate_row: Crate) -> RepoResult<Crate> {
        self.record("update");
        self.inner.update(crate_row).await
    }

    async fn delete(&self, crate_id: &str) -> RepoResult<()> {
        self.record("delete");
        self.inner.delete(crate_id).await
    }

    async fn add_track(&self, crate_id: &str, track_id: &str) -> RepoResult<()> {
        self.record("add_track");
        self.inner.add_track(crate_id, track_id).await
    }

    async fn remove_track(&self, crate_id: &str, track_id: &str) -> RepoResult<()> {
        self.record("remove_track");
        self.inner.remove_track(crate_id, track_id).await
    }

    async fn reorder_tracks(&self, crate_id: &str, new_order: &[String]) -> RepoResult<()> {
        self.record("reorder_tracks");
        self.inner.reorder_tracks(crate_id, new_order).await
    }

    async fn get_tracks(&self, crate_id: &str) -> RepoResult<Vec<CrateTrack>> {
        self.record("get_tracks");
        self.inner.get_tracks(crate_id).await
    }

    async fn submit_track(
        &self,
        crate_id: &str,
        track_id: &str,
        from_id: &str,
        message: Option<&str>,
    ) -> RepoResult<CrateSubmission> {
        self.record("submit_track");
        self.inner
            .submit_track(crate_id, track_id, from_id, message)
            .await
    }
}

// ---------------------------------------------------------------------------
// Failing crate repo
// ---------------------------------------------------------------------------

pub struct FailingCrateRepo;

fn db_error<T>() -> RepoResult<T> {
    Err(RepoError::new(DB_ERROR))
}

#[async_trait]
impl CrateRepository for FailingCrateRepo {
    async fn check_track_exists(&self, _: &str, _: &str) -> RepoResult<bool> {
        db_error()
    }
    async fn get_by_id(&self, _: &str) -> RepoResult<Option<Crate>> {
        db_error()
    }
    async fn get_by_track_id(&self, _: &str) -> RepoResult<Vec<Crate>> {
        db_error()
    }
    async fn get_crates(&self, _: CrateFeed) -> RepoResult<Vec<Crate>> {
        db_error()
    }
    async fn get_by_user_id(&self, _: &str) -> RepoResult<Vec<Crate>> {
        db_error()
    }
    async fn get_by_submission_id(&self, _: &str) -> RepoResult<Option<CrateSubmission>> {
        db_error()
    }
    async fn get_submissions(&self, _: &str) -> RepoResult<Vec<CrateSubmission>> {
        db_error()
    }
    async fn resolve_submission(&self, _: &str, _: SubmissionStatus) -> RepoResult<()> {
        db_error()
    }
    async fn create(&self, _: Crate) -> RepoResult<Crate> {
        db_error()
    }
    async fn update(&self, _: Crate) -> RepoResult<Crate> {
        db_error()
    }
    async fn delete(&self, _: &str) -> RepoResult<()> {
        db_error()
    }
    async fn add_track(&self, _: &str, _: &str) -> RepoResult<()> {
        db_error()
    }
    async fn remove_track(&self, _: &str, _: &str) -> RepoResult<()> {
        db_error()
    }
    async fn reorder_tracks(&self, _: &str, _: &[String]) -> RepoResult<()> {
        db_error()
    }
    async fn get_tracks(&self, _: &str) -> RepoResult<Vec<CrateTrack>> {
        db_error()
    }
    async fn submit_track(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: Option<&str>,
    ) -> RepoResult<CrateSubmission> {
        db_error()
    }
}

// ---------------------------------------------------------------------------
// Recording review repo
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingReviewRepo {
    pub inner: MemoryReviewRepo,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingReviewRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }
}

#[async_trait]
impl ReviewRepository for RecordingReviewRepo {
    async fn create(&self, review: Review) -> RepoResult<Review> {
        self.record("create");
        self.inner.create(review).await
    }

    async fn get_by_id(&self, review_id: &str) -> RepoResult<Option<Review>> {
        self.record("get_by_id");
        self.inner.get_by_id(review_id).await
    }

    async fn get_by_user_and_item(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> RepoResult<Option<Review>> {
        self.record("get_by_user_and_item");
        self.inner.get_by_user_and_item(user_id, item_id).await
    }

    async fn update(
        &self,
        review_id: &str,
        rating: Option<i32>,
        review_text: Option<&str>,
    ) -> RepoResult<Option<Review>> {
        self.record("update");
        self.inner.update(review_id, rating, review_text).await
    }

    async fn delete(&self, review_id: &str) -> RepoResult<()> {
        self.record("delete");
        self.inner.delete(review_id).await
    }

    async fn has_user_liked(&self, review_id: &str, user_id: &str) -> RepoResult<bool> {
        self.record("has_user_liked");
        self.inner.has_user_liked(review_id, user_id).await
    }

    async fn like(&self, review_id: &str, user_id: &str) -> RepoResult<LikeOutcome> {
        self.record("like");
        self.inner.like(review_id, user_id).await
    }

    async fn unlike(&self, review_id: &str, user_id: &str) -> RepoResult<UnlikeOutcome> {
        self.record("unlike");
        self.inner.unlike(review_id, user_id).await
    }

    async fn get_artist_reviews(&self, artist_id: &str, sort: Sorting) -> RepoResult<Vec<Review>> {
        self.record("get_artist_reviews");
        self.inner.get_artist_reviews(artist_id, sort).await
    }

    async fn get_album_reviews(&self, album_id: &str, sort: Sorting) -> RepoResult<Vec<Review>> {
        self.record("get_album_reviews");
        self.inner.get_album_reviews(album_id, sort).await
    }

    async fn get_track_reviews(&self, track_id: &str, sort: Sorting) -> RepoResult<Vec<Review>> {
        self.record("get_track_reviews");
        self.inner.get_track_reviews(track_id, sort).await
    }
}

// ---------------------------------------------------------------------------
// Failing review repo
// ---------------------------------------------------------------------------

pub struct FailingReviewRepo;

#[async_trait]
impl ReviewRepository for FailingReviewRepo {
    async fn create(&self, _: Review) -> RepoResult<Review> {
        db_error()
    }
    async fn get_by_id(&self, _: &str) -> RepoResult<Option<Review>> {
        db_error()
    }
    async fn get_by_user_and_item(&self, _: &str, _: &str) -> RepoResult<Option<Review>> {
        db_error()
    }
    async fn update(&self, _: &str, _: Option<i32>, _: Option<&str>) -> RepoResult<Option<Review>> {
        db_error()
    }
    async fn delete(&self, _: &str) -> RepoResult<()> {
        db_error()
    }
    async fn has_user_liked(&self, _: &str, _: &str) -> RepoResult<bool> {
        db_error()
    }
    async fn like(&self, _: &str, _: &str) -> RepoResult<LikeOutcome> {
        db_error()
    }
    async fn unlike(&self, _: &str, _: &str) -> RepoResult<UnlikeOutcome> {
        db_error()
    }
    async fn get_artist_reviews(&self, _: &str, _: Sorting) -> RepoResult<Vec<Review>> {
        db_error()
    }
    async fn get_album_reviews(&self, _: &str, _: Sorting) -> RepoResult<Vec<Review>> {
        db_error()
    }
    async fn get_track_reviews(&self, _: &str, _: Sorting) -> RepoResult<Vec<Review>> {
        db_error()
    }
}
