//! Capability contract for review persistence.

use async_trait::async_trait;

use cratedigger_core::sorting::Sorting;

use crate::models::review::Review;

use super::RepoResult;

/// Result of a like attempt. A missing review is an in-band signal, not a
/// storage failure; the service maps it to its own not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The like was recorded.
    Applied,
    /// No review with that id exists.
    ReviewMissing,
}

/// Result of an unlike attempt. Unliking something never liked is not an
/// error at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlikeOutcome {
    /// An existing like was removed.
    Removed,
    /// There was no like to remove.
    NotLiked,
}

/// CRUD and like persistence for reviews, with paginated sorted queries.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: Review) -> RepoResult<Review>;

    async fn get_by_id(&self, review_id: &str) -> RepoResult<Option<Review>>;

    /// The user's review of the item, if any. Backs the
    /// one-review-per-user-per-item check.
    async fn get_by_user_and_item(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> RepoResult<Option<Review>>;

    /// Apply a partial update. Sets `edited = true` and refreshes
    /// `updated_at`; returns `None` when the row no longer exists.
    async fn update(
        &self,
        review_id: &str,
        rating: Option<i32>,
        review_text: Option<&str>,
    ) -> RepoResult<Option<Review>>;

    /// Delete the review and any likes attached to it.
    async fn delete(&self, review_id: &str) -> RepoResult<()>;

    async fn has_user_liked(&self, review_id: &str, user_id: &str) -> RepoResult<bool>;

    async fn like(&self, review_id: &str, user_id: &str) -> RepoResult<LikeOutcome>;

    async fn unlike(&self, review_id: &str, user_id: &str) -> RepoResult<UnlikeOutcome>;

    /// Reviews whose denormalized artist reference matches, any type.
    async fn get_artist_reviews(&self, artist_id: &str, sort: Sorting) -> RepoResult<Vec<Review>>;

    /// Album reviews for the item.
    async fn get_album_reviews(&self, album_id: &str, sort: Sorting) -> RepoResult<Vec<Review>>;

    /// Track reviews for the item.
    async fn get_track_reviews(&self, track_id: &str, sort: Sorting) -> RepoResult<Vec<Review>>;
}
