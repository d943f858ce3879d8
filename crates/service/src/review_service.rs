//! Review business rules: the one-review-per-user-per-item invariant,
//! rating and text validation, ownership on mutation, and like/unlike
//! idempotency.

use std::sync::Arc;

use cratedigger_core::error::{CoreError, CoreResult};
use cratedigger_core::id::{generate_id, REVIEW_ID_PREFIX};
use cratedigger_core::review::{
    validate_rating, validate_review_author, validate_review_id, validate_review_text,
};
use cratedigger_core::sorting::Sorting;
use cratedigger_core::types::now;
use cratedigger_db::models::review::{CreateReview, Review, UpdateReview};
use cratedigger_db::repositories::{LikeOutcome, ReviewRepository, UnlikeOutcome};

use crate::repo_err;

/// Business rules for reviews, backed by an injected repository.
#[derive(Clone)]
pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }

    /// Create a review. One review per `(user, item)`: a second attempt
    /// is a conflict no matter what the other fields say.
    pub async fn create_review(&self, input: CreateReview, user_id: &str) -> CoreResult<Review> {
        validate_review_author(user_id, &input.item_id)?;
        validate_rating(input.rating)?;
        validate_review_text(input.review_text.as_deref())?;

        let existing = self
            .repo
            .get_by_user_and_item(user_id, &input.item_id)
            .await
            .map_err(repo_err)?;
        if existing.is_some() {
            return Err(CoreError::Conflict(
                "User has already reviewed this item".to_string(),
            ));
        }

        let review_text = input
            .review_text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let timestamp = now();
        let review = Review {
            id: generate_id(REVIEW_ID_PREFIX),
            user_id: user_id.to_string(),
            item_id: input.item_id,
            artist_id: input.artist_id,
            rating: input.rating,
            review_text,
            review_type: input.review_type,
            edited: false,
            created_at: timestamp,
            updated_at: timestamp,
        };
        let created = self.repo.create(review).await.map_err(repo_err)?;
        tracing::info!(review_id = %created.id, user_id = %user_id, "Review created");
        Ok(created)
    }

    pub async fn get_review_by_id(&self, review_id: &str) -> CoreResult<Review> {
        validate_review_id(review_id)?;
        self.repo
            .get_by_id(review_id)
            .await
            .map_err(repo_err)?
            .ok_or_else(|| CoreError::NotFound("Review not found".to_string()))
    }

    /// Partial update of rating and/or text by the review's author. The
    /// repository flips `edited` and refreshes `updated_at`.
    pub async fn update_review(&self, user_id: &str, input: UpdateReview) -> CoreResult<Review> {
        validate_review_id(&input.review_id)?;
        validate_author_id(user_id)?;
        if let Some(rating) = input.rating {
            validate_rating(rating)?;
        }
        validate_review_text(input.review_text.as_deref())?;
        if input.is_empty() {
            return Err(CoreError::InvalidInput(
                "No update data provided".to_string(),
            ));
        }

        let existing = self.get_review_by_id(&input.review_id).await?;
        if existing.user_id != user_id {
            return Err(CoreError::Unauthorized(
                "You do not own this review".to_string(),
            ));
        }

        let updated = self
            .repo
            .update(&input.review_id, input.rating, input.review_text.as_deref())
            .await
            .map_err(repo_err)?
            // The row can vanish between the ownership read and the write.
            .ok_or_else(|| CoreError::NotFound("Review not found".to_string()))?;
        tracing::info!(review_id = %updated.id, user_id = %user_id, "Review updated");
        Ok(updated)
    }

    /// Delete a review the caller authored. Absence is reported before
    /// any ownership verdict.
    pub async fn delete_review(&self, user_id: &str, review_id: &str) -> CoreResult<()> {
        validate_review_id(review_id)?;
        validate_author_id(user_id)?;
        let existing = self.get_review_by_id(review_id).await?;
        if existing.user_id != user_id {
            return Err(CoreError::Unauthorized(
                "You do not own this review".to_string(),
            ));
        }
        self.repo.delete(review_id).await.map_err(repo_err)?;
        tracing::info!(review_id = %review_id, user_id = %user_id, "Review deleted");
        Ok(())
    }

    /// Like a review once. A repeat like is a conflict; a missing review
    /// is not-found even though the repository reports it in-band.
    pub async fn like_review(&self, review_id: &str, user_id: &str) -> CoreResult<()> {
        validate_review_id(review_id)?;
        validate_author_id(user_id)?;
        let already = self
            .repo
            .has_user_liked(review_id, user_id)
            .await
            .map_err(repo_err)?;
        if already {
            return Err(CoreError::Conflict(
                "User has already liked this review".to_string(),
            ));
        }
        match self.repo.like(review_id, user_id).await.map_err(repo_err)? {
            LikeOutcome::Applied => Ok(()),
            LikeOutcome::ReviewMissing => {
                Err(CoreError::NotFound("Review does not exist".to_string()))
            }
        }
    }

    /// Remove a like. Unliking a review never liked is a successful
    /// no-op; the operation is safely retryable.
    pub async fn unlike_review(&self, review_id: &str, user_id: &str) -> CoreResult<()> {
        validate_review_id(review_id)?;
        validate_author_id(user_id)?;
        match self
            .repo
            .unlike(review_id, user_id)
            .await
            .map_err(repo_err)?
        {
            UnlikeOutcome::Removed | UnlikeOutcome::NotLiked => Ok(()),
        }
    }

    // -----------------------------------------------------------------
    // List queries: validate the id, forward the sort spec, pass the
    // repository's result through verbatim.
    // -----------------------------------------------------------------

    pub async fn get_artist_reviews(
        &self,
        artist_id: &str,
        sort: Sorting,
    ) -> CoreResult<Vec<Review>> {
        if artist_id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "ArtistID is invalid or empty".to_string(),
            ));
        }
        self.repo
            .get_artist_reviews(artist_id, sort)
            .await
            .map_err(repo_err)
    }

    pub async fn get_album_reviews(&self, album_id: &str, sort: Sorting) -> CoreResult<Vec<Review>> {
        if album_id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "AlbumID is invalid or empty".to_string(),
            ));
        }
        self.repo
            .get_album_reviews(album_id, sort)
            .await
            .map_err(repo_err)
    }

    pub async fn get_track_reviews(&self, track_id: &str, sort: Sorting) -> CoreResult<Vec<Review>> {
        if track_id.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "TrackID is invalid or empty".to_string(),
            ));
        }
        self.repo
            .get_track_reviews(track_id, sort)
            .await
            .map_err(repo_err)
    }
}

/// Reviews validate the acting user with their own message, distinct from
/// the crate-side "Invalid or Missing user ID".
fn validate_author_id(user_id: &str) -> Result<(), CoreError> {
    if user_id.trim().is_empty() {
        return Err(CoreError::InvalidInput("Invalid user ID".to_string()));
    }
    Ok(())
}
