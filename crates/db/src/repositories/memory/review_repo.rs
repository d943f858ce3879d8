//! In-memory review repository.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use cratedigger_core::sorting::{SortBy, SortOrder, Sorting};
use cratedigger_core::types::now;

use crate::models::review::{Review, ReviewType};
use crate::repositories::review_repo::{LikeOutcome, ReviewRepository, UnlikeOutcome};
use crate::repositories::RepoResult;

#[derive(Default)]
struct ReviewState {
    reviews: HashMap<String, Review>,
    /// Liking users per review id.
    likes: HashMap<String, HashSet<String>>,
}

/// Map-backed [`ReviewRepository`].
#[derive(Default)]
pub struct MemoryReviewRepo {
    state: RwLock<ReviewState>,
}

impl MemoryReviewRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Apply the sort field, direction, and 1-based page window.
fn sort_and_page(mut rows: Vec<Review>, sort: Sorting) -> Vec<Review> {
    match sort.sort_by {
        SortBy::Date => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortBy::Rating => rows.sort_by(|a, b| a.rating.cmp(&b.rating)),
    }
    if sort.order == SortOrder::Desc {
        rows.reverse();
    }
    let (start, len) = sort.window();
    rows.into_iter().skip(start).take(len).collect()
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepo {
    async fn create(&self, review: Review) -> RepoResult<Review> {
        let mut state = self.state.write().await;
        tracing::debug!(review_id = %review.id, "storing review");
        state.reviews.insert(review.id.clone(), review.clone());
        Ok(review)
    }

    async fn get_by_id(&self, review_id: &str) -> RepoResult<Option<Review>> {
        let state = self.state.read().await;
        Ok(state.reviews.get(review_id).cloned())
    }

    async fn get_by_user_and_item(
        &self,
        user_id: &str,
        item_id: &str,
    ) -> RepoResult<Option<Review>> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .values()
            .find(|r| r.user_id == user_id && r.item_id == item_id)
            .cloned())
    }

    async fn update(
        &self,
        review_id: &str,
        rating: Option<i32>,
        review_text: Option<&str>,
    ) -> RepoResult<Option<Review>> {
        let mut state = self.state.write().await;
        let Some(review) = state.reviews.get_mut(review_id) else {
            return Ok(None);
        };
        if let Some(rating) = rating {
            review.rating = rating;
        }
        if let Some(text) = review_text {
            review.review_text = Some(text.to_string());
        }
        review.edited = true;
        review.updated_at = now();
        Ok(Some(review.clone()))
    }

    async fn delete(&self, review_id: &str) -> RepoResult<()> {
        let mut state = self.state.write().await;
        state.reviews.remove(review_id);
        state.likes.remove(review_id);
        Ok(())
    }

    async fn has_user_liked(&self, review_id: &str, user_id: &str) -> RepoResult<bool> {
        let state = self.state.read().await;
        Ok(state
            .likes
            .get(review_id)
            .is_some_and(|users| users.contains(user_id)))
    }

    async fn like(&self, review_id: &str, user_id: &str) -> RepoResult<LikeOutcome> {
        let mut state = self.state.write().await;
        if !state.reviews.contains_key(review_id) {
            return Ok(LikeOutcome::ReviewMissing);
        }
        state
            .likes
            .entry(review_id.to_string())
            .or_default()
            .insert(user_id.to_string());
        Ok(LikeOutcome::Applied)
    }

    async fn unlike(&self, review_id: &str, user_id: &str) -> RepoResult<UnlikeOutcome> {
        let mut state = self.state.write().await;
        let removed = state
            .likes
            .get_mut(review_id)
            .is_some_and(|users| users.remove(user_id));
        if removed {
            Ok(UnlikeOutcome::Removed)
        } else {
            Ok(UnlikeOutcome::NotLiked)
        }
    }

    async fn get_artist_reviews(&self, artist_id: &str, sort: Sorting) -> RepoResult<Vec<Review>> {
        let state = self.state.read().await;
        let rows = state
            .reviews
            .values()
            .filter(|r| r.artist_id == artist_id)
            .cloned()
            .collect();
        Ok(sort_and_page(rows, sort))
    }

    async fn get_album_reviews(&self, album_id: &str, sort: Sorting) -> RepoResult<Vec<Review>> {
        let state = self.state.read().await;
        let rows = state
            .reviews
            .values()
            .filter(|r| r.item_id == album_id && r.review_type == ReviewType::Album)
            .cloned()
            .collect();
        Ok(sort_and_page(rows, sort))
    }

    async fn get_track_reviews(&self, track_id: &str, sort: Sorting) -> RepoResult<Vec<Review>> {
        let state = self.state.read().await;
        let rows = state
            .reviews
            .values()
            .filter(|r| r.item_id == track_id && r.review_type == ReviewType::Track)
            .cloned()
            .collect();
        Ok(sort_and_page(rows, sort))
    }
}
