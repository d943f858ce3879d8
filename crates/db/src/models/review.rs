//! Review entity model and DTOs.

use serde::{Deserialize, Serialize};

use cratedigger_core::types::Timestamp;

/// Kind of item a review is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewType {
    Album,
    Track,
}

/// A user's rating and optional text for one item, unique per
/// `(user_id, item_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    /// The author; immutable.
    pub user_id: String,
    /// The reviewed entity reference.
    pub item_id: String,
    /// Denormalized artist reference for artist-level queries.
    pub artist_id: String,
    /// Star rating, 1 through 5 inclusive.
    pub rating: i32,
    pub review_text: Option<String>,
    pub review_type: ReviewType,
    /// False until the first update; the repository flips it.
    pub edited: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a review. The author id travels separately.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub item_id: String,
    pub artist_id: String,
    pub rating: i32,
    pub review_text: Option<String>,
    pub review_type: ReviewType,
}

/// DTO for updating a review. Rating and/or text only; everything else is
/// immutable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    pub review_id: String,
    pub rating: Option<i32>,
    pub review_text: Option<String>,
}

impl UpdateReview {
    /// True when neither rating nor text is supplied.
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.review_text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReviewType::Album).unwrap(),
            "\"album\""
        );
        assert_eq!(
            serde_json::to_string(&ReviewType::Track).unwrap(),
            "\"track\""
        );
    }

    #[test]
    fn create_dto_deserializes_camel_case() {
        let dto: CreateReview = serde_json::from_str(
            r#"{"itemId":"item1","artistId":"artist1","rating":5,"reviewText":"Great!","reviewType":"album"}"#,
        )
        .unwrap();
        assert_eq!(dto.item_id, "item1");
        assert_eq!(dto.rating, 5);
        assert_eq!(dto.review_type, ReviewType::Album);
    }

    #[test]
    fn empty_update_detected() {
        let patch = UpdateReview {
            review_id: "rev1".to_string(),
            rating: None,
            review_text: None,
        };
        assert!(patch.is_empty());
    }
}
