//! Review constants and validation functions.
//!
//! Defines the rating bounds and text-length limit for reviews plus the
//! validation helpers the service layer runs before touching the
//! repository. Error strings here are observable contract.

use crate::error::CoreError;

/// Lowest accepted star rating.
pub const RATING_MIN: i32 = 1;

/// Highest accepted star rating.
pub const RATING_MAX: i32 = 5;

/// Maximum length for a review's text content, in characters.
pub const MAX_REVIEW_TEXT_LENGTH: usize = 1000;

/// Validate that a rating is within the accepted star range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "Rating must be between {RATING_MIN} and {RATING_MAX}"
        )))
    }
}

/// Validate review text length. Length exactly [`MAX_REVIEW_TEXT_LENGTH`]
/// is accepted; one character over is not.
pub fn validate_review_text(text: Option<&str>) -> Result<(), CoreError> {
    if let Some(t) = text {
        if t.chars().count() > MAX_REVIEW_TEXT_LENGTH {
            return Err(CoreError::InvalidInput(format!(
                "Review text exceeds maximum length of {MAX_REVIEW_TEXT_LENGTH} characters"
            )));
        }
    }
    Ok(())
}

/// Validate the author/item pair supplied to review creation.
pub fn validate_review_author(user_id: &str, item_id: &str) -> Result<(), CoreError> {
    if user_id.trim().is_empty() || item_id.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "Invalid userId or itemId".to_string(),
        ));
    }
    Ok(())
}

/// Validate a review id argument.
pub fn validate_review_id(review_id: &str) -> Result<(), CoreError> {
    if review_id.trim().is_empty() {
        return Err(CoreError::InvalidInput("Invalid review ID".to_string()));
    }
    Ok(())
}
