//! Crate-side validation functions.
//!
//! Input checks the crate service runs before any repository call. Each
//! helper owns one argument kind so the services stay declarative.

use crate::error::CoreError;

/// Validate a crate id argument.
pub fn validate_crate_id(crate_id: &str) -> Result<(), CoreError> {
    if crate_id.trim().is_empty() {
        return Err(CoreError::InvalidInput("Invalid crate ID".to_string()));
    }
    Ok(())
}

/// Validate an external track id argument.
pub fn validate_track_id(track_id: &str) -> Result<(), CoreError> {
    if track_id.trim().is_empty() {
        return Err(CoreError::InvalidInput("Invalid track ID".to_string()));
    }
    Ok(())
}

/// Validate a user id argument.
pub fn validate_user_id(user_id: &str) -> Result<(), CoreError> {
    if user_id.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "Invalid or Missing user ID".to_string(),
        ));
    }
    Ok(())
}

/// Validate a submission id argument.
pub fn validate_submission_id(submission_id: &str) -> Result<(), CoreError> {
    if submission_id.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "Invalid submission ID".to_string(),
        ));
    }
    Ok(())
}

/// Validate the required fields of a new crate.
pub fn validate_crate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::MissingData(
            "Missing required crate data".to_string(),
        ));
    }
    Ok(())
}
