//! Crate entity models and DTOs.
//!
//! A crate is a user-owned, ordered collection of external track
//! references, optionally public. Tracks enter a foreign crate through a
//! submission that the owner resolves exactly once.

use serde::{Deserialize, Serialize};

use cratedigger_core::types::Timestamp;

/// A user-owned collection of tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover_image: Option<String>,
    /// Ordered display tags.
    pub tags: Vec<String>,
    /// Set once at creation, never changed by update.
    pub creator_id: String,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A track's membership in a crate.
///
/// `order` values within one crate form a contiguous permutation of
/// `[0, count)`; the repository maintains this across add, remove, and
/// reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrateTrack {
    pub id: String,
    pub crate_id: String,
    /// Opaque external track reference.
    pub track_id: String,
    /// Zero-based position within the crate.
    pub order: i32,
}

/// Resolution state of a crate submission.
///
/// `Pending` transitions once to either terminal state and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl SubmissionStatus {
    /// Whether this submission has been resolved.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

/// A proposal from one user to add a track to another user's crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrateSubmission {
    pub id: String,
    /// The submitting user.
    pub from_id: String,
    /// The crate owner the submission is addressed to.
    pub to_id: String,
    pub track_id: String,
    pub crate_id: String,
    pub message: Option<String>,
    pub status: SubmissionStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Server-curated crate feeds; the ranking behind each is a repository
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrateFeed {
    Popular,
    New,
}

/// DTO for creating a new crate. Only `name` is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCrate {
    pub name: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

/// DTO for updating an existing crate. All fields optional; `None` keeps
/// the previous value. `creator_id` is immutable and has no field here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCrate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

impl UpdateCrate {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.cover_image.is_none()
            && self.tags.is_none()
            && self.is_public.is_none()
    }
}
