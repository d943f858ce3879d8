//! Shared type aliases.

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current instant, UTC.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
