//! Prefixed random identifier generation.
//!
//! Every entity id is an opaque string: a short type prefix followed by a
//! random alphanumeric token, so ids stay readable in logs while remaining
//! collision-resistant.

use rand::Rng;

/// Length of the random token portion of a generated id.
pub const ID_TOKEN_LENGTH: usize = 16;

/// Id prefix for crates.
pub const CRATE_ID_PREFIX: &str = "crate";

/// Id prefix for reviews.
pub const REVIEW_ID_PREFIX: &str = "review";

/// Id prefix for crate submissions.
pub const SUBMISSION_ID_PREFIX: &str = "sub";

/// Id prefix for crate-track membership rows.
pub const CRATE_TRACK_ID_PREFIX: &str = "ct";

/// Generate a fresh id of the form `<prefix>_<token>`.
///
/// The token is [`ID_TOKEN_LENGTH`] alphanumeric characters, giving well
/// over 90 bits of entropy.
pub fn generate_id(prefix: &str) -> String {
    let token: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(ID_TOKEN_LENGTH)
        .map(char::from)
        .collect();
    format!("{prefix}_{token}")
}
