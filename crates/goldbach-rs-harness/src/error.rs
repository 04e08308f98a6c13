//! Error type shared across the harness.

use thiserror::Error;

/// Failures that can occur while loading, writing, or validating
/// fixture and report artifacts.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Fixture files carry a version tag so stale captures fail loudly
    /// instead of producing confusing verification diffs.
    #[error("unsupported fixture version {found:?}, expected {expected:?}")]
    UnsupportedFixtureVersion {
        found: String,
        expected: &'static str,
    },
}
