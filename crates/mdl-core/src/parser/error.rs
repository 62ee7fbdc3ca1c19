//! Error raised when a URL cannot be classified.

use thiserror::Error;

/// The one failure kind of the parser subsystem: malformed or unsupported input.
///
/// Never transient, so callers should not retry; the HTTP layer maps it to a 4xx.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid music URL: {reason}")]
pub struct InvalidMusicUrlError {
    /// Offending input, verbatim.
    pub url: String,
    /// Human-readable explanation.
    pub reason: String,
}

impl InvalidMusicUrlError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn empty(url: &str) -> Self {
        Self::new(url, "URL cannot be empty")
    }
}
