//! The analyzer seam between the journal and mood-analysis backends.

use async_trait::async_trait;
use thiserror::Error;

/// Prefix of the inline diagnostic shown when analysis fails.
pub const DIAGNOSTIC_PREFIX: &str = "API Error: ";

/// Errors from a mood-analysis backend.
///
/// A failed analysis is a tagged error, never an error message smuggled inside
/// the content string; only the display edge turns it back into the inline
/// diagnostic via [`GatewayError::diagnostic`].
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Invalid or missing configuration (e.g. no API key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The upstream service answered with a non-success status.
    #[error("upstream error ({status}): {message}")]
    UpstreamStatus { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Render the legacy inline diagnostic string.
    ///
    /// Always begins with [`DIAGNOSTIC_PREFIX`] so callers and tests can
    /// recognize it.
    pub fn diagnostic(&self) -> String {
        format!("{}{}", DIAGNOSTIC_PREFIX, self)
    }
}

/// A backend that classifies moods and produces recommendations.
///
/// Implementations make two independent calls per submission: one for the
/// classification, one for the movie/song/book recommendation.
#[async_trait]
pub trait MoodAnalyzer: Send + Sync {
    /// Classify the user's mood from their free-form text.
    async fn classify(&self, text: &str) -> Result<String, GatewayError>;

    /// Recommend a movie, a song, and a book for the mood in the text.
    async fn recommend(&self, text: &str) -> Result<String, GatewayError>;

    /// Backend name, for logging.
    fn name(&self) -> &str;
}
