//! A canned analyzer for offline runs and tests.

use wellness_core::{async_trait, GatewayError, MoodAnalyzer};

/// A [`MoodAnalyzer`] that returns fixed responses, or always fails.
///
/// Useful for running the web application without an API key and for
/// exercising both branches of the tagged analysis result in tests.
pub struct MockAnalyzer {
    classification: String,
    recommendation: String,
    fail: bool,
}

impl MockAnalyzer {
    /// An analyzer that reports a content mood with a fixed recommendation.
    pub fn new() -> Self {
        Self {
            classification: "You sound content and at ease.".to_string(),
            recommendation:
                "Movie: Chef. Song: Here Comes the Sun. Book: A Man Called Ove.".to_string(),
            fail: false,
        }
    }

    /// An analyzer with custom canned responses.
    pub fn with_responses(
        classification: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            classification: classification.into(),
            recommendation: recommendation.into(),
            fail: false,
        }
    }

    /// An analyzer whose calls always fail with a network error.
    pub fn failing() -> Self {
        Self {
            classification: String::new(),
            recommendation: String::new(),
            fail: true,
        }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MoodAnalyzer for MockAnalyzer {
    async fn classify(&self, _text: &str) -> Result<String, GatewayError> {
        if self.fail {
            return Err(GatewayError::Network("mock transport failure".to_string()));
        }
        Ok(self.classification.clone())
    }

    async fn recommend(&self, _text: &str) -> Result<String, GatewayError> {
        if self.fail {
            return Err(GatewayError::Network("mock transport failure".to_string()));
        }
        Ok(self.recommendation.clone())
    }

    fn name(&self) -> &str {
        "MockAnalyzer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_core::DIAGNOSTIC_PREFIX;

    #[tokio::test]
    async fn test_mock_returns_canned_responses() {
        let mock = MockAnalyzer::with_responses("Happy", "Movie: Up.");

        assert_eq!(mock.classify("anything").await.unwrap(), "Happy");
        assert_eq!(mock.recommend("anything").await.unwrap(), "Movie: Up.");
    }

    #[tokio::test]
    async fn test_failing_mock_yields_diagnostic() {
        let mock = MockAnalyzer::failing();

        let err = mock.classify("anything").await.unwrap_err();
        assert!(err.diagnostic().starts_with(DIAGNOSTIC_PREFIX));
    }
}
