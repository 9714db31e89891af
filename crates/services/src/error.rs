//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuizItemError;

/// Errors emitted by the trivia and joke providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("provider request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("provider answered with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("provider reported response code {code}")]
    Provider { code: u8 },
    #[error("malformed provider response: {0}")]
    Malformed(String),
    #[error("invalid provider url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SourceError {
    /// True for transport-level failures where no usable response arrived.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus(_))
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<QuizItemError> for SourceError {
    fn from(err: QuizItemError) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Errors emitted while loading or starting a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("the provider returned no questions")]
    EmptyBatch,
    #[error("a newer quiz load replaced this one")]
    Superseded,
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_counts_as_network_failure() {
        assert!(SourceError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY).is_network());
    }

    #[test]
    fn provider_and_body_failures_are_not_network() {
        assert!(!SourceError::Malformed("missing results".into()).is_network());
        assert!(!SourceError::Provider { code: 2 }.is_network());
    }
}
