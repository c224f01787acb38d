//! Sentiment classifier port

use async_trait::async_trait;

use crate::value_objects::Sentiment;

/// External text classifier
///
/// Implementations absorb every failure (timeouts, HTTP errors, malformed
/// payloads) and answer [`Sentiment::Neutral`] instead, so callers never have
/// to handle a classifier error.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify a piece of text
    async fn classify(&self, text: &str) -> Sentiment;
}
