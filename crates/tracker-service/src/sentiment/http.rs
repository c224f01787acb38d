//! HTTP sentiment classifier (Hugging Face inference API)

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::{debug, instrument, warn};

use tracker_common::SentimentConfig;
use tracker_core::{Sentiment, SentimentClassifier};

use super::labels::{label_to_sentiment, top_label, LabelScore};

/// Longest response body excerpt kept in an error
const BODY_EXCERPT_CHARS: usize = 200;

/// Why a classification request produced no label
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("sentiment API timed out")]
    Timeout,

    #[error("sentiment API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("sentiment API answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed sentiment API response: {0}")]
    MalformedBody(String),

    #[error("sentiment API returned no labels")]
    NoLabels,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

/// Classifier calling a hosted text-classification model
#[derive(Debug, Clone)]
pub struct HttpSentimentClassifier {
    client: Client,
    api_url: String,
    api_token: String,
    max_chars: usize,
}

impl HttpSentimentClassifier {
    /// Build a classifier from configuration
    ///
    /// Returns `Ok(None)` when no API token is configured.
    ///
    /// # Errors
    /// Returns `ClassifierError::Client` if the HTTP client cannot be built
    pub fn from_config(config: &SentimentConfig) -> Result<Option<Self>, ClassifierError> {
        let Some(token) = config.api_token.as_deref().filter(|_| config.is_enabled()) else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ClassifierError::Client)?;

        Ok(Some(Self {
            client,
            api_url: config.api_url.clone(),
            api_token: token.to_string(),
            max_chars: config.max_chars,
        }))
    }

    /// Classify, reporting why no label was obtained
    ///
    /// # Errors
    /// Any transport, status or payload failure
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn try_classify(&self, text: &str) -> Result<Sentiment, ClassifierError> {
        let input = truncate_chars(text, self.max_chars);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&json!({ "inputs": input }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClassifierError::Status {
                status,
                body: truncate_chars(&body, BODY_EXCERPT_CHARS).to_string(),
            });
        }

        let batch: Vec<Vec<LabelScore>> = serde_json::from_str(&body)
            .map_err(|e| ClassifierError::MalformedBody(e.to_string()))?;
        let top = top_label(&batch).ok_or(ClassifierError::NoLabels)?;

        debug!(label = %top.label, score = top.score, "Sentiment label received");
        Ok(label_to_sentiment(&top.label))
    }
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    async fn classify(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::Neutral;
        }

        match self.try_classify(text).await {
            Ok(sentiment) => sentiment,
            Err(error) => {
                warn!(%error, "Sentiment classification failed, using NEUTRAL");
                Sentiment::Neutral
            }
        }
    }
}

/// Prefix of at most `max` characters
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
