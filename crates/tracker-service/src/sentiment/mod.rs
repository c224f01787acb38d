//! Sentiment classification through a hosted text-classification model
//!
//! The model answers a list of `{label, score}` candidates per input; the
//! best-scoring label is mapped to a [`Sentiment`](tracker_core::Sentiment).

mod http;
mod labels;

pub use http::{ClassifierError, HttpSentimentClassifier};
pub use labels::{label_to_sentiment, top_label, LabelScore};
