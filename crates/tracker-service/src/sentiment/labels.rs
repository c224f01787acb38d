//! Model label parsing

use serde::Deserialize;
use tracker_core::Sentiment;

/// One candidate label returned by the model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Highest-scoring label of the first input's candidates
pub fn top_label(batch: &[Vec<LabelScore>]) -> Option<&LabelScore> {
    batch
        .first()?
        .iter()
        .filter(|c| c.score.is_finite())
        .max_by(|a, b| a.score.total_cmp(&b.score))
}

/// Map a model label to a sentiment
///
/// Star ratings: 1-2 negative, 3 neutral, 4-5 positive. Plain
/// `positive`/`negative`/`neutral` labels map directly. Anything else is
/// neutral.
pub fn label_to_sentiment(label: &str) -> Sentiment {
    let label = label.trim().to_ascii_lowercase();
    match label.as_str() {
        "1 star" | "2 stars" => Sentiment::Negative,
        "3 stars" => Sentiment::Neutral,
        "4 stars" | "5 stars" => Sentiment::Positive,
        other => other.parse().unwrap_or_default(),
    }
}
