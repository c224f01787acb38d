//! Test fixtures and response shapes
//!
//! Request bodies sent by the tests and the parts of the JSON responses
//! they inspect.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracker_core::entities::{Match, MatchTeam};
use tracker_core::Slot;
use tracker_db::MemoryStore;

/// Seed NaVi vs FaZe with the given vote counts
pub fn seed_match(store: &MemoryStore, votes: (u32, u32)) -> (Match, [MatchTeam; 2]) {
    let seeded = store.seed_match(
        "IEM Katowice Grand Final",
        Utc::now() + Duration::hours(1),
        ("NaVi", "FaZe"),
    );
    store.set_votes(seeded.0.id, Slot::One, votes.0);
    store.set_votes(seeded.0.id, Slot::Two, votes.1);
    seeded
}

/// Comment form body
#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub username: String,
    pub text: String,
}

impl CommentRequest {
    pub fn new(username: &str, text: &str) -> Self {
        Self {
            username: username.to_string(),
            text: text.to_string(),
        }
    }
}

/// Vote counters and shares
#[derive(Debug, Deserialize)]
pub struct Tally {
    pub team1_votes: u32,
    pub team2_votes: u32,
    pub total_votes: u64,
    pub team1_percent: f64,
    pub team2_percent: f64,
}

/// Body of a successful cast
#[derive(Debug, Deserialize)]
pub struct VoteResult {
    pub status: String,
    pub voted_position: u8,
    pub team_name: String,
    pub tally: Tally,
}

/// Body of a successful cancel
#[derive(Debug, Deserialize)]
pub struct CancelResult {
    pub status: String,
    pub tally: Tally,
}

#[derive(Debug, Deserialize)]
pub struct MatchSummary {
    pub id: i64,
    pub event_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SlotView {
    pub team_name: String,
    pub votes: u32,
    pub percent: f64,
}

/// Match page
#[derive(Debug, Deserialize)]
pub struct MatchDetail {
    #[serde(rename = "match")]
    pub match_info: MatchSummary,
    pub team1: Option<SlotView>,
    pub team2: Option<SlotView>,
    pub total_votes: u64,
    pub has_voted: bool,
    pub voted_position: Option<u8>,
    pub comments: Vec<CommentView>,
}

/// Comment as rendered by the API
#[derive(Debug, Deserialize)]
pub struct CommentView {
    pub id: i64,
    pub match_id: i64,
    pub username: String,
    pub text: String,
    pub created_at: String,
    pub sentiment: Option<String>,
    pub sentiment_emoji: String,
    pub sentiment_class: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentList {
    pub comments: Vec<CommentView>,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Readiness {
    pub status: String,
    pub backend: String,
}
