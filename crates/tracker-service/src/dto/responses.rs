//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracker_core::{CommentId, MatchId, Sentiment, Slot, TeamId};

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment as shown on a match page
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: CommentId,
    pub match_id: MatchId,
    pub username: String,
    pub text: String,
    /// `DD/MM/YYYY HH:MM`, UTC
    pub created_at: String,
    pub sentiment: Option<Sentiment>,
    pub sentiment_emoji: &'static str,
    pub sentiment_class: &'static str,
}

/// Comments of one match, newest first
#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// Counters and rounded percentages of both slots
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TallyResponse {
    pub match_id: MatchId,
    pub team1_votes: u32,
    pub team2_votes: u32,
    pub total_votes: u64,
    pub team1_percent: f64,
    pub team2_percent: f64,
}

/// Result of a cast
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub status: &'static str,
    pub voted_position: Slot,
    pub team_name: String,
    pub tally: TallyResponse,
}

/// Result of a cancellation
#[derive(Debug, Clone, Serialize)]
pub struct CancelVoteResponse {
    /// `cancelled`, or `stale` when the voted slot no longer exists
    pub status: &'static str,
    pub tally: TallyResponse,
}

// ============================================================================
// Match Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub id: MatchId,
    pub event_name: String,
    pub scheduled_time: DateTime<Utc>,
}

/// One slot of a match
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    pub position: Slot,
    pub team_id: TeamId,
    pub team_name: String,
    pub votes: u32,
    pub percent: f64,
}

/// Match page: both slots, percentages, the caller's vote and the comments
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetailResponse {
    #[serde(rename = "match")]
    pub match_info: MatchResponse,
    pub team1: Option<SlotResponse>,
    pub team2: Option<SlotResponse>,
    pub total_votes: u64,
    pub has_voted: bool,
    pub voted_position: Option<Slot>,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub backend: &'static str,
    pub store: String,
}

impl ReadinessResponse {
    pub fn new(backend: &'static str, store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            backend,
            store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
