//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use tracker_core::entities::{Comment, Match, MatchTeamWithName};
use tracker_core::{MatchId, VoteTally};

use super::responses::{CommentResponse, MatchResponse, SlotResponse, TallyResponse};

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        // Unclassified comments render like neutral ones
        let shown = comment.sentiment.unwrap_or_default();
        Self {
            id: comment.id,
            match_id: comment.match_id,
            username: comment.username.clone(),
            text: comment.text.clone(),
            created_at: comment.display_date(),
            sentiment: comment.sentiment,
            sentiment_emoji: shown.emoji(),
            sentiment_class: shown.css_class(),
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            id: m.id,
            event_name: m.event_name,
            scheduled_time: m.scheduled_time,
        }
    }
}

impl SlotResponse {
    pub fn new(entry: MatchTeamWithName, tally: &VoteTally) -> Self {
        Self {
            position: entry.entry.slot,
            team_id: entry.entry.team_id,
            percent: tally.percent(entry.entry.slot),
            votes: entry.entry.votes,
            team_name: entry.team_name,
        }
    }
}

impl TallyResponse {
    pub fn new(match_id: MatchId, tally: VoteTally) -> Self {
        let shares = tally.shares();
        Self {
            match_id,
            team1_votes: tally.slot_one,
            team2_votes: tally.slot_two,
            total_votes: tally.total(),
            team1_percent: shares.slot_one,
            team2_percent: shares.slot_two,
        }
    }
}
