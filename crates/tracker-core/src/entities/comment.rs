//! Comment entity - free text posted on a match

use chrono::{DateTime, Utc};

use crate::value_objects::{CommentId, MatchId, Sentiment};

/// Display format for comment timestamps
pub const COMMENT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub match_id: MatchId,
    pub username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub sentiment: Option<Sentiment>,
}

impl Comment {
    /// Timestamp formatted as `DD/MM/YYYY HH:MM`
    pub fn display_date(&self) -> String {
        self.created_at.format(COMMENT_DATE_FORMAT).to_string()
    }
}

/// Values for inserting a comment (id assigned by the store)
#[derive(Debug, Clone)]
pub struct NewComment {
    pub match_id: MatchId,
    pub username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(match_id: MatchId, username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            match_id,
            username: username.into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
