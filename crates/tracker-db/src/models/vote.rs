//! Vote binding database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub session_key: String,
    pub match_id: i64,
    pub match_team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}
