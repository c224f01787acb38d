//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub match_id: i64,
    pub username: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub sentiment: Option<String>,
}
