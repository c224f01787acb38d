//! MatchTeam database models

use sqlx::FromRow;

/// Database model for match_teams table
#[derive(Debug, Clone, FromRow)]
pub struct MatchTeamModel {
    pub id: i64,
    pub match_id: i64,
    pub team_id: i64,
    pub position: i16,
    pub votes: i32,
}

/// Slot row joined with teams.name
#[derive(Debug, Clone, FromRow)]
pub struct MatchTeamWithNameModel {
    pub id: i64,
    pub match_id: i64,
    pub team_id: i64,
    pub position: i16,
    pub votes: i32,
    pub team_name: String,
}
