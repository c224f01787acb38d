//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod match_team;
mod matches;
mod team;
mod vote;

pub use comment::CommentModel;
pub use match_team::{MatchTeamModel, MatchTeamWithNameModel};
pub use matches::MatchModel;
pub use team::TeamModel;
pub use vote::VoteModel;
