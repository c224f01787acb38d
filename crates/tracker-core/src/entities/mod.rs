//! Domain entities - core business objects

mod comment;
mod match_team;
mod matches;
mod team;
mod vote;

pub use comment::{Comment, NewComment, COMMENT_DATE_FORMAT};
pub use match_team::{MatchTeam, MatchTeamWithName};
pub use matches::{Match, NewMatch};
pub use team::Team;
pub use vote::{CancelOutcome, VoteBinding};
