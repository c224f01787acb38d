//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tracker-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod health;
mod match_team;
mod matches;
mod team;
mod vote;

pub use comment::PgCommentRepository;
pub use health::PgStoreHealth;
pub use match_team::PgMatchTeamRepository;
pub use matches::PgMatchRepository;
pub use team::PgTeamRepository;
pub use vote::PgVoteRepository;
