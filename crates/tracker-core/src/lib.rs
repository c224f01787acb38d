//! # tracker-core
//!
//! Domain layer containing entities, value objects, repository traits and
//! the sentiment classifier port.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    CancelOutcome, Comment, Match, MatchTeam, MatchTeamWithName, NewComment, NewMatch, Team,
    VoteBinding, COMMENT_DATE_FORMAT,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, MatchRepository, MatchTeamRepository, RepoResult, SentimentClassifier,
    StoreHealth, TeamRepository, VoteRepository,
};
pub use value_objects::{
    CommentId, FieldErrors, IdParseError, MatchId, MatchTeamId, Sentiment, SessionKey, Slot,
    TeamId, VoteShares, VoteTally,
};
