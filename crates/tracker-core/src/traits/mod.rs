//! Ports implemented by the infrastructure layer

mod classifier;
mod repositories;

pub use classifier::SentimentClassifier;
pub use repositories::{
    CommentRepository, MatchRepository, MatchTeamRepository, RepoResult, StoreHealth,
    TeamRepository, VoteRepository,
};
