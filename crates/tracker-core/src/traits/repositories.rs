//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    CancelOutcome, Comment, Match, MatchTeam, MatchTeamWithName, NewComment, NewMatch, Team,
    VoteBinding,
};
use crate::error::DomainError;
use crate::value_objects::{CommentId, MatchId, Sentiment, SessionKey, Slot, TeamId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Team Repository
// ============================================================================

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find team by ID
    async fn find_by_id(&self, id: TeamId) -> RepoResult<Option<Team>>;

    /// Insert a team
    async fn create(&self, name: &str) -> RepoResult<Team>;
}

// ============================================================================
// Match Repository
// ============================================================================

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Find match by ID
    async fn find_by_id(&self, id: MatchId) -> RepoResult<Option<Match>>;

    /// List all matches by scheduled time
    async fn list(&self) -> RepoResult<Vec<Match>>;

    /// Insert a match
    async fn create(&self, new_match: &NewMatch) -> RepoResult<Match>;

    /// Delete a match with its slots, votes and comments
    async fn delete(&self, id: MatchId) -> RepoResult<bool>;
}

// ============================================================================
// MatchTeam Repository
// ============================================================================

#[async_trait]
pub trait MatchTeamRepository: Send + Sync {
    /// Slots of a match with team names, ordered by position
    async fn find_by_match(&self, match_id: MatchId) -> RepoResult<Vec<MatchTeamWithName>>;

    /// The slot at one position
    async fn find_slot(&self, match_id: MatchId, slot: Slot) -> RepoResult<Option<MatchTeam>>;

    /// Place a team in a slot (fails if the slot is taken)
    async fn assign(&self, match_id: MatchId, team_id: TeamId, slot: Slot)
        -> RepoResult<MatchTeam>;

    /// Remove a slot row; bindings pointing at it become stale
    async fn remove(&self, match_id: MatchId, slot: Slot) -> RepoResult<bool>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Current binding of a session on a match
    async fn find(&self, session: &SessionKey, match_id: MatchId)
        -> RepoResult<Option<VoteBinding>>;

    /// Record the binding and increment the slot counter, atomically
    ///
    /// Fails with `AlreadyVoted` when a binding for (session, match) exists,
    /// and with `SlotNotFound` when the slot row is gone. Neither failure
    /// mutates anything.
    async fn cast(&self, session: &SessionKey, slot: &MatchTeam) -> RepoResult<VoteBinding>;

    /// Remove the binding and decrement the bound slot, atomically
    ///
    /// Fails with `NoActiveVote` when there is no binding. The counter never
    /// drops below zero.
    async fn cancel(&self, session: &SessionKey, match_id: MatchId) -> RepoResult<CancelOutcome>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>>;

    /// Comments of a match, newest (highest id) first
    async fn find_by_match(&self, match_id: MatchId) -> RepoResult<Vec<Comment>>;

    /// Insert a comment without sentiment
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Replace username and text; `None` if the comment does not exist
    async fn update(&self, id: CommentId, username: &str, text: &str)
        -> RepoResult<Option<Comment>>;

    /// Store the classifier result; `false` if the comment is gone
    async fn set_sentiment(&self, id: CommentId, sentiment: Sentiment) -> RepoResult<bool>;

    /// Delete a comment, returning the match it belonged to
    async fn delete(&self, id: CommentId) -> RepoResult<Option<MatchId>>;
}

// ============================================================================
// Store health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> RepoResult<()>;

    /// Short backend name for logs and readiness output
    fn backend(&self) -> &'static str;
}
