//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CommentId, FieldErrors, MatchId, Slot};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Match {match_id} has no team in position {position}")]
    SlotNotFound { match_id: MatchId, position: i64 },

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    // =========================================================================
    // Vote State Errors
    // =========================================================================
    #[error("Already voted on match {match_id}")]
    AlreadyVoted { match_id: MatchId },

    #[error("No active vote on match {match_id}")]
    NoActiveVote { match_id: MatchId },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Slot lookup failure for a typed slot
    pub fn slot_not_found(match_id: MatchId, slot: Slot) -> Self {
        Self::SlotNotFound {
            match_id,
            position: i64::from(slot.position()),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MatchNotFound(_) => "UNKNOWN_MATCH",
            Self::SlotNotFound { .. } => "UNKNOWN_SLOT",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::AlreadyVoted { .. } => "ALREADY_VOTED",
            Self::NoActiveVote { .. } => "NO_ACTIVE_VOTE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MatchNotFound(_) | Self::SlotNotFound { .. } | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a vote state precondition violation
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyVoted { .. } | Self::NoActiveVote { .. })
    }

    /// Field errors carried by a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
