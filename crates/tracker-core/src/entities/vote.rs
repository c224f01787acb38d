//! Vote binding - which slot a browser session voted for in a match

use chrono::{DateTime, Utc};

use crate::value_objects::{MatchId, MatchTeamId, SessionKey};

/// Session binding recorded when a vote is cast
///
/// `match_team_id` becomes `None` when the slot row it pointed to was removed
/// (match data reloaded). Such a binding is stale: cancelling it clears it
/// without touching any counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteBinding {
    pub session: SessionKey,
    pub match_id: MatchId,
    pub match_team_id: Option<MatchTeamId>,
    pub created_at: DateTime<Utc>,
}

impl VoteBinding {
    pub fn new(session: SessionKey, match_id: MatchId, match_team_id: MatchTeamId) -> Self {
        Self {
            session,
            match_id,
            match_team_id: Some(match_team_id),
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_stale(&self) -> bool {
        self.match_team_id.is_none()
    }
}

/// Result of a successful cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The recorded slot lost one vote (floored at zero)
    Cancelled { match_team_id: MatchTeamId },
    /// The recorded slot no longer exists; only the binding was removed
    Stale,
}

impl CancelOutcome {
    #[inline]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}
