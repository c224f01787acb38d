//! Vote service
//!
//! Enforces one active vote per (session, match). A session moves from no
//! vote to a vote on one slot by casting, and back by cancelling; switching
//! sides always goes through a cancel.

use tracing::{info, instrument, warn};
use tracker_core::entities::{CancelOutcome, Match, MatchTeamWithName};
use tracker_core::{DomainError, MatchId, SessionKey, Slot, VoteTally};

use crate::dto::{CancelVoteResponse, TallyResponse, VoteResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast a vote for the team at `position`
    ///
    /// # Errors
    /// `MatchNotFound`, `SlotNotFound` (including positions other than 1
    /// and 2) or `AlreadyVoted` when the session already holds a vote
    #[instrument(skip(self, session))]
    pub async fn cast_vote(
        &self,
        session: &SessionKey,
        match_id: MatchId,
        position: i64,
    ) -> ServiceResult<VoteResponse> {
        let game = self.require_match(match_id).await?;

        let slot = Slot::from_position(position)
            .ok_or(DomainError::SlotNotFound { match_id, position })?;
        let target = self
            .ctx
            .match_team_repo()
            .find_slot(match_id, slot)
            .await?
            .ok_or_else(|| DomainError::slot_not_found(match_id, slot))?;

        // Fast path; the store's unique binding decides under concurrency
        if self.ctx.vote_repo().find(session, match_id).await?.is_some() {
            return Err(DomainError::AlreadyVoted { match_id }.into());
        }

        self.ctx.vote_repo().cast(session, &target).await?;

        let entries = self.ctx.match_team_repo().find_by_match(match_id).await?;
        let tally = tally_of(&entries);
        let team_name = entries
            .into_iter()
            .find(|e| e.entry.id == target.id)
            .map(|e| e.team_name)
            .unwrap_or_default();

        info!(
            match_id = %match_id,
            event = %game.label(),
            position = slot.position(),
            team = %team_name,
            "Vote cast"
        );

        Ok(VoteResponse {
            status: "voted",
            voted_position: slot,
            team_name,
            tally: TallyResponse::new(match_id, tally),
        })
    }

    /// Withdraw the session's vote on a match
    ///
    /// Decrements exactly the slot recorded with the vote. A vote whose slot
    /// has been removed since is dropped without touching any counter.
    ///
    /// # Errors
    /// `MatchNotFound` or `NoActiveVote`
    #[instrument(skip(self, session))]
    pub async fn cancel_vote(
        &self,
        session: &SessionKey,
        match_id: MatchId,
    ) -> ServiceResult<CancelVoteResponse> {
        self.require_match(match_id).await?;

        let outcome = self.ctx.vote_repo().cancel(session, match_id).await?;
        let status = match outcome {
            CancelOutcome::Cancelled { match_team_id } => {
                info!(match_id = %match_id, match_team_id = %match_team_id, "Vote cancelled");
                "cancelled"
            }
            CancelOutcome::Stale => {
                warn!(match_id = %match_id, "Cancelled a vote whose team slot no longer exists");
                "stale"
            }
        };

        let tally = self.tally(match_id).await?;
        Ok(CancelVoteResponse {
            status,
            tally: TallyResponse::new(match_id, tally),
        })
    }

    /// Current counters of both slots; a missing slot counts as 0
    #[instrument(skip(self))]
    pub async fn tally(&self, match_id: MatchId) -> ServiceResult<VoteTally> {
        let entries = self.ctx.match_team_repo().find_by_match(match_id).await?;
        Ok(tally_of(&entries))
    }

    /// Slot the session voted for, if it holds a live vote
    #[instrument(skip(self, session))]
    pub async fn voted_slot(
        &self,
        session: &SessionKey,
        match_id: MatchId,
    ) -> ServiceResult<Option<Slot>> {
        let entries = self.ctx.match_team_repo().find_by_match(match_id).await?;
        Ok(self.session_vote_in(session, match_id, &entries).await?.slot)
    }

    /// The session's vote against already loaded slot rows
    pub(crate) async fn session_vote_in(
        &self,
        session: &SessionKey,
        match_id: MatchId,
        entries: &[MatchTeamWithName],
    ) -> ServiceResult<SessionVote> {
        let Some(binding) = self.ctx.vote_repo().find(session, match_id).await? else {
            return Ok(SessionVote::default());
        };
        let slot = binding
            .match_team_id
            .and_then(|id| entries.iter().find(|e| e.entry.id == id))
            .map(|e| e.entry.slot);
        Ok(SessionVote { held: true, slot })
    }

    async fn require_match(&self, match_id: MatchId) -> ServiceResult<Match> {
        let found = self
            .ctx
            .match_repo()
            .find_by_id(match_id)
            .await?
            .ok_or(DomainError::MatchNotFound(match_id))?;
        Ok(found)
    }
}

/// A session's vote on one match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SessionVote {
    /// A binding exists, stale or not
    pub(crate) held: bool,
    /// Slot of a binding that still points at a live row
    pub(crate) slot: Option<Slot>,
}

/// Tally of loaded slot rows
pub(crate) fn tally_of(entries: &[MatchTeamWithName]) -> VoteTally {
    let votes = |slot: Slot| {
        entries
            .iter()
            .find(|e| e.entry.slot == slot)
            .map_or(0, |e| e.entry.votes)
    };
    VoteTally::new(votes(Slot::One), votes(Slot::Two))
}
