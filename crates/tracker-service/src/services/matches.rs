//! Match service
//!
//! Read model of the match pages: the match list and the detail view with
//! both slots, vote shares, the caller's vote and the comments.

use tracing::instrument;
use tracker_core::{DomainError, MatchId, SessionKey, Slot};

use crate::dto::{MatchDetailResponse, MatchResponse, SlotResponse};

use super::comment::CommentService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::vote::{tally_of, VoteService};

/// Match service
pub struct MatchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MatchService<'a> {
    /// Create a new MatchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All matches by scheduled time
    #[instrument(skip(self))]
    pub async fn list_matches(&self) -> ServiceResult<Vec<MatchResponse>> {
        let matches = self.ctx.match_repo().list().await?;
        Ok(matches.into_iter().map(MatchResponse::from).collect())
    }

    /// Match page as seen by one session
    #[instrument(skip(self, session))]
    pub async fn get_match_detail(
        &self,
        match_id: MatchId,
        session: &SessionKey,
    ) -> ServiceResult<MatchDetailResponse> {
        let found = self
            .ctx
            .match_repo()
            .find_by_id(match_id)
            .await?
            .ok_or(DomainError::MatchNotFound(match_id))?;

        let entries = self.ctx.match_team_repo().find_by_match(match_id).await?;
        let tally = tally_of(&entries);
        let vote = VoteService::new(self.ctx)
            .session_vote_in(session, match_id, &entries)
            .await?;
        let comments = CommentService::new(self.ctx).load_comments(match_id).await?;

        let mut team1 = None;
        let mut team2 = None;
        for entry in entries {
            let slot = entry.entry.slot;
            let response = Some(SlotResponse::new(entry, &tally));
            match slot {
                Slot::One => team1 = response,
                Slot::Two => team2 = response,
            }
        }

        Ok(MatchDetailResponse {
            match_info: MatchResponse::from(found),
            team1,
            team2,
            total_votes: tally.total(),
            has_voted: vote.held,
            voted_position: vote.slot,
            comments,
        })
    }
}
