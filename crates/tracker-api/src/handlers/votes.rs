//! Vote handlers
//!
//! Cast and cancel the caller's vote on a match.

use axum::{extract::State, Json};
use tracker_core::MatchId;
use tracker_service::dto::{CancelVoteResponse, VoteResponse};
use tracker_service::VoteService;

use crate::extractors::{IdPath, VoterSession};
use crate::response::ApiResult;
use crate::state::AppState;

/// Vote for the team in `position` (1 or 2)
///
/// POST /api/matches/{match_id}/vote/{position}
pub async fn cast_vote(
    State(state): State<AppState>,
    session: VoterSession,
    IdPath((match_id, position)): IdPath<(MatchId, i64)>,
) -> ApiResult<Json<VoteResponse>> {
    let response = VoteService::new(state.service_context())
        .cast_vote(session.key(), match_id, position)
        .await?;
    Ok(Json(response))
}

/// Withdraw the caller's vote
///
/// POST /api/matches/{match_id}/cancel-vote
pub async fn cancel_vote(
    State(state): State<AppState>,
    session: VoterSession,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<Json<CancelVoteResponse>> {
    let response = VoteService::new(state.service_context())
        .cancel_vote(session.key(), match_id)
        .await?;
    Ok(Json(response))
}
