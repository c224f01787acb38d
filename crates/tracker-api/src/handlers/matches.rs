//! Match handlers

use axum::{extract::State, Json};
use tracker_core::MatchId;
use tracker_service::dto::{MatchDetailResponse, MatchResponse};
use tracker_service::MatchService;

use crate::extractors::{IdPath, VoterSession};
use crate::response::ApiResult;
use crate::state::AppState;

/// List matches
///
/// GET /api/matches
pub async fn list_matches(State(state): State<AppState>) -> ApiResult<Json<Vec<MatchResponse>>> {
    let matches = MatchService::new(state.service_context())
        .list_matches()
        .await?;
    Ok(Json(matches))
}

/// Match page: slots, vote shares, the caller's vote and comments
///
/// GET /api/matches/{match_id}
pub async fn get_match(
    State(state): State<AppState>,
    session: VoterSession,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<Json<MatchDetailResponse>> {
    let detail = MatchService::new(state.service_context())
        .get_match_detail(match_id, session.key())
        .await?;
    Ok(Json(detail))
}
