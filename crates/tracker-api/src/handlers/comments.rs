//! Comment handlers
//!
//! Create and edit accept either a JSON body or an urlencoded form.

use axum::{extract::State, Json};
use tracker_core::{CommentId, MatchId};
use tracker_service::dto::{CommentForm, CommentListResponse, CommentResponse};
use tracker_service::CommentService;

use crate::extractors::{FormOrJson, IdPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comments of a match, newest first
///
/// GET /api/matches/{match_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    IdPath(match_id): IdPath<MatchId>,
) -> ApiResult<Json<CommentListResponse>> {
    let comments = CommentService::new(state.service_context())
        .list_comments(match_id)
        .await?;
    Ok(Json(comments))
}

/// Post a comment
///
/// POST /api/matches/{match_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    IdPath(match_id): IdPath<MatchId>,
    FormOrJson(form): FormOrJson<CommentForm>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let comment = CommentService::new(state.service_context())
        .create_comment(match_id, form)
        .await?;
    Ok(Created(Json(comment)))
}

/// Get a single comment
///
/// GET /api/comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath<CommentId>,
) -> ApiResult<Json<CommentResponse>> {
    let comment = CommentService::new(state.service_context())
        .get_comment(comment_id)
        .await?;
    Ok(Json(comment))
}

/// Edit a comment
///
/// PUT|POST /api/comments/{comment_id}/edit
pub async fn edit_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath<CommentId>,
    FormOrJson(form): FormOrJson<CommentForm>,
) -> ApiResult<Json<CommentResponse>> {
    let comment = CommentService::new(state.service_context())
        .edit_comment(comment_id, form)
        .await?;
    Ok(Json(comment))
}

/// Delete a comment; answers 204 whether or not it existed
///
/// DELETE|POST /api/comments/{comment_id}/delete
pub async fn delete_comment(
    State(state): State<AppState>,
    IdPath(comment_id): IdPath<CommentId>,
) -> ApiResult<NoContent> {
    CommentService::new(state.service_context())
        .delete_comment(comment_id)
        .await?;
    Ok(NoContent)
}
