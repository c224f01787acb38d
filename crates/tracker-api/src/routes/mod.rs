//! Route definitions
//!
//! JSON API routes mounted under /api, health routes at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{comments, health, matches, votes};
use crate::state::AppState;

/// Create the API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new().merge(match_routes()).merge(comment_routes())
}

/// Match, vote and per-match comment routes
fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/matches", get(matches::list_matches))
        .route("/matches/:match_id", get(matches::get_match))
        .route(
            "/matches/:match_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/matches/:match_id/vote/:position",
            post(votes::cast_vote),
        )
        .route("/matches/:match_id/cancel-vote", post(votes::cancel_vote))
}

/// Single comment routes; POST variants serve plain HTML forms
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/:comment_id", get(comments::get_comment))
        .route(
            "/comments/:comment_id/edit",
            post(comments::edit_comment).put(comments::edit_comment),
        )
        .route(
            "/comments/:comment_id/delete",
            post(comments::delete_comment).delete(comments::delete_comment),
        )
}
