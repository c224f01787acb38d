//! Session cookie middleware
//!
//! Every API request carries a voter session. Requests without a usable
//! cookie get a fresh UUID v4 token, set on the response.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;
use tracker_common::SessionConfig;
use tracker_core::SessionKey;
use uuid::Uuid;

use crate::extractors::VoterSession;
use crate::response::ApiError;
use crate::state::AppState;

/// Resolve the voter session and expose it to handlers
pub async fn ensure_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let config = &state.config().session;

    if let Some(key) = jar
        .get(&config.cookie_name)
        .and_then(|cookie| SessionKey::parse(cookie.value()).ok())
    {
        request.extensions_mut().insert(VoterSession(key));
        return next.run(request).await;
    }

    let token = Uuid::new_v4().to_string();
    let key = match SessionKey::parse(token.clone()) {
        Ok(key) => key,
        Err(e) => return ApiError::internal(e).into_response(),
    };
    debug!("Issuing new voter session");

    request.extensions_mut().insert(VoterSession(key));
    let response = next.run(request).await;

    (jar.add(session_cookie(config, token)), response).into_response()
}

/// Cookie carrying a session token
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(config.secure)
        .build()
}
