//! Voter session extractor

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracker_core::SessionKey;

use crate::response::ApiError;

/// Session key of the calling browser
///
/// Inserted into the request extensions by the session middleware.
#[derive(Debug, Clone)]
pub struct VoterSession(pub SessionKey);

impl VoterSession {
    pub fn key(&self) -> &SessionKey {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for VoterSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VoterSession>()
            .cloned()
            .ok_or(ApiError::MissingSession)
    }
}
