//! Extractor handing verified claims to handlers.
//!
//! The route guard inserts `Claims` into request extensions after a
//! successful check. A missing value means the route was not wired through
//! the guard, which is rejected rather than treated as anonymous access.

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use crate::services::auth::Claims;
use crate::state::AppState;

pub struct VerifiedClaims(pub Claims);

impl FromRequestParts<AppState> for VerifiedClaims
where
    AppState: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(VerifiedClaims)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
