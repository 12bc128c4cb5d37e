//! Route guard: run the authorization gate, then hand verified claims to the
//! handler through request extensions.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::error::AuthError;
use crate::state::AppState;

/// Per-route binding of the permission a protected operation requires.
///
/// Built once at router construction; the permission stays fixed for the
/// life of the route rather than being discovered per request.
#[derive(Clone)]
pub struct RouteGuard {
    state: AppState,
    permission: &'static str,
}

impl RouteGuard {
    pub fn new(state: AppState, permission: &'static str) -> Self {
        Self { state, permission }
    }
}

/// Middleware body for `axum::middleware::from_fn_with_state`.
///
/// Any failure short-circuits before `next.run`, so the handler never sees
/// an unauthorized request.
pub async fn permission_guard(
    State(guard): State<RouteGuard>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = match guard
        .state
        .auth
        .authorize(req.headers(), guard.permission)
        .await
    {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(
                code = err.code(),
                permission = guard.permission,
                "authorization failed"
            );
            return Err(err);
        }
    };

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
