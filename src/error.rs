/*
 * Responsibility
 * - AuthError: the single failure taxonomy for the authorization path
 * - IntoResponse implementation (HTTP status / JSON error body)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::jwks::JwksError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Every failure on the authorization path is one of these. All variants are
/// terminal: nothing is retried, and the boundary renders exactly one of
/// them per rejected request.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    MissingAuthHeader,

    #[error("{0}")]
    MalformedAuthHeader(&'static str),

    /// Token header carries no `kid`, so no signing key can be selected.
    #[error("Authorization malformed.")]
    MissingKeyId,

    #[error("Unable to find the appropriate key.")]
    KeyNotFound,

    #[error("Token expired.")]
    TokenExpired,

    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,

    /// Catch-all for decode/verification failures not covered by the expiry
    /// and claim cases: bad signature, corrupt payload, wrong algorithm.
    #[error("Unable to parse authentication token.")]
    InvalidToken,

    #[error("Permissions not included in token.")]
    MissingPermissionsClaim,

    #[error("Permission not found.")]
    PermissionDenied,

    #[error("Unable to fetch signing keys: {0}")]
    Upstream(#[from] JwksError),
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthHeader => "authorization_header_missing",
            AuthError::MalformedAuthHeader(_)
            | AuthError::MissingKeyId
            | AuthError::InvalidToken => "invalid_header",
            AuthError::KeyNotFound => "key_not_found",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims => "invalid_claims",
            AuthError::MissingPermissionsClaim => "permissions_claim_missing",
            AuthError::PermissionDenied => "permission_denied",
            AuthError::Upstream(_) => "upstream_unavailable",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::MalformedAuthHeader(_)
            | AuthError::MissingKeyId
            | AuthError::TokenExpired
            | AuthError::InvalidClaims => StatusCode::UNAUTHORIZED,
            AuthError::KeyNotFound
            | AuthError::InvalidToken
            | AuthError::MissingPermissionsClaim => StatusCode::BAD_REQUEST,
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
            AuthError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_statuses_match_the_taxonomy() {
        let cases = [
            (
                AuthError::MissingAuthHeader,
                "authorization_header_missing",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::MalformedAuthHeader("Token not found."),
                "invalid_header",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::MissingKeyId,
                "invalid_header",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::KeyNotFound,
                "key_not_found",
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::TokenExpired,
                "token_expired",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::InvalidClaims,
                "invalid_claims",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::InvalidToken,
                "invalid_header",
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::MissingPermissionsClaim,
                "permissions_claim_missing",
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::PermissionDenied,
                "permission_denied",
                StatusCode::FORBIDDEN,
            ),
            (
                AuthError::Upstream(JwksError::Transport("connection refused".into())),
                "upstream_unavailable",
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, code, status) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.status(), status);
        }
    }

    #[test]
    fn response_carries_the_error_status() {
        let response = AuthError::PermissionDenied.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
