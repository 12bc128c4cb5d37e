//! Bearer token extraction from the `Authorization` header.

use axum::http::{HeaderMap, header};

use crate::error::AuthError;

/// Pull the bearer token out of the request headers.
///
/// The header value must be exactly `Bearer <token>`: a case-insensitive
/// scheme followed by a single token, nothing after it. The token part is
/// returned verbatim.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader("Authorization header must be bearer token."))?;

    let mut parts = value.split_whitespace();

    let scheme = parts.next().unwrap_or("");
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedAuthHeader(
            "Authorization header must start with \"Bearer\".",
        ));
    }

    let token = parts
        .next()
        .ok_or(AuthError::MalformedAuthHeader("Token not found."))?;

    if parts.next().is_some() {
        return Err(AuthError::MalformedAuthHeader(
            "Authorization header must be bearer token.",
        ));
    }

    Ok(token)
}
