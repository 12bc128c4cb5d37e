//! The authorization gate.
//!
//! One self-contained check per request: header extraction, kid peek, key
//! resolution, full verification, permission check. The first failing stage
//! wins and the protected operation must only run when the whole sequence
//! succeeds.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::error::AuthError;
use crate::services::auth::claims::Claims;
use crate::services::auth::extract;
use crate::services::auth::jwks::{FetchJwks, KeyResolver};
use crate::services::auth::permission;
use crate::services::auth::verify::TokenVerifier;

/// Stateless across requests: every call fetches the key set anew, so
/// concurrent checks are independent of each other.
pub struct AuthGate {
    keys: KeyResolver,
    verifier: TokenVerifier,
}

impl AuthGate {
    pub fn new(fetcher: Arc<dyn FetchJwks>, verifier: TokenVerifier) -> Self {
        Self {
            keys: KeyResolver::new(fetcher),
            verifier,
        }
    }

    /// Run the full authorization sequence and return the verified claims.
    pub async fn authorize(
        &self,
        headers: &HeaderMap,
        required_permission: &str,
    ) -> Result<Claims, AuthError> {
        let token = extract::bearer_token(headers)?;
        // The kid comes from the unverified header; it selects a key and
        // nothing more.
        let kid = self.verifier.peek_kid(token)?;
        let key = self.keys.resolve(&kid).await?;
        let claims = self.verifier.verify(token, &key)?;
        permission::check_permission(required_permission, &claims)?;

        Ok(claims)
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("issuer", &self.verifier.issuer())
            .finish()
    }
}
