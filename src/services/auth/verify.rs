//! Token verification.
//!
//! Two phases: an untrusted peek at the token header to learn which signing
//! key it claims to be signed with, then full verification once that key has
//! been resolved. The peek grants no trust; its result is only good for key
//! lookup and must never be treated as authoritative.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};

use crate::error::AuthError;
use crate::services::auth::claims::Claims;
use crate::services::auth::jwks::Jwk;

/// Verifies bearer tokens against one configured algorithm family, one
/// expected audience, and the issuer derived from the provider domain.
pub struct TokenVerifier {
    audience: String,
    issuer: String,
    algorithms: Vec<Algorithm>,
    leeway_seconds: u64,
}

impl TokenVerifier {
    pub fn new(
        domain: &str,
        audience: impl Into<String>,
        algorithms: Vec<Algorithm>,
        leeway_seconds: u64,
    ) -> Self {
        let algorithms = if algorithms.is_empty() {
            vec![Algorithm::RS256]
        } else {
            algorithms
        };

        Self {
            audience: audience.into(),
            issuer: format!("https://{domain}/"),
            algorithms,
            leeway_seconds,
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Read the `kid` from the token header without validating anything.
    pub fn peek_kid(&self, token: &str) -> Result<String, AuthError> {
        let header = jsonwebtoken::decode_header(token).map_err(|_| AuthError::InvalidToken)?;
        header.kid.ok_or(AuthError::MissingKeyId)
    }

    /// Full verification: signature against `key`, then expiry, audience and
    /// issuer. Returns the decoded claim set unmodified.
    ///
    /// An expired token reports `TokenExpired` even when its audience or
    /// issuer are also wrong; the expiry check runs first.
    pub fn verify(&self, token: &str, key: &Jwk) -> Result<Claims, AuthError> {
        // The declared algorithm is attacker-controlled; it is only accepted
        // if it belongs to the configured family.
        let header = jsonwebtoken::decode_header(token).map_err(|_| AuthError::InvalidToken)?;
        if !self.algorithms.contains(&header.alg) {
            return Err(AuthError::InvalidToken);
        }

        let decoding_key =
            DecodingKey::from_rsa_components(&key.n, &key.e).map_err(|_| AuthError::InvalidToken)?;

        let mut validation = Validation::new(header.alg);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.leeway = self.leeway_seconds;

        let data = jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::InvalidClaims,
                _ => AuthError::InvalidToken,
            },
        )?;

        Ok(data.claims)
    }
}
