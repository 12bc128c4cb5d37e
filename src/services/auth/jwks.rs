//! JWKS fetch and signing-key selection.
//!
//! The provider's key set is fetched fresh for every verification: no cache,
//! no retry. Concurrent checks perform independent fetches, which keeps this
//! path stateless at the cost of redundant network calls.

use std::{future::Future, pin::Pin, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// One published key, reduced to the fields verification needs. Anything
/// else the provider includes (`alg`, `x5c`, ...) is dropped at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub kid: String,
    #[serde(rename = "use")]
    pub usage: String,
    pub n: String,
    pub e: String,
}

/// The provider's key set, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// First key whose `kid` matches wins; duplicates are not an error.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JwksError {
    #[error("key set request failed: {0}")]
    Transport(String),
    #[error("key set document malformed: {0}")]
    Decode(String),
}

/// Fetch seam for the provider's key-discovery document.
///
/// Kept as a trait object so tests can substitute a fixed key set for the
/// network without touching process-wide state.
pub trait FetchJwks: Send + Sync {
    fn fetch<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<JwkSet, JwksError>> + Send + 'a>>;
}

/// HTTP fetcher against `https://<domain>/.well-known/jwks.json`.
///
/// Relies on the client's transport defaults: no retry and no timeout
/// override here.
pub struct HttpJwksFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpJwksFetcher {
    pub fn new(domain: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("https://{domain}/.well-known/jwks.json"),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FetchJwks for HttpJwksFetcher {
    fn fetch<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<JwkSet, JwksError>> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.url)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| JwksError::Transport(e.to_string()))?;

            response
                .json::<JwkSet>()
                .await
                .map_err(|e| JwksError::Decode(e.to_string()))
        })
    }
}

/// Resolves a token's declared `kid` against a freshly fetched key set.
pub struct KeyResolver {
    fetcher: Arc<dyn FetchJwks>,
}

impl KeyResolver {
    pub fn new(fetcher: Arc<dyn FetchJwks>) -> Self {
        Self { fetcher }
    }

    pub async fn resolve(&self, kid: &str) -> Result<Jwk, AuthError> {
        let keys = self.fetcher.fetch().await.map_err(|e| {
            tracing::warn!(error = %e, "JWKS fetch failed");
            AuthError::Upstream(e)
        })?;

        keys.find(kid).cloned().ok_or(AuthError::KeyNotFound)
    }
}
