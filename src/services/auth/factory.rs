/// Factory: build the `AuthGate` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::gate::AuthGate;
use crate::services::auth::jwks::HttpJwksFetcher;
use crate::services::auth::verify::TokenVerifier;

pub fn build_auth_gate(config: &Config) -> Arc<AuthGate> {
    let fetcher = Arc::new(HttpJwksFetcher::new(&config.auth_domain));

    let verifier = TokenVerifier::new(
        &config.auth_domain,
        &config.auth_audience,
        config.auth_algorithms.clone(),
        config.auth_leeway_seconds,
    );

    Arc::new(AuthGate::new(fetcher, verifier))
}
