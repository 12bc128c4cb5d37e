/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone is cheap: everything inside is Arc'd
 */
use std::sync::Arc;

use crate::services::auth::AuthGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthGate>,
}

impl AppState {
    pub fn new(auth: Arc<AuthGate>) -> Self {
        Self { auth }
    }
}
