//! The verified claim set.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claims decoded from a token that passed full verification.
///
/// Only `TokenVerifier` produces these on the request path; everything
/// downstream reads them without modifying them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(serde_json::Map<String, Value>);

impl Claims {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// The raw `permissions` claim, if the token carries one.
    pub fn permissions(&self) -> Option<&Value> {
        self.get("permissions")
    }
}
