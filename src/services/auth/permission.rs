//! Permission enforcement over verified claims.

use crate::error::AuthError;
use crate::services::auth::claims::Claims;

/// Check that `required` is a member of the claimed `permissions` array.
///
/// The lookup is literal: an empty `required` string only passes when the
/// token actually carries an empty permission string, so callers must supply
/// a real permission name to get a meaningful check.
pub fn check_permission(required: &str, claims: &Claims) -> Result<(), AuthError> {
    let held = claims
        .permissions()
        .ok_or(AuthError::MissingPermissionsClaim)?;

    let granted = held
        .as_array()
        .is_some_and(|perms| perms.iter().any(|p| p.as_str() == Some(required)));

    if !granted {
        return Err(AuthError::PermissionDenied);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims_with(value: serde_json::Value) -> Claims {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn held_permission_passes() {
        let claims = claims_with(json!({"permissions": ["get:images", "post:images"]}));
        assert!(check_permission("get:images", &claims).is_ok());
    }

    #[test]
    fn missing_permission_is_denied() {
        let claims = claims_with(json!({"permissions": ["get:images"]}));
        let err = check_permission("delete:images", &claims).unwrap_err();
        assert!(matches!(err, AuthError::PermissionDenied));
    }

    #[test]
    fn absent_permissions_claim_is_its_own_failure() {
        let claims = claims_with(json!({"sub": "auth0|tester"}));
        let err = check_permission("get:images", &claims).unwrap_err();
        assert!(matches!(err, AuthError::MissingPermissionsClaim));
    }

    #[test]
    fn non_array_permissions_claim_is_denied() {
        let claims = claims_with(json!({"permissions": "get:images"}));
        let err = check_permission("get:images", &claims).unwrap_err();
        assert!(matches!(err, AuthError::PermissionDenied));
    }

    #[test]
    fn empty_required_string_is_looked_up_literally() {
        let claims = claims_with(json!({"permissions": ["get:images"]}));
        let err = check_permission("", &claims).unwrap_err();
        assert!(matches!(err, AuthError::PermissionDenied));

        let claims = claims_with(json!({"permissions": [""]}));
        assert!(check_permission("", &claims).is_ok());
    }
}
