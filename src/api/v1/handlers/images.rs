/*
 * Responsibility
 * - /images handlers behind the authorization gate
 * - Deliberately thin: they demonstrate guard composition and what a
 *   handler receives once the check has passed
 */
use axum::{Json, extract::Path, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::api::v1::dto::images::CreateImageRequest;
use crate::api::v1::extractors::VerifiedClaims;

pub async fn list_images(VerifiedClaims(claims): VerifiedClaims) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "requested_by": claims.subject(),
        "images": [],
    }))
}

pub async fn create_image(
    VerifiedClaims(claims): VerifiedClaims,
    Json(req): Json<CreateImageRequest>,
) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "uploaded_by": claims.subject(),
            "image": {"title": req.title, "url": req.url},
        })),
    )
}

pub async fn delete_image(
    VerifiedClaims(claims): VerifiedClaims,
    Path(image_id): Path<String>,
) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "deleted_by": claims.subject(),
        "deleted": image_id,
    }))
}
