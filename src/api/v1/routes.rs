/*
 * Responsibility
 * - v1 URL structure
 * - Bind the required permission to each protected route; the binding is
 *   fixed at router construction time
 */
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};

use crate::api::v1::handlers::{
    health::health,
    images::{create_image, delete_image, list_images},
};
use crate::middleware::auth::{RouteGuard, permission_guard};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let read_routes = Router::new()
        .route("/images", get(list_images))
        .route_layer(from_fn_with_state(
            RouteGuard::new(state.clone(), "get:images"),
            permission_guard,
        ));

    let create_routes = Router::new()
        .route("/images", post(create_image))
        .route_layer(from_fn_with_state(
            RouteGuard::new(state.clone(), "post:images"),
            permission_guard,
        ));

    let delete_routes = Router::new()
        .route("/images/{image_id}", delete(delete_image))
        .route_layer(from_fn_with_state(
            RouteGuard::new(state, "delete:images"),
            permission_guard,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(read_routes)
        .merge(create_routes)
        .merge(delete_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::services::auth::testkeys;

    fn test_app() -> Router {
        let state = testkeys::app_state();
        Router::new()
            .nest("/api/v1", routes(state.clone()))
            .with_state(state)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_header_never_reaches_the_handler() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/images")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "authorization_header_missing");
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler_with_its_claims() {
        let token = testkeys::mint(&testkeys::claims(&["get:images"]));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/images")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["requested_by"], json!("auth0|tester"));
    }

    #[tokio::test]
    async fn missing_permission_is_forbidden() {
        let token = testkeys::mint(&testkeys::claims(&["get:images"]));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/v1/images/42")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "permission_denied");
    }

    #[tokio::test]
    async fn each_method_carries_its_own_permission() {
        let token = testkeys::mint(&testkeys::claims(&["post:images"]));

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/images")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"title": "sunrise", "url": "https://img.example/1.png"})
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["uploaded_by"], json!("auth0|tester"));
    }

    #[tokio::test]
    async fn expired_token_is_rejected_at_the_boundary() {
        let mut claims = testkeys::claims(&["get:images"]);
        claims["exp"] = json!(testkeys::now() - 600);
        let token = testkeys::mint(&claims);

        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/images")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "token_expired");
    }
}
