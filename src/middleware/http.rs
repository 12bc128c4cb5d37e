//! Transport-level middleware applied to every route: request-id handling,
//! access tracing, body size limit, global timeout.

use std::time::Duration;

use axum::Router;
use axum::http::header::HeaderName;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn apply(router: Router) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    router.layer(
        ServiceBuilder::new()
            // Generate a request id if missing, then echo it on the response.
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(256 * 1024))
            // The JWKS fetch is the only slow dependency on the request
            // path; 15s bounds a hanging provider.
            .layer(TimeoutLayer::new(Duration::from_secs(15))),
    )
}
