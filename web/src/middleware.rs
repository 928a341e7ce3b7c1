//! Axum middleware for request tracking and caching correctness.
//!
//! This module provides:
//! - **Request IDs**: every request carries `x-request-id`, generated when the
//!   client sent none, and the same value is echoed on the response
//! - **Tracing**: one `http_request` span per request, tagged with the request id
//! - **Vary**: HTML responses depend on `HX-Request` and `Accept`, so caches
//!   must key on them
//!
//! # Example
//!
//! ```ignore
//! use todo_web::middleware::with_observability;
//!
//! let app = with_observability(Router::new().route("/", get(index)));
//! ```

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

/// Header name for the request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Value of the `Vary` header set on every response.
pub const VARY_VALUE: &str = "HX-Request, Accept";

/// Wrap `router` with request ids, request tracing and the `Vary` header.
///
/// Layers run outermost first: the request id is assigned before the trace
/// span opens, so the span can record it.
pub fn with_observability<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(vary_on_presentation))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Create the per-request tracing span.
pub fn make_request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

/// Mark responses as varying on the headers that select their rendition.
pub async fn vary_on_presentation(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .append(header::VARY, HeaderValue::from_static(VARY_VALUE));
    response
}
