//! Health check and metrics endpoints.
//!
//! These endpoints are used by load balancers and monitoring systems
//! to verify service health.

use crate::service::{TodoService, TodoStats};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use todo_runtime::MetricsRecorder;

/// Simple health check endpoint (for basic liveness).
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness body.
#[derive(Debug, Serialize)]
pub struct Readiness {
    /// Always `ready` once the store answers
    pub status: &'static str,
    /// Number of todos held
    pub todos: usize,
    /// Number of todos still open
    pub remaining: usize,
}

/// Readiness check that takes the store lock once.
///
/// # Endpoint
///
/// ```text
/// GET /ready
/// ```
///
/// # Response
///
/// ```json
/// { "status": "ready", "todos": 3, "remaining": 2 }
/// ```
pub async fn readiness_check(State(todos): State<TodoService>) -> Json<Readiness> {
    let TodoStats { total, remaining } = todos.stats().await;
    Json(Readiness {
        status: "ready",
        todos: total,
        remaining,
    })
}

/// Prometheus scrape endpoint; 404 when metrics are disabled.
///
/// # Endpoint
///
/// ```text
/// GET /metrics
/// ```
#[allow(clippy::unused_async)]
pub async fn metrics(State(recorder): State<MetricsRecorder>) -> Response {
    match recorder.render() {
        Some(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
