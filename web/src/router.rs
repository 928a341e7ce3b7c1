//! Router configuration for the todo server.
//!
//! Builds the complete Axum router with all endpoints.

use crate::assets::serve_asset;
use crate::handlers::{
    create_todo, delete_todo, edit_todo, get_todo, health_check, index, list_todos, metrics,
    readiness_check, reorder_todos, update_todo,
};
use crate::middleware::with_observability;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the complete Axum router.
///
/// Configures:
/// - The page and its htmx fragments under `/` and `/todos`
/// - Embedded static assets under `/static`
/// - Health, readiness and metrics endpoints
///
/// Every route is wrapped by [`with_observability`].
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/todos", get(list_todos).post(create_todo))
        // Static segments win over `:id` in the matcher
        .route("/todos/sort", post(reorder_todos))
        .route(
            "/todos/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/todos/:id/edit", get(edit_todo))
        .route("/static/*path", get(serve_asset))
        // Operational endpoints
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics))
        .with_state(state);

    with_observability(router)
}
