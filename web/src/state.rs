//! Application state for Axum handlers.

use crate::service::TodoService;
use axum::extract::FromRef;
use todo_runtime::MetricsRecorder;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; every field is a cheap handle onto shared data.
/// There is no global instance: `main` builds one and hands it to the router.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Todo operations over the shared collection
    pub todos: TodoService,
    /// Prometheus recorder, rendered by `GET /metrics`
    pub metrics: MetricsRecorder,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub const fn new(todos: TodoService, metrics: MetricsRecorder) -> Self {
        Self { todos, metrics }
    }
}

impl FromRef<AppState> for TodoService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.todos.clone()
    }
}

impl FromRef<AppState> for MetricsRecorder {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.metrics.clone()
    }
}
