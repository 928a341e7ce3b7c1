//! HTTP shell for the todo list.
//!
//! This crate is the imperative shell around [`todo_core`]: it parses
//! requests, runs operations through a shared [`todo_runtime::Store`], and
//! renders the result as JSON, an htmx fragment, or a full HTML page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, forms, templates
//! │  - Request parsing                      │  ← Request ids, tracing
//! │  - Response rendering                   │  ← Metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - TodoCollection operations            │  ← Testable at memory speed
//! │  - Ordering, search, reorder rules      │  ← No I/O, no side effects
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data**: form fields, path id, [`Presentation`]
//! 3. **Validate** input (blank descriptions are rejected)
//! 4. **Run** the operation through [`TodoService`]
//! 5. **Render** the owned result for the requested presentation
//!
//! # Example
//!
//! ```ignore
//! use todo_core::TodoEnvironment;
//! use todo_runtime::MetricsRecorder;
//! use todo_web::{AppState, TodoService, build_router};
//!
//! let todos = TodoService::in_memory(TodoEnvironment::system());
//! let app = build_router(AppState::new(todos, MetricsRecorder::new()));
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod state;
pub mod templates;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use extractors::{HX_REQUEST_HEADER, HxRequest, Presentation};
pub use middleware::{REQUEST_ID_HEADER, with_observability};
pub use router::build_router;
pub use service::{TodoService, TodoStats};
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
