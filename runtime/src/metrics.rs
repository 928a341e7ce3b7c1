//! Prometheus metrics for observability and monitoring.
//!
//! This module provides metric collection for:
//! - Store lock acquisition (reads, writes, wait time)
//! - Todo operations by kind
//! - Collection size
//!
//! Recording is always safe: without an installed recorder the `metrics`
//! macros are no-ops, which is what unit tests rely on.
//!
//! # Example
//!
//! ```rust,no_run
//! use todo_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut recorder = MetricsRecorder::new();
//! recorder.install()?;
//!
//! // Later, from an HTTP handler
//! let body = recorder.render().unwrap_or_default();
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_gauge, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use thiserror::Error;

// Re-export metrics macros for use in other modules
pub use metrics::{counter, gauge, histogram};

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Process-wide Prometheus recorder.
///
/// Rendering is served by the application router rather than a dedicated
/// listener, so this only owns the handle.
#[derive(Clone, Default)]
pub struct MetricsRecorder {
    handle: Option<PrometheusHandle>,
}

impl MetricsRecorder {
    /// Create a recorder that has not been installed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Register metric descriptions and install the global recorder.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter cannot be built or installed.
    ///
    /// # Note
    ///
    /// If a global recorder is already installed (e.g., in tests), this
    /// returns `Ok` and leaves `self` without a handle; check
    /// [`is_installed`](Self::is_installed).
    pub fn install(&mut self) -> Result<(), MetricsError> {
        register_metrics();

        let builder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[0.000_01, 0.000_1, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    Ok(())
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            }
        }
    }

    /// Whether [`install`](Self::install) produced a handle.
    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.handle.is_some()
    }

    /// Render current metrics in Prometheus format.
    ///
    /// Returns `None` if the recorder hasn't been installed.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

impl std::fmt::Debug for MetricsRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRecorder")
            .field("installed", &self.is_installed())
            .finish()
    }
}

/// Register all metric descriptions.
fn register_metrics() {
    // Store Metrics
    describe_counter!("store_reads_total", "Total number of shared-lock state reads");
    describe_counter!("store_writes_total", "Total number of exclusive-lock state updates");
    describe_histogram!(
        "store_lock_wait_duration_seconds",
        "Time spent waiting to acquire the store lock"
    );

    // Todo Metrics
    describe_counter!(
        "todo_operations_total",
        "Total number of todo operations, labelled by operation"
    );
    describe_counter!(
        "todo_not_found_total",
        "Total number of lookups or updates addressing an unknown id"
    );
    describe_gauge!("todo_collection_size", "Number of todos currently held");
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record a read of the shared state.
    pub fn record_read(wait: Duration) {
        counter!("store_reads_total").increment(1);
        histogram!("store_lock_wait_duration_seconds", "mode" => "read").record(wait.as_secs_f64());
    }

    /// Record an exclusive update of the shared state.
    pub fn record_write(wait: Duration) {
        counter!("store_writes_total").increment(1);
        histogram!("store_lock_wait_duration_seconds", "mode" => "write").record(wait.as_secs_f64());
    }
}

/// Todo operation metrics recorder.
pub struct TodoMetrics;

impl TodoMetrics {
    /// Record one operation (`create`, `update`, `search`, ...).
    pub fn record_operation(operation: &'static str) {
        counter!("todo_operations_total", "operation" => operation).increment(1);
    }

    /// Record an operation that addressed an unknown id.
    pub fn record_not_found(operation: &'static str) {
        counter!("todo_not_found_total", "operation" => operation).increment(1);
    }

    /// Record the current collection size.
    #[allow(clippy::cast_precision_loss)] // Collection sizes are far below 2^52
    pub fn record_size(size: usize) {
        gauge!("todo_collection_size").set(size as f64);
    }
}
