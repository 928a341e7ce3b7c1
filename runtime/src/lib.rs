//! # Todo Runtime
//!
//! Runtime pieces for the todo service: the [`Store`] that owns shared state
//! behind an exclusive-write lock, and Prometheus [`metrics`].
//!
//! The domain collection in `todo-core` is deliberately unsynchronized.
//! Anything that serves concurrent requests wraps it in a `Store` and passes
//! that Store around explicitly; there is no global instance.

pub mod metrics;
pub mod store;

pub use metrics::{MetricsError, MetricsRecorder, StoreMetrics, TodoMetrics};
pub use store::Store;
