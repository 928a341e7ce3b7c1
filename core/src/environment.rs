//! Environment module - injected dependencies.
//!
//! Everything non-deterministic the collection needs (the current time and
//! fresh identifiers) is abstracted behind a trait and handed in through
//! [`TodoEnvironment`]. Production wires [`SystemClock`] and
//! [`UuidGenerator`]; tests wire fixed or sequential implementations.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```
/// use todo_core::environment::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let before = clock.now();
/// assert!(clock.now() >= before);
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh identifiers.
///
/// Implementations must never hand out the same value twice within one
/// process lifetime. A generator that does is tolerated by
/// `TodoCollection::create`, which retries a few times and then switches to
/// random v4 ids.
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier
    fn next_id(&self) -> Uuid;
}

/// Random (v4) UUID generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Environment dependencies for creating todos
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for `created_at` timestamps
    pub clock: Arc<dyn Clock>,
    /// Generator for todo identifiers
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Environment backed by the system clock and random UUIDs.
    #[must_use]
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidGenerator))
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}
