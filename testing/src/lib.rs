//! # Todo Testing
//!
//! Testing utilities and helpers for the todo service.
//!
//! This crate provides:
//! - Deterministic implementations of the environment traits
//! - Fixtures for building and inspecting collections
//! - A Given-When-Then harness for collection operations
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use todo_testing::{collection_with, descriptions};
//!
//! let (mut todos, ids) = collection_with(&["A", "B", "C"]);
//! todos.reorder(&[ids[2], ids[0]]);
//! assert_eq!(descriptions(todos.all()), vec!["C", "A"]);
//! ```

use chrono::{DateTime, Utc};
use todo_core::environment::{Clock, IdGenerator};


/// Deterministic environment implementations.
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use todo_core::TodoEnvironment;
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_testing::mocks::FixedClock;
    /// use todo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }

        /// The instant this clock is frozen at
        #[must_use]
        pub const fn time(&self) -> DateTime<Utc> {
            self.time
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Predictable ids: `00000000-0000-0000-0000-000000000001`, `...0002`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is 1
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::from_u128(u128::from(self.next.fetch_add(1, Ordering::Relaxed)) + 1)
        }
    }

    /// Environment with [`test_clock`] and a fresh [`SequentialIdGenerator`]
    #[must_use]
    pub fn test_environment() -> TodoEnvironment {
        TodoEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(SequentialIdGenerator::new()),
        )
    }
}

/// Builders and inspectors for collections.
pub mod fixtures {
    use crate::mocks::test_environment;
    use todo_core::{Todo, TodoCollection, TodoId};

    /// Build a collection holding one incomplete todo per description.
    ///
    /// Returns the ids in the order given.
    #[must_use]
    pub fn collection_with(descriptions: &[&str]) -> (TodoCollection, Vec<TodoId>) {
        let todos = TodoCollection::seeded(descriptions.iter().copied(), &test_environment());
        let ids = todos.all().iter().map(Todo::id).collect();
        (todos, ids)
    }

    /// Descriptions of `todos`, in order.
    #[must_use]
    pub fn descriptions<'a, I>(todos: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Todo>,
    {
        todos
            .into_iter()
            .map(|todo| todo.description().to_string())
            .collect()
    }
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Short printable descriptions, empty included, with some non-ASCII
    /// letters whose case mapping is not one-to-one in context.
    pub fn description() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ΣσςΔδÄä]{0,16}"
    }

    /// Between zero and `max` descriptions.
    pub fn descriptions(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(description(), 0..=max)
    }

    /// Indices into a collection of `len` todos, possibly repeated and possibly
    /// past the end (which the caller maps to unknown ids).
    pub fn reorder_indices(len: usize) -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0..len + 2, 0..=len + 2)
    }
}

// Re-export commonly used items
pub use collection_test::CollectionTest;
pub use fixtures::{collection_with, descriptions};
pub use mocks::{FixedClock, SequentialIdGenerator, test_clock, test_environment};
