//! # Todo Core
//!
//! Domain types for the todo list service.
//!
//! This crate is the functional core of the application: it owns the ordered
//! [`TodoCollection`] and its create/update/delete/search/reorder contract. It
//! performs no I/O, no locking and no logging. Time and identifiers come in
//! through the injected [`TodoEnvironment`], so every operation is
//! deterministic under test.
//!
//! ## Example
//!
//! ```
//! use todo_core::{TodoCollection, TodoEnvironment};
//!
//! let env = TodoEnvironment::system();
//! let mut todos = TodoCollection::new();
//!
//! let milk = todos.create("Buy milk", &env).id();
//! todos.create("Clean house", &env);
//!
//! todos.update(milk, true, "Buy milk and eggs")?;
//!
//! let hits = todos.search("MILK");
//! assert_eq!(hits.len(), 1);
//! assert!(hits[0].completed());
//! # Ok::<(), todo_core::TodoError>(())
//! ```

pub mod collection;
pub mod environment;
pub mod error;
pub mod todo;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use collection::TodoCollection;
pub use environment::{Clock, IdGenerator, SystemClock, TodoEnvironment, UuidGenerator};
pub use error::TodoError;
pub use todo::{Todo, TodoId};
