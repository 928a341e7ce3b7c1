//! Error types for collection operations.

use crate::todo::TodoId;
use thiserror::Error;

/// Errors signalled by [`TodoCollection`](crate::TodoCollection).
///
/// Only point lookups and point updates can fail. Deleting or reordering
/// with unknown ids is a silent no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No todo with the given id is held by the collection
    #[error("Todo with ID {0} not found")]
    NotFound(TodoId),
}
