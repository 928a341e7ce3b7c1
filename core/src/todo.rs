//! The todo record and its identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single todo item
///
/// Fields are read-only from outside the crate. The only way to change a
/// stored todo is [`TodoCollection::update`](crate::TodoCollection::update).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Todo {
    id: TodoId,
    description: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    pub(crate) const fn new(id: TodoId, description: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            description,
            completed: false,
            created_at,
        }
    }

    /// Unique identifier
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Free-form description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the todo is completed
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// When the todo was created
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces both mutable fields at once.
    pub(crate) fn set(&mut self, completed: bool, description: String) {
        self.completed = completed;
        self.description = description;
    }

    /// Case-insensitive substring match against the description.
    ///
    /// `needle` must already be passed through [`fold_case`].
    pub(crate) fn matches(&self, needle: &str) -> bool {
        fold_case(&self.description).contains(needle)
    }
}

/// Lowercases one character at a time, with final sigma folded to `σ`.
///
/// `str::to_lowercase` picks `ς` or `σ` from the surrounding word, so the
/// same letter could fold differently in a query and in a description.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_round_trips_through_display() {
        let id = TodoId::from_uuid(Uuid::new_v4());
        let parsed: TodoId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn todo_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<TodoId>().is_err());
    }

    #[test]
    fn todo_new_starts_incomplete() {
        let id = TodoId::from_uuid(Uuid::new_v4());
        let now = Utc::now();
        let todo = Todo::new(id, "Test todo".to_string(), now);

        assert_eq!(todo.id(), id);
        assert_eq!(todo.description(), "Test todo");
        assert!(!todo.completed());
        assert_eq!(todo.created_at(), now);
    }

    #[test]
    fn matches_ignores_case() {
        let todo = Todo::new(
            TodoId::from_uuid(Uuid::new_v4()),
            "Buy Milk".to_string(),
            Utc::now(),
        );
        assert!(todo.matches("milk"));
        assert!(todo.matches("buy m"));
        assert!(!todo.matches("eggs"));
    }

    #[test]
    fn fold_case_is_per_character() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("Σ"), fold_case("ς"));
        assert_eq!(fold_case("ÄBC"), "äbc");
    }
}
