//! The ordered todo collection.
//!
//! Order is display order: insertion order until the first
//! [`reorder`](TodoCollection::reorder), the caller's order afterwards.
//! Every operation is a linear scan over a small in-memory vector.

use crate::environment::TodoEnvironment;
use crate::error::TodoError;
use crate::todo::{Todo, TodoId, fold_case};
use std::collections::HashMap;
use uuid::Uuid;

/// Draws taken from the injected [`IdGenerator`](crate::IdGenerator) before
/// falling back to random ids.
const ID_ATTEMPTS: usize = 8;

/// Ordered, exclusively-owned set of todos.
///
/// The collection is not synchronized. Share it behind a lock (see the
/// runtime `Store`) when more than one task needs access.
#[derive(Clone, Debug, Default)]
pub struct TodoCollection {
    todos: Vec<Todo>,
}

impl TodoCollection {
    /// Creates an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Creates a collection pre-seeded with one incomplete todo per description.
    #[must_use]
    pub fn seeded<I, D>(descriptions: I, env: &TodoEnvironment) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        let mut collection = Self::new();
        for description in descriptions {
            collection.create(description, env);
        }
        collection
    }

    /// Appends a new incomplete todo and returns it.
    ///
    /// No validation happens here; an empty description is accepted.
    pub fn create(&mut self, description: impl Into<String>, env: &TodoEnvironment) -> &Todo {
        let id = self.fresh_id(env);
        let index = self.todos.len();
        self.todos
            .push(Todo::new(id, description.into(), env.clock.now()));
        &self.todos[index]
    }

    /// Removes the todo with `id`, keeping the others in order.
    ///
    /// Unknown ids are ignored. Returns whether anything was removed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.todos.remove(index);
        true
    }

    /// Overwrites `completed` and `description` of the todo with `id`.
    ///
    /// # Errors
    ///
    /// [`TodoError::NotFound`] if no todo has that id; the collection is left
    /// untouched.
    pub fn update(
        &mut self,
        id: TodoId,
        completed: bool,
        description: impl Into<String>,
    ) -> Result<&Todo, TodoError> {
        let index = self.position(id).ok_or(TodoError::NotFound(id))?;
        let todo = &mut self.todos[index];
        todo.set(completed, description.into());
        Ok(todo)
    }

    /// Looks up a todo by id.
    ///
    /// # Errors
    ///
    /// [`TodoError::NotFound`] if no todo has that id.
    pub fn get(&self, id: TodoId) -> Result<&Todo, TodoError> {
        self.todos
            .iter()
            .find(|todo| todo.id() == id)
            .ok_or(TodoError::NotFound(id))
    }

    /// Todos whose description contains `query`, ignoring case.
    ///
    /// An empty query matches everything. Results keep collection order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Todo> {
        if query.is_empty() {
            return self.todos.iter().collect();
        }
        let needle = fold_case(query);
        self.todos.iter().filter(|todo| todo.matches(&needle)).collect()
    }

    /// Every todo in current order
    #[must_use]
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    /// Rebuilds the order from `ids`.
    ///
    /// Ids that are unknown, or repeated after their first occurrence, are
    /// skipped. Todos whose id is not listed are dropped from the collection.
    pub fn reorder(&mut self, ids: &[TodoId]) -> &[Todo] {
        let mut by_id: HashMap<TodoId, Todo> = self
            .todos
            .drain(..)
            .map(|todo| (todo.id(), todo))
            .collect();
        self.todos = ids.iter().filter_map(|id| by_id.remove(id)).collect();
        &self.todos
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the collection holds no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed()).count()
    }

    /// Returns the number of todos still open
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == id)
    }

    // A well-behaved generator needs one draw. One that keeps repeating
    // itself gets ID_ATTEMPTS draws before random v4 ids take over.
    fn fresh_id(&self, env: &TodoEnvironment) -> TodoId {
        let drawn = (0..ID_ATTEMPTS)
            .map(|_| TodoId::from_uuid(env.ids.next_id()))
            .find(|&id| self.position(id).is_none());
        if let Some(id) = drawn {
            return id;
        }
        loop {
            let id = TodoId::from_uuid(Uuid::new_v4());
            if self.position(id).is_none() {
                return id;
            }
        }
    }
}
