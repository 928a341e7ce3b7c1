//! Business layer between HTTP handlers and the todo collection.
//!
//! `TodoService` is a thin adapter: it takes the store lock, runs one
//! collection operation, and hands back owned copies. Callers never see a
//! reference into the shared collection, so the only way to change a stored
//! todo is through [`TodoService::update`].

use std::sync::Arc;
use todo_core::{Todo, TodoCollection, TodoEnvironment, TodoError, TodoId};
use todo_runtime::{Store, TodoMetrics};

/// Totals shown in the page footer and the readiness probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct TodoStats {
    /// Number of todos
    pub total: usize,
    /// Number of todos not yet completed
    pub remaining: usize,
}

/// Todo operations over a shared [`Store`].
#[derive(Clone, Debug)]
pub struct TodoService {
    store: Store<TodoCollection>,
    env: Arc<TodoEnvironment>,
}

impl TodoService {
    /// Create a service over `store`, creating todos with `env`.
    #[must_use]
    pub fn new(store: Store<TodoCollection>, env: TodoEnvironment) -> Self {
        Self {
            store,
            env: Arc::new(env),
        }
    }

    /// Service over a fresh, empty collection.
    #[must_use]
    pub fn in_memory(env: TodoEnvironment) -> Self {
        Self::new(Store::new(TodoCollection::new()), env)
    }

    /// Append one todo per description, in order.
    pub async fn seed<I, D>(&self, descriptions: I) -> usize
    where
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        let env = Arc::clone(&self.env);
        let size = self
            .store
            .update(move |todos| {
                for description in descriptions {
                    todos.create(description, &env);
                }
                todos.len()
            })
            .await;
        TodoMetrics::record_size(size);
        size
    }

    /// Create a todo at the end of the list.
    pub async fn create(&self, description: String) -> Todo {
        let env = Arc::clone(&self.env);
        let (todo, size) = self
            .store
            .update(move |todos| {
                let todo = todos.create(description, &env).clone();
                (todo, todos.len())
            })
            .await;
        TodoMetrics::record_operation("create");
        TodoMetrics::record_size(size);
        tracing::debug!(id = %todo.id(), "Todo created");
        todo
    }

    /// Delete a todo; unknown ids are ignored.
    pub async fn delete(&self, id: TodoId) {
        let (removed, size) = self
            .store
            .update(|todos| (todos.delete(id), todos.len()))
            .await;
        TodoMetrics::record_operation("delete");
        TodoMetrics::record_size(size);
        tracing::debug!(%id, removed, "Todo delete");
    }

    /// Overwrite `completed` and `description` of a todo.
    ///
    /// # Errors
    ///
    /// [`TodoError::NotFound`] if no todo has that id.
    pub async fn update(
        &self,
        id: TodoId,
        completed: bool,
        description: String,
    ) -> Result<Todo, TodoError> {
        let result = self
            .store
            .update(|todos| todos.update(id, completed, description).cloned())
            .await;
        TodoMetrics::record_operation("update");
        match &result {
            Ok(_) => tracing::debug!(%id, completed, "Todo updated"),
            Err(_) => TodoMetrics::record_not_found("update"),
        }
        result
    }

    /// Look a todo up by id.
    ///
    /// # Errors
    ///
    /// [`TodoError::NotFound`] if no todo has that id.
    pub async fn get(&self, id: TodoId) -> Result<Todo, TodoError> {
        let result = self.store.state(|todos| todos.get(id).cloned()).await;
        TodoMetrics::record_operation("get");
        if result.is_err() {
            TodoMetrics::record_not_found("get");
        }
        result
    }

    /// Case-insensitive substring search; an empty query lists everything.
    pub async fn search(&self, query: &str) -> Vec<Todo> {
        TodoMetrics::record_operation("search");
        self.store
            .state(|todos| todos.search(query).into_iter().cloned().collect())
            .await
    }

    /// Every todo in display order.
    pub async fn all(&self) -> Vec<Todo> {
        TodoMetrics::record_operation("all");
        self.store.state(|todos| todos.all().to_vec()).await
    }

    /// Replace the display order; todos not named in `ids` are dropped.
    pub async fn reorder(&self, ids: Vec<TodoId>) -> Vec<Todo> {
        let reordered = self
            .store
            .update(move |todos| todos.reorder(&ids).to_vec())
            .await;
        TodoMetrics::record_operation("reorder");
        TodoMetrics::record_size(reordered.len());
        tracing::debug!(count = reordered.len(), "Todos reordered");
        reordered
    }

    /// Current totals.
    pub async fn stats(&self) -> TodoStats {
        self.store
            .state(|todos| TodoStats {
                total: todos.len(),
                remaining: todos.remaining_count(),
            })
            .await
    }
}
