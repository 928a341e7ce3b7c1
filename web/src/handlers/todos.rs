//! Todo endpoints.
//!
//! - GET    /               - Full page
//! - GET    /todos          - List or search (`?search=`)
//! - POST   /todos          - Create
//! - GET    /todos/:id      - Single todo
//! - GET    /todos/:id/edit - Inline edit form (htmx)
//! - PUT    /todos/:id      - Replace description and completed flag
//! - DELETE /todos/:id      - Delete (idempotent)
//! - POST   /todos/sort     - Reorder from repeated `id` fields
//!
//! Every handler answers in the [`Presentation`] the request asked for:
//! JSON, an htmx fragment, or a full page / redirect to `/`. Fragments that
//! follow a mutation carry the footer totals as an out-of-band swap.
//!
//! Items are only draggable in an unfiltered list: `POST /todos/sort` drops
//! every todo it is not given, so a filtered view must never submit.

use crate::error::AppError;
use crate::extractors::{HxRequest, Presentation};
use crate::service::TodoService;
use crate::templates::{
    IndexPage, StatsFragment, TodoEditFragment, TodoItemFragment, TodoListFragment,
};
use askama::Template;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use todo_core::{Todo, TodoId};

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for listing todos.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring; empty or missing lists everything
    #[serde(default)]
    pub search: String,
}

/// Form submitted to create a todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodoForm {
    /// Description of the new todo
    #[serde(default)]
    pub description: String,
}

/// Form submitted to update a todo.
///
/// `completed` follows checkbox semantics: absent means unchecked.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoForm {
    /// New description
    #[serde(default)]
    pub description: String,
    /// Checkbox value (`on` when checked)
    #[serde(default)]
    pub completed: Option<String>,
}

impl UpdateTodoForm {
    /// Whether the completed checkbox was ticked
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
            .as_deref()
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "on" | "true" | "1"))
    }
}

fn required_description(raw: &str) -> Result<String, AppError> {
    let description = raw.trim();
    if description.is_empty() {
        return Err(AppError::validation("Description is required"));
    }
    Ok(description.to_string())
}

fn reorder_ids(fields: Vec<(String, String)>) -> Vec<TodoId> {
    fields
        .into_iter()
        .filter(|(name, _)| name == "id")
        .filter_map(|(_, value)| value.parse().ok())
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

async fn render_page(todos: &TodoService, list: &[Todo], search: &str) -> Result<Response, AppError> {
    let page = IndexPage {
        todos: list,
        search,
        stats: todos.stats().await,
        sortable: search.is_empty(),
    };
    Ok(Html(page.render()?).into_response())
}

fn render_list(list: &[Todo], sortable: bool) -> Result<String, AppError> {
    Ok(TodoListFragment {
        todos: list,
        sortable,
    }
    .render()?)
}

fn render_item(todo: &Todo) -> Result<String, AppError> {
    Ok(TodoItemFragment {
        todo,
        sortable: true,
    }
    .render()?)
}

// `fragment` followed by the refreshed footer, swapped out-of-band.
async fn with_stats(todos: &TodoService, fragment: String) -> Result<Html<String>, AppError> {
    let stats = StatsFragment {
        stats: todos.stats().await,
    }
    .render()?;
    Ok(Html(fragment + &stats))
}

// ============================================================================
// Handlers
// ============================================================================

/// Full page listing every todo.
///
/// # Errors
///
/// 500 if the page fails to render.
pub async fn index(State(todos): State<TodoService>) -> Result<Response, AppError> {
    let list = todos.all().await;
    render_page(&todos, &list, "").await
}

/// List todos, optionally filtered by `?search=`.
///
/// # Errors
///
/// 500 if the response fails to render.
pub async fn list_todos(
    State(todos): State<TodoService>,
    presentation: Presentation,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let list = todos.search(&query.search).await;

    match presentation {
        Presentation::Json => Ok(Json(list).into_response()),
        Presentation::Fragment => {
            Ok(Html(render_list(&list, query.search.is_empty())?).into_response())
        }
        Presentation::Page => render_page(&todos, &list, &query.search).await,
    }
}

/// Create a todo at the end of the list.
///
/// # Errors
///
/// 422 if the description is blank.
pub async fn create_todo(
    State(todos): State<TodoService>,
    presentation: Presentation,
    Form(form): Form<CreateTodoForm>,
) -> Result<Response, AppError> {
    let description = required_description(&form.description)?;
    let todo = todos.create(description).await;
    tracing::info!(id = %todo.id(), "Todo created");

    match presentation {
        Presentation::Json => Ok((StatusCode::CREATED, Json(todo)).into_response()),
        Presentation::Fragment => {
            let fragment = with_stats(&todos, render_item(&todo)?).await?;
            Ok((StatusCode::CREATED, fragment).into_response())
        }
        Presentation::Page => Ok(Redirect::to("/").into_response()),
    }
}

/// Show a single todo; plain browsers land on its anchor in the page.
///
/// # Errors
///
/// 404 if no todo has that id.
pub async fn get_todo(
    State(todos): State<TodoService>,
    presentation: Presentation,
    Path(id): Path<TodoId>,
) -> Result<Response, AppError> {
    let todo = todos.get(id).await?;

    match presentation {
        Presentation::Json => Ok(Json(todo).into_response()),
        Presentation::Fragment => Ok(Html(render_item(&todo)?).into_response()),
        Presentation::Page => Ok(Redirect::to(&format!("/#todo-{id}")).into_response()),
    }
}

/// Inline edit form for one todo; plain browsers are sent back to the page.
///
/// # Errors
///
/// 404 if no todo has that id.
pub async fn edit_todo(
    State(todos): State<TodoService>,
    HxRequest(htmx): HxRequest,
    Path(id): Path<TodoId>,
) -> Result<Response, AppError> {
    let todo = todos.get(id).await?;
    if !htmx {
        return Ok(Redirect::to("/").into_response());
    }
    Ok(Html(TodoEditFragment { todo: &todo }.render()?).into_response())
}

/// Replace description and completed flag together.
///
/// # Errors
///
/// 422 if the description is blank, 404 if no todo has that id.
pub async fn update_todo(
    State(todos): State<TodoService>,
    presentation: Presentation,
    Path(id): Path<TodoId>,
    Form(form): Form<UpdateTodoForm>,
) -> Result<Response, AppError> {
    let description = required_description(&form.description)?;
    let todo = todos.update(id, form.is_completed(), description).await?;
    tracing::info!(%id, completed = todo.completed(), "Todo updated");

    match presentation {
        Presentation::Json => Ok(Json(todo).into_response()),
        Presentation::Fragment => {
            Ok(with_stats(&todos, render_item(&todo)?).await?.into_response())
        }
        Presentation::Page => Ok(Redirect::to("/").into_response()),
    }
}

/// Delete a todo. Deleting an unknown id succeeds.
///
/// # Errors
///
/// 500 if the footer fails to render.
pub async fn delete_todo(
    State(todos): State<TodoService>,
    presentation: Presentation,
    Path(id): Path<TodoId>,
) -> Result<Response, AppError> {
    todos.delete(id).await;
    tracing::info!(%id, "Todo deleted");

    match presentation {
        Presentation::Json => Ok(StatusCode::NO_CONTENT.into_response()),
        // Empty item body: htmx removes the `<li>`
        Presentation::Fragment => Ok(with_stats(&todos, String::new()).await?.into_response()),
        Presentation::Page => Ok(Redirect::to("/").into_response()),
    }
}

/// Reorder from the full list of ids, in display order.
///
/// Unparsable and unknown ids are skipped; todos left out are dropped.
///
/// # Errors
///
/// 500 if the list fails to render.
pub async fn reorder_todos(
    State(todos): State<TodoService>,
    presentation: Presentation,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let ids = reorder_ids(fields);
    let requested = ids.len();
    let list = todos.reorder(ids).await;
    tracing::info!(requested, kept = list.len(), "Todos reordered");

    match presentation {
        Presentation::Json => Ok(Json(list).into_response()),
        Presentation::Fragment => {
            Ok(with_stats(&todos, render_list(&list, true)?).await?.into_response())
        }
        Presentation::Page => Ok(Redirect::to("/").into_response()),
    }
}
