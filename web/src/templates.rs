//! Server-side HTML rendered with askama.
//!
//! Templates live in `web/templates/` and are compiled into the binary.
//! Output is HTML-escaped by default, so descriptions are safe to echo.

use crate::service::TodoStats;
use askama::Template;
use todo_core::Todo;

/// Full page: create form, search box, list and footer.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    /// Todos to list, in display order
    pub todos: &'a [Todo],
    /// Current search query, echoed into the search box
    pub search: &'a str,
    /// Footer totals
    pub stats: TodoStats,
    /// Whether items may be dragged; off while the list is filtered
    pub sortable: bool,
}

/// The `<li>` items of the list, swapped into `#todo-list`.
#[derive(Template)]
#[template(path = "todo_list.html")]
pub struct TodoListFragment<'a> {
    /// Todos to list, in display order
    pub todos: &'a [Todo],
    /// Whether items may be dragged; off while the list is filtered
    pub sortable: bool,
}

/// A single `<li>` item.
#[derive(Template)]
#[template(path = "todo_item.html")]
pub struct TodoItemFragment<'a> {
    /// The todo to render
    pub todo: &'a Todo,
    /// Whether the item may be dragged
    pub sortable: bool,
}

/// Footer totals, swapped out-of-band next to a mutation's fragment.
#[derive(Template)]
#[template(path = "stats.html")]
pub struct StatsFragment {
    /// Current totals
    pub stats: TodoStats,
}

/// Inline edit form replacing a single item.
#[derive(Template)]
#[template(path = "todo_edit.html")]
pub struct TodoEditFragment<'a> {
    /// The todo being edited
    pub todo: &'a Todo,
}
