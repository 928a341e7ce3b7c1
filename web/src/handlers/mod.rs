//! HTTP request handlers.

pub mod health;
pub mod todos;

pub use health::{health_check, metrics, readiness_check};
pub use todos::{
    create_todo, delete_todo, edit_todo, get_todo, index, list_todos, reorder_todos, update_todo,
};
