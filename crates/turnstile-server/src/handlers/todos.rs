//! Todo handlers for the protected route group.
//!
//! These run only after the auth gate has passed the request through; they
//! perform no token inspection of their own.

use crate::error::ServerError;
use crate::state::AppState;
use crate::todo::Todo;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Request body for creating a todo.
#[derive(Debug, Deserialize)]
pub struct NewTodo {
    /// Task description.
    pub title: String,
}

/// `POST /todos` - create a task.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ServerError> {
    if body.title.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "title must be non-empty".to_string(),
        ));
    }

    let todo = state.todos.create(body.title);
    tracing::debug!(id = todo.id, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `GET /todos` - list all tasks.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.list())
}

/// `DELETE /todos/{id}` - remove a task.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ServerError> {
    if state.todos.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::NotFound(format!("todo {id}")))
    }
}
