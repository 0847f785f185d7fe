//! HTTP service for the todo store.
//!
//! # Overview
//! Exposes the in-memory [`Store`] over a small JSON API:
//!
//! - `GET    /api/todos`          — list all todos
//! - `POST   /api/todos`          — create a todo from `{text}`
//! - `PUT    /api/todos/{id}`     — toggle completion
//! - `PUT    /api/todos/{id}/edit` — replace the text from `{text}`
//! - `DELETE /api/todos/{id}`     — remove a todo
//!
//! Lookup failures are 404 with a `{"error": ...}` body; that is the whole
//! error taxonomy. Cross-origin requests are allowed from any origin so a
//! browser front end on another port can talk to the API directly.

pub mod store;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;
use tracing::debug;

pub use store::{Store, StoreError, Todo};

/// Request payload for creating a todo.
///
/// Missing text deserializes to the empty string; the store accepts it
/// unchanged. There is no validation error kind.
#[derive(Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: String,
}

/// Request payload for editing a todo's text.
#[derive(Deserialize)]
pub struct EditTodo {
    #[serde(default)]
    pub text: String,
}

/// Success body for a delete.
#[derive(Serialize)]
pub struct Deleted {
    pub message: &'static str,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Build the router over the given store.
pub fn app(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(toggle_todo).delete(delete_todo))
        .route("/api/todos/{id}/edit", put(edit_todo))
        .layer(CorsLayer::permissive())
        .with_state(db)
}

/// Serve the seeded starter collection on `listener` until the task ends.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app(Store::seeded())).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.create(input.text);
    debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn toggle_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StoreError> {
    db.write().await.toggle(id).map(Json)
}

async fn edit_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<EditTodo>,
) -> Result<Json<Todo>, StoreError> {
    db.write().await.edit(id, input.text).map(Json)
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Deleted>, StoreError> {
    db.write().await.delete(id)?;
    Ok(Json(Deleted {
        message: "Todo deleted successfully",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            text: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["text"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_todo_accepts_missing_text_as_empty() {
        let input: CreateTodo = serde_json::from_str("{}").unwrap();
        assert_eq!(input.text, "");
    }

    #[test]
    fn create_todo_reads_text_field() {
        let input: CreateTodo = serde_json::from_str(r#"{"text":"Buy milk"}"#).unwrap();
        assert_eq!(input.text, "Buy milk");
    }

    #[test]
    fn not_found_renders_error_body() {
        let body = serde_json::json!({ "error": StoreError::NotFound.to_string() });
        assert_eq!(body["error"], "Todo not found");
    }

    #[test]
    fn deleted_serializes_message() {
        let json = serde_json::to_value(Deleted {
            message: "Todo deleted successfully",
        })
        .unwrap();
        assert_eq!(json["message"], "Todo deleted successfully");
    }
}
