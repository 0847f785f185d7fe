//! Domain DTOs for the todo API.
//!
//! These mirror the server's schema but are defined independently so the
//! client crate carries no server dependency; the integration test catches
//! any drift between the two.

use serde::{Deserialize, Serialize};

/// A single todo item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server accepts empty text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Request payload for replacing a todo's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditTodo {
    pub text: String,
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Clone, Deserialize)]
pub struct Deleted {
    pub message: String,
}
