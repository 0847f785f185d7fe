//! Cached-list synchronizer over [`TodoClient`].
//!
//! # Design
//! `TodoSync` owns the client cache — a transient, non-authoritative copy of
//! the server's list — plus the loading and error state a presentation layer
//! renders from. It follows the same host-does-IO pattern as the client:
//! every operation is a `start_*` method that returns the request to execute
//! and a `finish_*` method that consumes the response. The host calls the
//! matching `fail_*` method when the transport itself fails.
//!
//! The cache never mutates optimistically: it changes only after the server
//! confirms a mutation, and a failed operation leaves it exactly as it was.
//! There is no automatic retry; reloading is another `start_load`.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, EditTodo, Todo};

const LOAD_FAILED: &str = "Failed to load todos";
const CREATE_FAILED: &str = "Failed to add todo";
const UPDATE_FAILED: &str = "Failed to update todo";
const DELETE_FAILED: &str = "Failed to delete todo";

/// Lifecycle of the initial list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A load request is in flight; present a loading indicator.
    Loading,
    /// The cache reflects the last successful load plus confirmed mutations.
    Ready,
    /// The load failed; present the message with a manual retry action.
    Failed(String),
}

/// Client-side synchronizer holding the cached todo list.
#[derive(Debug)]
pub struct TodoSync {
    client: TodoClient,
    todos: Vec<Todo>,
    load: LoadState,
    error: Option<String>,
}

impl TodoSync {
    /// A synchronizer with an empty cache, waiting for its first load.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: TodoClient::new(base_url),
            todos: Vec::new(),
            load: LoadState::Loading,
            error: None,
        }
    }

    /// The cached list, in server order. Never authoritative.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// The last per-operation failure message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // --- load ---

    /// Begin (or retry) a full list fetch.
    pub fn start_load(&mut self) -> HttpRequest {
        self.load = LoadState::Loading;
        self.error = None;
        self.client.build_list()
    }

    /// Replace the cache with the server's list, or mark the load failed.
    pub fn finish_load(&mut self, response: HttpResponse) {
        match self.client.parse_list(response) {
            Ok(todos) => {
                self.todos = todos;
                self.load = LoadState::Ready;
            }
            Err(_) => self.fail_load(),
        }
    }

    /// Record a transport-level load failure.
    pub fn fail_load(&mut self) {
        self.load = LoadState::Failed(LOAD_FAILED.to_string());
    }

    // --- create ---

    pub fn start_create(&mut self, text: &str) -> Result<HttpRequest, ApiError> {
        self.error = None;
        self.client.build_create(&CreateTodo {
            text: text.to_string(),
        })
    }

    /// Append the server-confirmed item; on failure the cache is unchanged.
    pub fn finish_create(&mut self, response: HttpResponse) {
        match self.client.parse_create(response) {
            Ok(todo) => self.todos.push(todo),
            Err(_) => self.fail_create(),
        }
    }

    pub fn fail_create(&mut self) {
        self.error = Some(CREATE_FAILED.to_string());
    }

    // --- toggle ---

    pub fn start_toggle(&mut self, id: u64) -> HttpRequest {
        self.error = None;
        self.client.build_toggle(id)
    }

    /// Replace the cached item matching the server's returned id.
    pub fn finish_toggle(&mut self, response: HttpResponse) {
        match self.client.parse_toggle(response) {
            Ok(todo) => self.replace(todo),
            Err(_) => self.fail_toggle(),
        }
    }

    pub fn fail_toggle(&mut self) {
        self.error = Some(UPDATE_FAILED.to_string());
    }

    // --- edit ---

    pub fn start_edit(&mut self, id: u64, text: &str) -> Result<HttpRequest, ApiError> {
        self.error = None;
        self.client.build_edit(
            id,
            &EditTodo {
                text: text.to_string(),
            },
        )
    }

    pub fn finish_edit(&mut self, response: HttpResponse) {
        match self.client.parse_edit(response) {
            Ok(todo) => self.replace(todo),
            Err(_) => self.fail_edit(),
        }
    }

    pub fn fail_edit(&mut self) {
        self.error = Some(UPDATE_FAILED.to_string());
    }

    // --- delete ---

    pub fn start_delete(&mut self, id: u64) -> HttpRequest {
        self.error = None;
        self.client.build_delete(id)
    }

    /// Remove the item with `id` once the server confirms the delete.
    pub fn finish_delete(&mut self, id: u64, response: HttpResponse) {
        match self.client.parse_delete(response) {
            Ok(_) => self.todos.retain(|todo| todo.id != id),
            Err(_) => self.fail_delete(),
        }
    }

    pub fn fail_delete(&mut self) {
        self.error = Some(DELETE_FAILED.to_string());
    }

    fn replace(&mut self, updated: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|todo| todo.id == updated.id) {
            *slot = updated;
        }
    }
}
