//! The authoritative in-memory todo collection.
//!
//! # Design
//! `Store` owns a `Vec<Todo>` plus a `next_id` counter and exposes exactly
//! the five collection operations the HTTP layer needs. Ids are assigned
//! monotonically and never reused, even after deletes — the counter only
//! ever moves forward. Collection order is insertion order; there is no
//! reorder operation. All state is lost on restart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Errors produced by store lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Todo not found")]
    NotFound,
}

/// Owned, in-memory collection of todos.
///
/// The store is the only authority over the collection; callers mutate it
/// exclusively through these methods. A failed lookup never changes the
/// collection.
#[derive(Debug)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Store {
    /// An empty store; the first created item gets id 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// The starter collection the binary serves on boot.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.create("Learn JavaScript".to_string());
        store.create("Learn React".to_string());
        store.create("Build a todo app".to_string());
        store
    }

    /// Full collection in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Append a new incomplete item with the next id.
    ///
    /// Empty text is accepted as-is; the store performs no validation.
    pub fn create(&mut self, text: String) -> Todo {
        let todo = Todo {
            id: self.next_id,
            text,
            completed: false,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Flip the completion flag of the item with `id`.
    pub fn toggle(&mut self, id: u64) -> Result<Todo, StoreError> {
        let todo = self.find_mut(id)?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    /// Replace the text of the item with `id`; `completed` is untouched.
    pub fn edit(&mut self, id: u64, text: String) -> Result<Todo, StoreError> {
        let todo = self.find_mut(id)?;
        todo.text = text;
        Ok(todo.clone())
    }

    /// Remove the item with `id`. Its id is never handed out again.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound)?;
        self.todos.remove(index);
        Ok(())
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Todo, StoreError> {
        self.todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
