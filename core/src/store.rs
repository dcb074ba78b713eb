//! In-memory todo store.
//!
//! # Design
//! `TodoStore` owns every record behind one `RwLock`. Mutations take the
//! write lock, reads take the read lock, and no operation does I/O while
//! holding it. Records live in an `IndexMap` so listing follows insertion
//! order; deletion uses `shift_remove` to keep that order intact.
//!
//! State is process-local and is lost when the process exits.

use chrono::Utc;
use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::StoreError;
use crate::types::{Todo, TodoId, TodoInput};

/// Authoritative collection of todos.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<IndexMap<TodoId, Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new todo at the end of the collection.
    pub fn create(&self, input: TodoInput) -> Todo {
        let (title, description, completed) = input.into_parts();
        let now = Utc::now();
        let todo = Todo {
            id: TodoId::new(),
            title,
            description,
            completed,
            created_at: now,
            updated_at: now,
        };

        self.todos.write().insert(todo.id, todo.clone());
        debug!(id = %todo.id, "created todo");
        todo
    }

    /// Up to `limit` todos after skipping the first `skip`, in insertion order.
    pub fn list(&self, skip: usize, limit: usize) -> Vec<Todo> {
        let todos = self.todos.read();
        trace!(skip, limit, total = todos.len(), "listing todos");
        todos.values().skip(skip).take(limit).cloned().collect()
    }

    pub fn get(&self, id: &TodoId) -> Result<Todo, StoreError> {
        self.todos
            .read()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    /// Overwrite every mutable field of an existing todo.
    ///
    /// `id`, `created_at` and the listing position are preserved. `updated_at`
    /// is set to the current time, clamped so it never moves backwards.
    pub fn replace(&self, id: &TodoId, input: TodoInput) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write();
        let todo = todos.get_mut(id).ok_or(StoreError::NotFound(*id))?;

        let (title, description, completed) = input.into_parts();
        todo.title = title;
        todo.description = description;
        todo.completed = completed;
        todo.updated_at = Utc::now().max(todo.updated_at);

        debug!(id = %id, "replaced todo");
        Ok(todo.clone())
    }

    pub fn delete(&self, id: &TodoId) -> Result<(), StoreError> {
        if self.todos.write().shift_remove(id).is_none() {
            return Err(StoreError::NotFound(*id));
        }
        debug!(id = %id, "deleted todo");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.todos.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.read().is_empty()
    }
}
