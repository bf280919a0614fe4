//! In-memory record store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{NewTodo, Todo, TodoId, TodoPatch},
    ports::{TodoStore, TodoStoreError, TodoStoreResult},
};

/// Thread-safe in-memory todo store.
///
/// Records are kept in insertion order. Nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    state: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `todos`.
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            state: Arc::new(RwLock::new(todos)),
        }
    }
}

fn lock_error(err: impl ToString) -> TodoStoreError {
    TodoStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create(&self, new_todo: NewTodo) -> TodoStoreResult<Todo> {
        let mut state = self.state.write().map_err(lock_error)?;
        let todo = Todo::new(new_todo);
        state.push(todo.clone());
        Ok(todo)
    }

    async fn fetch_one(&self, id: TodoId) -> TodoStoreResult<Option<Todo>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.iter().find(|todo| todo.id() == id).cloned())
    }

    async fn fetch_all(&self) -> TodoStoreResult<Vec<Todo>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.clone())
    }

    async fn delete(&self, id: TodoId) -> TodoStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.retain(|todo| todo.id() != id);
        Ok(())
    }

    async fn toggle(&self, id: TodoId) -> TodoStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(todo) = state.iter_mut().find(|todo| todo.id() == id) {
            todo.toggle();
        }
        Ok(())
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> TodoStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(todo) = state.iter_mut().find(|todo| todo.id() == id) {
            todo.apply(patch);
        }
        Ok(())
    }
}
