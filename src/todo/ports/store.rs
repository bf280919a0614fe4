//! Record store port for todo persistence.

use crate::todo::domain::{NewTodo, Todo, TodoId, TodoPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record store operations.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;

/// Todo persistence contract.
///
/// Every mutating operation has durably persisted the full store state by
/// the time it returns `Ok`. Operations addressing an id that is not stored
/// succeed without changing anything.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Stores a new todo under a freshly generated id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the store cannot be
    /// written.
    async fn create(&self, new_todo: NewTodo) -> TodoStoreResult<Todo>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn fetch_one(&self, id: TodoId) -> TodoStoreResult<Option<Todo>>;

    /// Returns every todo in insertion order.
    async fn fetch_all(&self) -> TodoStoreResult<Vec<Todo>>;

    /// Removes the todo with `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the store cannot be
    /// written.
    async fn delete(&self, id: TodoId) -> TodoStoreResult<()>;

    /// Flips the completion flag of the todo with `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the store cannot be
    /// written.
    async fn toggle(&self, id: TodoId) -> TodoStoreResult<()>;

    /// Applies the fields present in `patch` to the todo with `id`, if
    /// present. Never creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the store cannot be
    /// written.
    async fn update(&self, id: TodoId, patch: TodoPatch) -> TodoStoreResult<()>;
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoStoreError {
    /// Reading or writing durable storage failed.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
