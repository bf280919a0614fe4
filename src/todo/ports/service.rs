//! Service port consumed by the screen orchestrators.

use crate::todo::domain::{NewTodo, Todo, TodoId, TodoPatch};
use crate::todo::ports::{FetchError, FlagStoreError, TodoStoreError};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Façade over the record store, the seed source and the first-launch flag.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Returns the stored todos, seeding them from the remote source first
    /// when this is the first launch.
    ///
    /// The first-launch flag is set after the first seeding attempt whatever
    /// its outcome; later calls never seed again.
    ///
    /// # Errors
    ///
    /// Returns the seed failure unchanged on a failed first launch, or
    /// store and flag persistence failures.
    async fn check_for_first_launch(&self) -> TodoServiceResult<Vec<Todo>>;

    /// Imports the remote seed list regardless of the first-launch flag and
    /// returns every stored todo.
    ///
    /// # Errors
    ///
    /// Returns seed or store failures.
    async fn refresh_from_remote(&self) -> TodoServiceResult<Vec<Todo>>;

    /// Creates a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when persistence fails.
    async fn create(&self, new_todo: NewTodo) -> TodoServiceResult<Todo>;

    /// Applies a partial update; absent ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when persistence fails.
    async fn update(&self, id: TodoId, patch: TodoPatch) -> TodoServiceResult<()>;

    /// Deletes a todo; absent ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when persistence fails.
    async fn delete(&self, id: TodoId) -> TodoServiceResult<()>;

    /// Flips the completion flag; absent ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when persistence fails.
    async fn toggle(&self, id: TodoId) -> TodoServiceResult<()>;

    /// Finds one todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when the store cannot be read.
    async fn fetch_one(&self, id: TodoId) -> TodoServiceResult<Option<Todo>>;

    /// Returns every todo in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Store`] when the store cannot be read.
    async fn fetch_all(&self) -> TodoServiceResult<Vec<Todo>>;
}

/// Service-level errors for todo operations.
#[derive(Debug, Clone, Error)]
pub enum TodoServiceError {
    /// The remote seed fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The record store failed.
    #[error(transparent)]
    Store(#[from] TodoStoreError),
    /// The flag store failed.
    #[error(transparent)]
    Flags(#[from] FlagStoreError),
}
