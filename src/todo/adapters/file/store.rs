//! Record store persisted as a JSON file.

use async_trait::async_trait;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::json_file::{JsonFile, run_blocking_with};
use crate::todo::{
    domain::{NewTodo, Todo, TodoId, TodoPatch},
    ports::{TodoStore, TodoStoreError, TodoStoreResult},
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    todos: Vec<Todo>,
}

/// Todo store that rewrites one JSON file on every mutation.
///
/// The records are cached in memory; the cache only changes after the file
/// write succeeded, so a failed write leaves both untouched. Writes run on
/// the blocking thread pool.
#[derive(Debug)]
pub struct JsonFileTodoStore {
    file: Arc<JsonFile>,
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl JsonFileTodoStore {
    /// Opens the store at `dir_path/file_name`.
    ///
    /// A missing file opens as an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the directory cannot be
    /// opened or the existing file cannot be read or parsed.
    pub fn open(dir_path: &Utf8Path, file_name: &str) -> TodoStoreResult<Self> {
        let file = JsonFile::open(dir_path, file_name).map_err(TodoStoreError::persistence)?;
        let document: StoreDocument = file
            .read_or_default()
            .map_err(TodoStoreError::persistence)?;
        Ok(Self {
            file: Arc::new(file),
            todos: Arc::new(Mutex::new(document.todos)),
        })
    }

    /// Runs `change` against a copy of the records, persists the copy, then
    /// commits it to the cache.
    async fn mutate<T, F>(&self, change: F) -> TodoStoreResult<T>
    where
        F: FnOnce(&mut Vec<Todo>) -> T + Send + 'static,
        T: Send + 'static,
    {
        let file = Arc::clone(&self.file);
        let cache = Arc::clone(&self.todos);
        run_blocking_with(
            move || {
                let mut cached = cache.lock().map_err(lock_error)?;
                let mut todos = cached.clone();
                let outcome = change(&mut todos);
                let document = StoreDocument { todos };
                file.write(&document).map_err(TodoStoreError::persistence)?;
                *cached = document.todos;
                Ok(outcome)
            },
            TodoStoreError::persistence,
        )
        .await
    }
}

fn lock_error(err: impl ToString) -> TodoStoreError {
    TodoStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoStore for JsonFileTodoStore {
    async fn create(&self, new_todo: NewTodo) -> TodoStoreResult<Todo> {
        let todo = Todo::new(new_todo);
        let stored = todo.clone();
        self.mutate(move |todos| todos.push(stored)).await?;
        Ok(todo)
    }

    async fn fetch_one(&self, id: TodoId) -> TodoStoreResult<Option<Todo>> {
        let todos = self.todos.lock().map_err(lock_error)?;
        Ok(todos.iter().find(|todo| todo.id() == id).cloned())
    }

    async fn fetch_all(&self) -> TodoStoreResult<Vec<Todo>> {
        let todos = self.todos.lock().map_err(lock_error)?;
        Ok(todos.clone())
    }

    async fn delete(&self, id: TodoId) -> TodoStoreResult<()> {
        self.mutate(move |todos| todos.retain(|todo| todo.id() != id)).await
    }

    async fn toggle(&self, id: TodoId) -> TodoStoreResult<()> {
        self.mutate(move |todos| {
            if let Some(todo) = todos.iter_mut().find(|todo| todo.id() == id) {
                todo.toggle();
            }
        })
        .await
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> TodoStoreResult<()> {
        self.mutate(move |todos| {
            if let Some(todo) = todos.iter_mut().find(|todo| todo.id() == id) {
                todo.apply(patch);
            }
        })
        .await
    }
}
