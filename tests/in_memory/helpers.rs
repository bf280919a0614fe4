//! Shared helpers for in-memory integration tests.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use mockable::DefaultClock;
use rstest::fixture;
use todolist::screen::edit::EditRouter;
use todolist::screen::list::{ListRouter, ListView};
use todolist::todo::{
    adapters::{
        memory::{InMemoryFlagStore, InMemoryTodoStore},
        remote::StaticSeedFetcher,
    },
    domain::{DisplayTodo, TodoListViewModel},
    services::DefaultTodoService,
};
use tokio::runtime::Runtime;

/// Service type used by the in-memory tests.
pub type MemoryTodoService =
    DefaultTodoService<InMemoryTodoStore, StaticSeedFetcher, InMemoryFlagStore, DefaultClock>;

/// Seed payload with two entries, one of them untitled.
pub const TWO_TASK_SEED: &str = r#"{
    "todos": [
        {"id": 1, "todo": "Do something nice for someone you care about", "completed": false, "userId": 152},
        {"id": 2, "title": "Memorize", "todo": "Memorize a poem", "completed": true, "userId": 13}
    ],
    "total": 2,
    "skip": 0,
    "limit": 30
}"#;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory record store for each test.
#[fixture]
pub fn store() -> InMemoryTodoStore {
    InMemoryTodoStore::new()
}

/// Builds a first-launch service over `store` serving `seed`.
#[must_use]
pub fn service_over(store: &InMemoryTodoStore, seed: &str) -> Arc<MemoryTodoService> {
    Arc::new(DefaultTodoService::new(
        Arc::new(store.clone()),
        Arc::new(StaticSeedFetcher::from_body(seed)),
        Arc::new(InMemoryFlagStore::new()),
        Arc::new(DefaultClock),
    ))
}

/// List view keeping the most recent model and error.
#[derive(Default)]
pub struct LatestListView {
    model: Mutex<Option<TodoListViewModel>>,
    error: Mutex<Option<String>>,
}

impl LatestListView {
    /// Returns the titles of the most recent model.
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.model
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|model| model.todos.iter().map(|row| row.title.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns the most recent error message.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ListView for LatestListView {
    fn update(&self, model: &TodoListViewModel) {
        *self.model.lock().unwrap_or_else(PoisonError::into_inner) = Some(model.clone());
    }

    fn show_error(&self, message: &str) {
        *self.error.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_owned());
    }

    fn reload_row(&self, _index: usize) {}
}

/// Router standing in for the navigation stack.
#[derive(Default)]
pub struct NavigationLog {
    details: Mutex<Vec<Option<DisplayTodo>>>,
    backs: Mutex<usize>,
}

impl NavigationLog {
    /// Returns the most recent detail navigation.
    #[must_use]
    pub fn last_detail(&self) -> Option<Option<DisplayTodo>> {
        self.details
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Returns how many times the edit screen navigated back.
    #[must_use]
    pub fn backs(&self) -> usize {
        *self.backs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ListRouter for NavigationLog {
    fn navigate_to_detail(&self, todo: Option<DisplayTodo>) {
        self.details
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(todo);
    }
}

impl EditRouter for NavigationLog {
    fn navigate_back(&self) {
        *self.backs.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }
}
