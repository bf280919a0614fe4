//! Shared world state for todo lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todolist::todo::{
    adapters::{
        memory::{InMemoryFlagStore, InMemoryTodoStore},
        remote::StaticSeedFetcher,
    },
    domain::{Todo, TodoId},
    ports::TodoServiceResult,
    services::DefaultTodoService,
};

/// Service type used by the BDD world.
pub type TestTodoService =
    DefaultTodoService<InMemoryTodoStore, StaticSeedFetcher, InMemoryFlagStore, DefaultClock>;

/// Scenario world for todo lifecycle behaviour tests.
pub struct TodoWorld {
    pub store: InMemoryTodoStore,
    pub flags: InMemoryFlagStore,
    pub fetcher: StaticSeedFetcher,
    service: Option<Arc<TestTodoService>>,
    pub last_launch: Option<TodoServiceResult<Vec<Todo>>>,
    pub current: Option<TodoId>,
}

impl TodoWorld {
    /// Creates a world with an empty remote list and no launch recorded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: InMemoryTodoStore::new(),
            flags: InMemoryFlagStore::new(),
            fetcher: StaticSeedFetcher::empty(),
            service: None,
            last_launch: None,
            current: None,
        }
    }

    /// Returns the service, building it from the configured ports on first use.
    pub fn service(&mut self) -> Arc<TestTodoService> {
        let service = self.service.get_or_insert_with(|| {
            Arc::new(DefaultTodoService::new(
                Arc::new(self.store.clone()),
                Arc::new(self.fetcher.clone()),
                Arc::new(self.flags.clone()),
                Arc::new(DefaultClock),
            ))
        });
        Arc::clone(service)
    }

    /// Returns the todo the scenario is working on.
    pub fn current(&self) -> Result<TodoId, eyre::Report> {
        self.current
            .ok_or_else(|| eyre::eyre!("missing current todo in scenario world"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
