//! Default todo service: store pass-through plus first-launch seeding.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::seed::import_seed;
use crate::todo::{
    domain::{NewTodo, Todo, TodoId, TodoPatch},
    ports::{FlagStore, SeedFetcher, TodoService, TodoServiceResult, TodoStore},
};

/// Flag key recording that the seed import has been attempted.
pub const DEFAULT_FIRST_LAUNCH_KEY: &str = "isFirstLaunch";

/// Todo service backed by injected ports.
pub struct DefaultTodoService<S, F, K, C>
where
    S: TodoStore,
    F: SeedFetcher,
    K: FlagStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    fetcher: Arc<F>,
    flags: Arc<K>,
    clock: Arc<C>,
    first_launch_key: String,
    first_launch_gate: Mutex<()>,
}

impl<S, F, K, C> DefaultTodoService<S, F, K, C>
where
    S: TodoStore,
    F: SeedFetcher,
    K: FlagStore,
    C: Clock + Send + Sync,
{
    /// Creates a service using [`DEFAULT_FIRST_LAUNCH_KEY`].
    #[must_use]
    pub fn new(store: Arc<S>, fetcher: Arc<F>, flags: Arc<K>, clock: Arc<C>) -> Self {
        Self {
            store,
            fetcher,
            flags,
            clock,
            first_launch_key: DEFAULT_FIRST_LAUNCH_KEY.to_owned(),
            first_launch_gate: Mutex::new(()),
        }
    }

    /// Uses `key` for the first-launch flag.
    #[must_use]
    pub fn with_first_launch_key(mut self, key: impl Into<String>) -> Self {
        self.first_launch_key = key.into();
        self
    }

    /// Returns the flag key in use.
    #[must_use]
    pub fn first_launch_key(&self) -> &str {
        &self.first_launch_key
    }
}

#[async_trait]
impl<S, F, K, C> TodoService for DefaultTodoService<S, F, K, C>
where
    S: TodoStore,
    F: SeedFetcher,
    K: FlagStore,
    C: Clock + Send + Sync,
{
    async fn check_for_first_launch(&self) -> TodoServiceResult<Vec<Todo>> {
        // Held across the seed so a concurrent caller sees the flag set.
        let _gate = self.first_launch_gate.lock().await;

        if self.flags.get(&self.first_launch_key).await? {
            tracing::debug!("not first launch, loading stored todos");
            return Ok(self.store.fetch_all().await?);
        }

        tracing::info!("first launch, seeding todos from remote source");
        let seeded = import_seed(&*self.fetcher, &*self.store, &*self.clock).await;
        if let Err(err) = &seeded {
            tracing::warn!(error = %err, "first-launch seed failed; it will not be retried");
        }
        self.flags.set(&self.first_launch_key, true).await?;
        seeded
    }

    async fn refresh_from_remote(&self) -> TodoServiceResult<Vec<Todo>> {
        import_seed(&*self.fetcher, &*self.store, &*self.clock).await
    }

    async fn create(&self, new_todo: NewTodo) -> TodoServiceResult<Todo> {
        Ok(self.store.create(new_todo).await?)
    }

    async fn update(&self, id: TodoId, patch: TodoPatch) -> TodoServiceResult<()> {
        Ok(self.store.update(id, patch).await?)
    }

    async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        Ok(self.store.delete(id).await?)
    }

    async fn toggle(&self, id: TodoId) -> TodoServiceResult<()> {
        Ok(self.store.toggle(id).await?)
    }

    async fn fetch_one(&self, id: TodoId) -> TodoServiceResult<Option<Todo>> {
        Ok(self.store.fetch_one(id).await?)
    }

    async fn fetch_all(&self) -> TodoServiceResult<Vec<Todo>> {
        Ok(self.store.fetch_all().await?)
    }
}
