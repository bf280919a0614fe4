//! Service side of the edit screen.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

use crate::todo::{
    domain::{NewTodo, TodoId, TodoPatch},
    ports::{TodoService, TodoServiceResult},
};

/// Saves performed by the edit screen.
#[async_trait]
pub trait EditInteractorInput: Send + Sync {
    /// Creates a todo stamped with the current time.
    async fn handle_saving(&self, title: &str, description: &str) -> TodoServiceResult<()>;

    /// Replaces title and description of `id` and restamps its date.
    async fn handle_edit(&self, id: TodoId, title: &str, description: &str)
    -> TodoServiceResult<()>;
}

/// Default edit interactor.
pub struct EditInteractor<C>
where
    C: Clock + Send + Sync,
{
    service: Arc<dyn TodoService>,
    clock: Arc<C>,
}

impl<C> EditInteractor<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an interactor saving through `service`.
    #[must_use]
    pub fn new(service: Arc<dyn TodoService>, clock: Arc<C>) -> Self {
        Self { service, clock }
    }
}

#[async_trait]
impl<C> EditInteractorInput for EditInteractor<C>
where
    C: Clock + Send + Sync,
{
    async fn handle_saving(&self, title: &str, description: &str) -> TodoServiceResult<()> {
        let new_todo = NewTodo::new(title, self.clock.utc(), description);
        self.service.create(new_todo).await?;
        Ok(())
    }

    async fn handle_edit(
        &self,
        id: TodoId,
        title: &str,
        description: &str,
    ) -> TodoServiceResult<()> {
        let patch = TodoPatch::new()
            .with_title(title)
            .with_description(description)
            .with_date(self.clock.utc());
        self.service.update(id, patch).await
    }
}
