//! Background side of the list screen.

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::{ListRefresh, ListUpdate};
use crate::todo::{domain::TodoId, ports::TodoService};

/// Intents the list presenter forwards to its interactor.
///
/// Each call spawns the work onto the current Tokio runtime and returns its
/// handle; the result arrives through the presenter's update channel.
/// Calling outside a runtime panics.
pub trait ListInteractorInput: Send + Sync {
    /// Loads the list, seeding it first on the first launch.
    fn check_for_first_launch(&self) -> JoinHandle<()>;

    /// Re-imports the remote seed list and reloads.
    fn fetch_from_remote(&self) -> JoinHandle<()>;

    /// Toggles completion, then reloads the whole list.
    fn handle_done_tap(&self, id: TodoId) -> JoinHandle<()>;

    /// Deletes the todo, then reloads the whole list.
    fn handle_delete(&self, id: TodoId) -> JoinHandle<()>;

    /// Reloads the whole list from the store.
    fn reload(&self) -> JoinHandle<()>;
}

/// Default list interactor.
///
/// Results are sent to the presenter's channel. When the presenter has been
/// dropped, the send fails and the result is discarded.
#[derive(Clone)]
pub struct ListInteractor {
    service: Arc<dyn TodoService>,
    updates: UnboundedSender<ListUpdate>,
}

impl ListInteractor {
    /// Creates an interactor publishing into `updates`.
    #[must_use]
    pub fn new(service: Arc<dyn TodoService>, updates: UnboundedSender<ListUpdate>) -> Self {
        Self { service, updates }
    }

    fn spawn<F, Fut>(&self, work: F) -> JoinHandle<()>
    where
        F: FnOnce(Arc<dyn TodoService>) -> Fut + Send + 'static,
        Fut: Future<Output = ListUpdate> + Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let updates = self.updates.clone();
        tokio::spawn(async move {
            let update = work(service).await;
            if updates.send(update).is_err() {
                tracing::debug!("list presenter detached, dropping update");
            }
        })
    }
}

impl ListInteractorInput for ListInteractor {
    fn check_for_first_launch(&self) -> JoinHandle<()> {
        self.spawn(|service| async move { service.check_for_first_launch().await })
    }

    fn fetch_from_remote(&self) -> JoinHandle<()> {
        self.spawn(|service| async move { service.refresh_from_remote().await })
    }

    fn handle_done_tap(&self, id: TodoId) -> JoinHandle<()> {
        self.spawn(move |service| async move {
            service.toggle(id).await?;
            service.fetch_all().await
        })
    }

    fn handle_delete(&self, id: TodoId) -> JoinHandle<()> {
        self.spawn(move |service| async move {
            service.delete(id).await?;
            service.fetch_all().await
        })
    }

    fn reload(&self) -> JoinHandle<()> {
        self.spawn(|service| async move { service.fetch_all().await })
    }
}

impl ListRefresh for ListInteractor {
    /// Spawns a reload; panics when called outside a Tokio runtime.
    fn reload_todos(&self) {
        drop(self.reload());
    }
}
