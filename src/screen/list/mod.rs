//! List screen: loading, toggling, deleting and searching todos.

mod interactor;
mod presenter;

pub use interactor::{ListInteractor, ListInteractorInput};
pub use presenter::ListPresenter;

use std::sync::{Arc, Weak};
use tokio::sync::mpsc;

use crate::todo::{
    domain::{DisplayTodo, Todo, TodoListViewModel},
    ports::{TodoService, TodoServiceResult},
};

/// Result delivered from the interactor to the presenter.
pub type ListUpdate = TodoServiceResult<Vec<Todo>>;

/// Lifecycle of the list screen's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed; carries the message shown to the user.
    Error(String),
}

/// Renders the list screen.
pub trait ListView: Send + Sync {
    /// Shows a freshly loaded list.
    fn update(&self, model: &TodoListViewModel);

    /// Shows a failure message.
    fn show_error(&self, message: &str);

    /// Redraws the row at `index`.
    fn reload_row(&self, index: usize);
}

/// Navigation out of the list screen.
pub trait ListRouter: Send + Sync {
    /// Opens the detail screen, for a new todo when `todo` is `None`.
    fn navigate_to_detail(&self, todo: Option<DisplayTodo>);
}

/// Receives "the list changed" notifications from other screens.
pub trait ListRefresh: Send + Sync {
    /// Reloads the list.
    fn reload_todos(&self);
}

/// Assembled list screen.
pub struct ListModule {
    /// UI-side presenter.
    pub presenter: ListPresenter,
    /// Background interactor and owner of the update sender, also usable
    /// as a [`ListRefresh`].
    pub interactor: Arc<ListInteractor>,
}

impl ListModule {
    /// Wires a presenter and interactor around `service`.
    ///
    /// The presenter holds the view and the interactor weakly and the router
    /// strongly. Keep [`interactor`](Self::interactor) alive for as long as
    /// the screen is shown: once it and every in-flight task are gone, the
    /// update channel closes and
    /// [`ListPresenter::next_update`] returns `false`.
    #[must_use]
    pub fn assemble<V>(
        service: Arc<dyn TodoService>,
        view: &Arc<V>,
        router: Arc<dyn ListRouter>,
    ) -> Self
    where
        V: ListView + 'static,
    {
        let (sender, receiver) = mpsc::unbounded_channel();
        let interactor = Arc::new(ListInteractor::new(service, sender));
        let weak_interactor: Weak<dyn ListInteractorInput> =
            Arc::downgrade(&interactor) as Weak<ListInteractor>;
        let weak_view: Weak<dyn ListView> = Arc::downgrade(view) as Weak<V>;
        let presenter = ListPresenter::new(weak_interactor, receiver, weak_view, router);
        Self {
            presenter,
            interactor,
        }
    }

    /// Returns a non-owning refresh handle for the edit screen.
    #[must_use]
    pub fn refresh_handle(&self) -> Weak<dyn ListRefresh> {
        let weak: Weak<ListInteractor> = Arc::downgrade(&self.interactor);
        weak
    }
}
