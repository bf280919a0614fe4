//! Edit screen: creating a todo or changing an existing one.

mod interactor;
mod presenter;

pub use interactor::{EditInteractor, EditInteractorInput};
pub use presenter::{DEFAULT_DESCRIPTION_PLACEHOLDER, EditPresenter};

use mockable::Clock;
use std::sync::{Arc, Weak};

use crate::screen::list::ListRefresh;
use crate::todo::{domain::DisplayTodo, ports::TodoService};

/// Initial contents of the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    /// Title prefill.
    pub title: String,
    /// Description prefill.
    pub description: String,
    /// Placeholder for an empty description.
    pub placeholder: String,
}

/// What leaving the edit screen did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The title was empty; nothing was saved.
    Discarded,
    /// A new todo was created.
    Created,
    /// The edited todo was updated.
    Updated,
}

/// Renders the edit screen.
pub trait EditView: Send + Sync {
    /// Fills the form.
    fn show_form(&self, form: &EditForm);

    /// Shows a failure message.
    fn show_error(&self, message: &str);
}

/// Navigation out of the edit screen.
pub trait EditRouter: Send + Sync {
    /// Returns to the previous screen.
    fn navigate_back(&self);
}

/// Wires an edit presenter around `service`.
///
/// `editing` is the row to edit, or `None` to create a new todo. The view
/// and the list refresh handle are held weakly.
#[must_use]
pub fn assemble<V, C>(
    service: Arc<dyn TodoService>,
    clock: Arc<C>,
    view: &Arc<V>,
    router: Arc<dyn EditRouter>,
    refresh: Weak<dyn ListRefresh>,
    editing: Option<DisplayTodo>,
) -> EditPresenter
where
    V: EditView + 'static,
    C: Clock + Send + Sync + 'static,
{
    let interactor: Arc<dyn EditInteractorInput> = Arc::new(EditInteractor::new(service, clock));
    let weak_view: Weak<dyn EditView> = Arc::downgrade(view) as Weak<V>;
    EditPresenter::new(interactor, router, weak_view, refresh, editing)
}
