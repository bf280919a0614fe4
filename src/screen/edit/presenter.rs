//! UI-side logic of the edit screen.

use std::sync::{Arc, Weak};

use super::{EditForm, EditInteractorInput, EditOutcome, EditRouter, EditView};
use crate::screen::{GENERIC_FAILURE_MESSAGE, list::ListRefresh};
use crate::todo::{domain::DisplayTodo, ports::TodoServiceResult};

/// Placeholder shown in an empty description field.
pub const DEFAULT_DESCRIPTION_PLACEHOLDER: &str = "Текст задачи...";

/// Presenter for the edit screen.
pub struct EditPresenter {
    interactor: Arc<dyn EditInteractorInput>,
    router: Arc<dyn EditRouter>,
    view: Weak<dyn EditView>,
    refresh: Weak<dyn ListRefresh>,
    editing: Option<DisplayTodo>,
    placeholder: String,
}

impl EditPresenter {
    /// Creates a presenter; `editing` is the row being edited, or `None`
    /// when creating a new todo.
    #[must_use]
    pub fn new(
        interactor: Arc<dyn EditInteractorInput>,
        router: Arc<dyn EditRouter>,
        view: Weak<dyn EditView>,
        refresh: Weak<dyn ListRefresh>,
        editing: Option<DisplayTodo>,
    ) -> Self {
        Self {
            interactor,
            router,
            view,
            refresh,
            editing,
            placeholder: DEFAULT_DESCRIPTION_PLACEHOLDER.to_owned(),
        }
    }

    /// Uses `placeholder` for the empty description field.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Returns the row being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&DisplayTodo> {
        self.editing.as_ref()
    }

    /// Returns the initial contents of the form.
    #[must_use]
    pub fn form(&self) -> EditForm {
        let (title, description) = self
            .editing
            .as_ref()
            .map(|todo| (todo.title.clone(), todo.description.clone()))
            .unwrap_or_default();
        EditForm {
            title,
            description,
            placeholder: self.placeholder.clone(),
        }
    }

    /// Shows the initial form on the view.
    pub fn attach(&self) {
        let form = self.form();
        if let Some(view) = self.view.upgrade() {
            view.show_form(&form);
        }
    }

    /// Saves the form and leaves the screen.
    ///
    /// An empty title discards the form. Otherwise the todo is created or
    /// updated, the list is asked to reload, and the router navigates back.
    ///
    /// # Errors
    ///
    /// Returns the service failure when the save fails; the view is shown a
    /// generic message and the screen stays open.
    pub async fn did_tap_back(
        &self,
        title: &str,
        description: &str,
    ) -> TodoServiceResult<EditOutcome> {
        if title.is_empty() {
            self.router.navigate_back();
            return Ok(EditOutcome::Discarded);
        }

        let (saved, outcome) = match &self.editing {
            Some(todo) => (
                self.interactor.handle_edit(todo.id, title, description).await,
                EditOutcome::Updated,
            ),
            None => (
                self.interactor.handle_saving(title, description).await,
                EditOutcome::Created,
            ),
        };

        if let Err(err) = saved {
            tracing::warn!(error = %err, "saving todo failed");
            if let Some(view) = self.view.upgrade() {
                view.show_error(GENERIC_FAILURE_MESSAGE);
            }
            return Err(err);
        }

        match self.refresh.upgrade() {
            Some(refresh) => refresh.reload_todos(),
            None => tracing::debug!("list screen detached, skipping refresh"),
        }
        self.router.navigate_back();
        Ok(outcome)
    }
}
