//! UI-side state of the list screen.

use std::sync::{Arc, Weak};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;

use super::{ListInteractorInput, ListRouter, ListState, ListUpdate, ListView};
use crate::screen::GENERIC_FAILURE_MESSAGE;
use crate::todo::domain::{DisplayTodo, PluralForms, TodoId, TodoListViewModel};

/// Presenter for the list screen.
///
/// The presenter is the only consumer of the interactor's update channel and
/// the only writer of the list view-model. Callers drive it from the UI
/// context with [`next_update`](Self::next_update) or
/// [`drain_pending`](Self::drain_pending).
///
/// The interactor is held weakly. Intents return `None` once it has been
/// dropped, and the channel closes after its last in-flight result.
///
/// Intents that start background work spawn onto the current Tokio runtime
/// and must be called from within one.
pub struct ListPresenter {
    interactor: Weak<dyn ListInteractorInput>,
    updates: UnboundedReceiver<ListUpdate>,
    view: Weak<dyn ListView>,
    router: Arc<dyn ListRouter>,
    view_model: Option<TodoListViewModel>,
    state: ListState,
    plural_forms: PluralForms,
}

impl ListPresenter {
    /// Creates an idle presenter.
    #[must_use]
    pub fn new(
        interactor: Weak<dyn ListInteractorInput>,
        updates: UnboundedReceiver<ListUpdate>,
        view: Weak<dyn ListView>,
        router: Arc<dyn ListRouter>,
    ) -> Self {
        Self {
            interactor,
            updates,
            view,
            router,
            view_model: None,
            state: ListState::Idle,
            plural_forms: PluralForms::default(),
        }
    }

    /// Uses `forms` for [`count_label`](Self::count_label).
    #[must_use]
    pub fn with_plural_forms(mut self, forms: PluralForms) -> Self {
        self.plural_forms = forms;
        self
    }

    /// Starts loading the list for a freshly attached screen.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn attach(&mut self) -> Option<JoinHandle<()>> {
        let interactor = self.interactor()?;
        self.state = ListState::Loading;
        Some(interactor.check_for_first_launch())
    }

    /// Asks for the remote seed list to be imported again.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn fetch_from_remote(&mut self) -> Option<JoinHandle<()>> {
        let interactor = self.interactor()?;
        self.state = ListState::Loading;
        Some(interactor.fetch_from_remote())
    }

    /// Waits for the next background result and applies it.
    ///
    /// Returns `false` once the interactor has been dropped and every
    /// result it started has been delivered.
    pub async fn next_update(&mut self) -> bool {
        match self.updates.recv().await {
            Some(update) => {
                self.apply(update);
                true
            }
            None => false,
        }
    }

    /// Applies every result that has already arrived, without waiting.
    ///
    /// Returns the number of results applied.
    pub fn drain_pending(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.updates.try_recv() {
                Ok(update) => {
                    self.apply(update);
                    applied += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return applied,
            }
        }
    }

    /// Applies a fetch result to the screen state and notifies the view.
    pub fn apply(&mut self, update: ListUpdate) {
        match update {
            Ok(todos) => {
                let view_model = TodoListViewModel::from_todos(&todos);
                self.state = ListState::Loaded;
                self.with_view(|view| view.update(&view_model));
                self.view_model = Some(view_model);
            }
            Err(err) => {
                tracing::warn!(error = %err, "list fetch failed");
                self.state = ListState::Error(GENERIC_FAILURE_MESSAGE.to_owned());
                self.with_view(|view| view.show_error(GENERIC_FAILURE_MESSAGE));
            }
        }
    }

    /// Toggles `todo` and flips its row locally until the reload arrives.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn did_tap_done(&mut self, index: usize, todo: &DisplayTodo) -> Option<JoinHandle<()>> {
        let handle = self.interactor()?.handle_done_tap(todo.id);
        if let Some(view_model) = self.view_model.as_mut() {
            view_model.replace_row(todo.toggled());
        }
        self.with_view(|view| view.reload_row(index));
        Some(handle)
    }

    /// Deletes the todo with `id`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn did_delete(&self, id: TodoId) -> Option<JoinHandle<()>> {
        Some(self.interactor()?.handle_delete(id))
    }

    /// Opens the detail screen for a new todo.
    pub fn did_tap_create(&self) {
        self.router.navigate_to_detail(None);
    }

    /// Opens the detail screen for the row with `id`.
    ///
    /// Unknown ids are ignored.
    pub fn did_tap_edit(&self, id: TodoId) {
        let Some(todo) = self.view_model.as_ref().and_then(|model| model.find(id)) else {
            return;
        };
        self.router.navigate_to_detail(Some(todo.clone()));
    }

    /// Filters the last loaded list by title, ignoring case.
    ///
    /// Does not fetch; an empty query returns the full list.
    #[must_use]
    pub fn search(&self, query: &str) -> TodoListViewModel {
        self.view_model
            .as_ref()
            .map(|model| model.filtered_by_title(query))
            .unwrap_or_default()
    }

    /// Returns the number of loaded rows.
    #[must_use]
    pub fn count(&self) -> usize {
        self.view_model.as_ref().map_or(0, |model| model.todos.len())
    }

    /// Returns the pluralized label for the loaded rows.
    #[must_use]
    pub fn count_label(&self) -> String {
        self.plural_forms.label(self.count())
    }

    /// Returns the pluralized label for `model`, e.g. a search result.
    #[must_use]
    pub fn count_label_for(&self, model: &TodoListViewModel) -> String {
        self.plural_forms.label(model.todos.len())
    }

    /// Returns the last loaded view-model.
    #[must_use]
    pub const fn view_model(&self) -> Option<&TodoListViewModel> {
        self.view_model.as_ref()
    }

    /// Returns the current screen state.
    #[must_use]
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    fn interactor(&self) -> Option<Arc<dyn ListInteractorInput>> {
        let interactor = self.interactor.upgrade();
        if interactor.is_none() {
            tracing::debug!("list interactor dropped, ignoring intent");
        }
        interactor
    }

    fn with_view(&self, notify: impl FnOnce(&dyn ListView)) {
        match self.view.upgrade() {
            Some(view) => notify(view.as_ref()),
            None => tracing::debug!("list view detached, skipping delivery"),
        }
    }
}
