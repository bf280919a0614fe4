//! Recording doubles for views, routers and refresh collaborators.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::screen::edit::{EditForm, EditRouter, EditView};
use crate::screen::list::{ListRefresh, ListRouter, ListView};
use crate::todo::domain::{DisplayTodo, TodoListViewModel};

/// List view that records every delivery.
#[derive(Default)]
pub(super) struct RecordingListView {
    updates: Mutex<Vec<TodoListViewModel>>,
    errors: Mutex<Vec<String>>,
    reloaded_rows: Mutex<Vec<usize>>,
}

impl RecordingListView {
    pub(super) fn updates(&self) -> Vec<TodoListViewModel> {
        self.updates.lock().expect("updates lock").clone()
    }

    pub(super) fn last_update(&self) -> Option<TodoListViewModel> {
        self.updates().pop()
    }

    pub(super) fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("errors lock").clone()
    }

    pub(super) fn reloaded_rows(&self) -> Vec<usize> {
        self.reloaded_rows.lock().expect("rows lock").clone()
    }
}

impl ListView for RecordingListView {
    fn update(&self, model: &TodoListViewModel) {
        self.updates.lock().expect("updates lock").push(model.clone());
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().expect("errors lock").push(message.to_owned());
    }

    fn reload_row(&self, index: usize) {
        self.reloaded_rows.lock().expect("rows lock").push(index);
    }
}

/// List router that records navigation requests.
#[derive(Default)]
pub(super) struct RecordingListRouter {
    opened: Mutex<Vec<Option<DisplayTodo>>>,
}

impl RecordingListRouter {
    pub(super) fn opened(&self) -> Vec<Option<DisplayTodo>> {
        self.opened.lock().expect("router lock").clone()
    }
}

impl ListRouter for RecordingListRouter {
    fn navigate_to_detail(&self, todo: Option<DisplayTodo>) {
        self.opened.lock().expect("router lock").push(todo);
    }
}

/// Edit view that records the form and errors it is shown.
#[derive(Default)]
pub(super) struct RecordingEditView {
    forms: Mutex<Vec<EditForm>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingEditView {
    pub(super) fn forms(&self) -> Vec<EditForm> {
        self.forms.lock().expect("forms lock").clone()
    }

    pub(super) fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("errors lock").clone()
    }
}

impl EditView for RecordingEditView {
    fn show_form(&self, form: &EditForm) {
        self.forms.lock().expect("forms lock").push(form.clone());
    }

    fn show_error(&self, message: &str) {
        self.errors.lock().expect("errors lock").push(message.to_owned());
    }
}

/// Counts back navigations.
#[derive(Default)]
pub(super) struct CountingEditRouter {
    backs: AtomicUsize,
}

impl CountingEditRouter {
    pub(super) fn backs(&self) -> usize {
        self.backs.load(Ordering::SeqCst)
    }
}

impl EditRouter for CountingEditRouter {
    fn navigate_back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Counts list reload requests.
#[derive(Default)]
pub(super) struct CountingRefresh {
    reloads: AtomicUsize,
}

impl CountingRefresh {
    pub(super) fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl ListRefresh for CountingRefresh {
    fn reload_todos(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}
