//! List and edit screens driven together over one service.

use std::io;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use todolist::screen::edit::{self, EditOutcome, EditView};
use todolist::screen::list::ListModule;
use todolist::todo::{adapters::memory::InMemoryTodoStore, ports::TodoService};
use tokio::runtime::Runtime;

use super::helpers::{LatestListView, NavigationLog, TWO_TASK_SEED, runtime, service_over, store};

struct SilentEditView;

impl EditView for SilentEditView {
    fn show_form(&self, _form: &edit::EditForm) {}

    fn show_error(&self, _message: &str) {}
}

#[rstest]
fn creating_from_edit_screen_reloads_list(runtime: io::Result<Runtime>, store: InMemoryTodoStore) {
    let rt = runtime.expect("failed to create runtime");
    let service: Arc<dyn TodoService> = service_over(&store, TWO_TASK_SEED);
    let list_view = Arc::new(LatestListView::default());
    let navigation = Arc::new(NavigationLog::default());
    let mut list = ListModule::assemble(Arc::clone(&service), &list_view, navigation.clone());

    rt.block_on(async {
        list
            .presenter
            .attach()
            .expect("interactor is alive")
            .await
            .expect("load task should not panic");
        assert!(list.presenter.next_update().await);
    });
    list.presenter.did_tap_create();
    let editing = navigation.last_detail().expect("detail screen opened");
    assert!(editing.is_none());

    let edit_view = Arc::new(SilentEditView);
    let presenter = edit::assemble(
        Arc::clone(&service),
        Arc::new(DefaultClock),
        &edit_view,
        navigation.clone(),
        list.refresh_handle(),
        editing,
    );
    let outcome = rt.block_on(async {
        let outcome = presenter
            .did_tap_back("Buy milk", "2 litres")
            .await
            .expect("save should succeed");
        assert!(list.presenter.next_update().await);
        outcome
    });

    assert_eq!(outcome, EditOutcome::Created);
    assert_eq!(navigation.backs(), 1);
    assert_eq!(list_view.titles(), vec!["Task #1", "Memorize", "Buy milk"]);
    assert_eq!(list.presenter.count_label(), "3 Задачи");
}

#[rstest]
fn editing_a_row_renames_it_in_place(runtime: io::Result<Runtime>, store: InMemoryTodoStore) {
    let rt = runtime.expect("failed to create runtime");
    let service: Arc<dyn TodoService> = service_over(&store, TWO_TASK_SEED);
    let list_view = Arc::new(LatestListView::default());
    let navigation = Arc::new(NavigationLog::default());
    let mut list = ListModule::assemble(Arc::clone(&service), &list_view, navigation.clone());

    rt.block_on(async {
        list
            .presenter
            .attach()
            .expect("interactor is alive")
            .await
            .expect("load task should not panic");
        assert!(list.presenter.next_update().await);
    });
    let first = list
        .presenter
        .view_model()
        .and_then(|model| model.todos.first().cloned())
        .expect("a loaded row");
    list.presenter.did_tap_edit(first.id);
    let editing = navigation
        .last_detail()
        .expect("detail screen opened")
        .expect("an existing row");

    let edit_view = Arc::new(SilentEditView);
    let presenter = edit::assemble(
        Arc::clone(&service),
        Arc::new(DefaultClock),
        &edit_view,
        navigation.clone(),
        list.refresh_handle(),
        Some(editing),
    );
    let outcome = rt.block_on(async {
        let outcome = presenter
            .did_tap_back("Be kind", "to someone")
            .await
            .expect("save should succeed");
        assert!(list.presenter.next_update().await);
        outcome
    });

    assert_eq!(outcome, EditOutcome::Updated);
    assert_eq!(list_view.titles(), vec!["Be kind", "Memorize"]);
    assert_eq!(list.presenter.search("be K").total, 1);
}

#[rstest]
fn toggling_and_deleting_from_list(runtime: io::Result<Runtime>, store: InMemoryTodoStore) {
    let rt = runtime.expect("failed to create runtime");
    let list_view = Arc::new(LatestListView::default());
    let mut list = ListModule::assemble(
        service_over(&store, TWO_TASK_SEED),
        &list_view,
        Arc::new(NavigationLog::default()),
    );

    rt.block_on(async {
        list
            .presenter
            .attach()
            .expect("interactor is alive")
            .await
            .expect("load task should not panic");
        assert!(list.presenter.next_update().await);

        let row = list
            .presenter
            .view_model()
            .and_then(|model| model.todos.first().cloned())
            .expect("a loaded row");
        list.presenter
            .did_tap_done(0, &row)
            .expect("interactor is alive")
            .await
            .expect("toggle task should not panic");
        assert!(list.presenter.next_update().await);
        let toggled = list
            .presenter
            .view_model()
            .and_then(|model| model.find(row.id).cloned())
            .expect("row still listed");
        assert!(toggled.completed);

        list.presenter
            .did_delete(row.id)
            .expect("interactor is alive")
            .await
            .expect("delete task should not panic");
        assert!(list.presenter.next_update().await);
    });

    assert_eq!(list_view.titles(), vec!["Memorize"]);
    assert_eq!(list.presenter.count_label(), "1 Задача");
}
