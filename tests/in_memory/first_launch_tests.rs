//! First-launch seeding observed through the list screen.

use std::io;
use std::sync::Arc;

use rstest::rstest;
use todolist::screen::list::ListModule;
use todolist::todo::{adapters::memory::InMemoryTodoStore, ports::TodoStore};
use tokio::runtime::Runtime;

use super::helpers::{LatestListView, NavigationLog, TWO_TASK_SEED, runtime, service_over, store};

#[rstest]
fn seeded_titles_reach_the_view(runtime: io::Result<Runtime>, store: InMemoryTodoStore) {
    let rt = runtime.expect("failed to create runtime");
    let view = Arc::new(LatestListView::default());
    let mut module = ListModule::assemble(
        service_over(&store, TWO_TASK_SEED),
        &view,
        Arc::new(NavigationLog::default()),
    );

    rt.block_on(async {
        module
            .presenter
            .attach()
            .expect("interactor is alive")
            .await
            .expect("load task should not panic");
        assert!(module.presenter.next_update().await);
    });

    assert_eq!(view.titles(), vec!["Task #1", "Memorize"]);
    assert_eq!(module.presenter.count_label(), "2 Задачи");
}

#[rstest]
fn relaunching_the_screen_does_not_reseed(runtime: io::Result<Runtime>, store: InMemoryTodoStore) {
    let rt = runtime.expect("failed to create runtime");
    let service = service_over(&store, TWO_TASK_SEED);

    for _ in 0..3 {
        let view = Arc::new(LatestListView::default());
        let mut module =
            ListModule::assemble(service.clone(), &view, Arc::new(NavigationLog::default()));
        rt.block_on(async {
            module
                .presenter
                .attach()
                .expect("interactor is alive")
                .await
                .expect("load task should not panic");
            assert!(module.presenter.next_update().await);
        });
        assert_eq!(view.titles().len(), 2);
    }

    let stored = rt.block_on(store.fetch_all()).expect("fetch should succeed");
    assert_eq!(stored.len(), 2);
}

#[rstest]
fn malformed_seed_shows_error_and_stores_nothing(
    runtime: io::Result<Runtime>,
    store: InMemoryTodoStore,
) {
    let rt = runtime.expect("failed to create runtime");
    let view = Arc::new(LatestListView::default());
    let mut module = ListModule::assemble(
        service_over(&store, r#"{"todos": "nope"}"#),
        &view,
        Arc::new(NavigationLog::default()),
    );

    rt.block_on(async {
        module
            .presenter
            .attach()
            .expect("interactor is alive")
            .await
            .expect("load task should not panic");
        assert!(module.presenter.next_update().await);
    });

    assert_eq!(view.error().as_deref(), Some("Something went wrong"));
    assert!(rt.block_on(store.fetch_all()).expect("fetch should succeed").is_empty());
}
