//! Import of the remote seed list into the record store.

use mockable::Clock;

use crate::todo::{
    domain::Todo,
    ports::{SeedFetcher, TodoServiceResult, TodoStore},
};

/// Fetches the remote list and creates one local record per entry.
///
/// Decoding completes before the first record is created, so a decode
/// failure leaves the store untouched. Returns every stored todo once all
/// entries have been imported.
///
/// # Errors
///
/// Returns the fetch failure unchanged, or the first store failure.
pub async fn import_seed<F, S, C>(fetcher: &F, store: &S, clock: &C) -> TodoServiceResult<Vec<Todo>>
where
    F: SeedFetcher + ?Sized,
    S: TodoStore + ?Sized,
    C: Clock + ?Sized,
{
    let remote_todos = fetcher.fetch_remote_tasks().await?;
    let imported_at = clock.utc();
    for remote in &remote_todos {
        store.create(remote.to_new_todo(imported_at)).await?;
    }
    tracing::info!(imported = remote_todos.len(), "seed list imported");
    Ok(store.fetch_all().await?)
}
