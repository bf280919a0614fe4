//! Wiring of the file-backed todo service from configuration.

use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

use crate::config::TodoConfig;
use crate::todo::{
    adapters::{
        file::{JsonFileFlagStore, JsonFileTodoStore},
        remote::HttpSeedFetcher,
    },
    ports::{FlagStoreError, TodoStoreError},
    services::DefaultTodoService,
};

/// Service type produced by [`bootstrap`].
pub type FileBackedTodoService =
    DefaultTodoService<JsonFileTodoStore, HttpSeedFetcher, JsonFileFlagStore, DefaultClock>;

/// Errors raised while opening the persistent stores.
#[derive(Debug, Clone, Error)]
pub enum BootstrapError {
    /// The record store could not be opened.
    #[error(transparent)]
    Store(#[from] TodoStoreError),
    /// The flag store could not be opened.
    #[error(transparent)]
    Flags(#[from] FlagStoreError),
}

/// Opens the stores under `config.data_dir` and builds the service.
///
/// # Errors
///
/// Returns [`BootstrapError`] when either store cannot be opened.
pub fn bootstrap(config: &TodoConfig) -> Result<Arc<FileBackedTodoService>, BootstrapError> {
    let store = JsonFileTodoStore::open(&config.data_dir, &config.store_file)?;
    let flags = JsonFileFlagStore::open(&config.data_dir, &config.flags_file)?;
    let mut fetcher = HttpSeedFetcher::new(config.seed_endpoint.clone());
    if let Some(timeout) = config.request_timeout() {
        fetcher = fetcher.with_timeout(timeout);
    }

    tracing::debug!(data_dir = %config.data_dir, "todo service bootstrapped");
    let service = DefaultTodoService::new(
        Arc::new(store),
        Arc::new(fetcher),
        Arc::new(flags),
        Arc::new(DefaultClock),
    )
    .with_first_launch_key(config.first_launch_key.clone());
    Ok(Arc::new(service))
}
