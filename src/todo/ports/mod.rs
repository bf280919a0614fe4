//! Port contracts for the todo core.
//!
//! Ports define infrastructure-agnostic interfaces: persistence and the
//! remote seed source below the service, and the service itself as seen by
//! the screen orchestrators.

pub mod flags;
pub mod seed;
pub mod service;
pub mod store;

pub use flags::{FlagStore, FlagStoreError, FlagStoreResult};
pub use seed::{FetchError, FetchResult, SeedFetcher};
pub use service::{TodoService, TodoServiceError, TodoServiceResult};
pub use store::{TodoStore, TodoStoreError, TodoStoreResult};

#[cfg(test)]
pub use flags::MockFlagStore;
#[cfg(test)]
pub use seed::MockSeedFetcher;
#[cfg(test)]
pub use service::MockTodoService;
#[cfg(test)]
pub use store::MockTodoStore;
