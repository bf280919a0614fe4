//! In-memory adapters for tests and ephemeral sessions.

mod flags;
mod store;

pub use flags::InMemoryFlagStore;
pub use store::InMemoryTodoStore;
