//! Application services for the todo core.

mod seed;
mod todo_service;

pub use seed::import_seed;
pub use todo_service::{DEFAULT_FIRST_LAUNCH_KEY, DefaultTodoService};
