//! File-backed adapters that survive process restarts.

mod flags;
mod json_file;
mod store;

pub use flags::JsonFileFlagStore;
pub use store::JsonFileTodoStore;
