//! Domain model for the todo list.
//!
//! Records, the values used to create and patch them, the descriptors that
//! arrive from the remote seed source, and the display projections rendered
//! by the screens. Nothing in here touches storage or the network.

mod display;
mod ids;
mod plural;
mod remote;
mod todo;

pub use display::{DISPLAY_DATE_FORMAT, DisplayTodo, TodoListViewModel, format_display_date};
pub use ids::{RemoteTodoId, TodoId};
pub use plural::{PluralCategory, PluralForms};
pub use remote::{RemoteTodo, SeedPayload, UNTITLED_TITLE_PREFIX};
pub use todo::{NewTodo, Todo, TodoPatch};
