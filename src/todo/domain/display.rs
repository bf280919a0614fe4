//! Read-only projections of todo records used for rendering.

use super::{Todo, TodoId};
use chrono::{DateTime, Utc};

/// Render format for todo dates (`dd/mm/yyyy`).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Formats a timestamp the way list rows display it.
#[must_use]
pub fn format_display_date(date: DateTime<Utc>) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Display model for a single todo row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayTodo {
    /// Identifier of the record this row projects.
    pub id: TodoId,
    /// Display title.
    pub title: String,
    /// Description text.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Date formatted with [`DISPLAY_DATE_FORMAT`].
    pub date: String,
}

impl DisplayTodo {
    /// Returns a copy with the completion flag inverted.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

impl From<&Todo> for DisplayTodo {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_owned(),
            description: todo.description().to_owned(),
            completed: todo.is_completed(),
            date: format_display_date(todo.date()),
        }
    }
}

/// Ordered list of display models plus their count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListViewModel {
    /// Rows in display order.
    pub todos: Vec<DisplayTodo>,
    /// Number of rows.
    pub total: usize,
}

impl TodoListViewModel {
    /// Builds a view-model from display rows, deriving the total.
    #[must_use]
    pub fn new(todos: Vec<DisplayTodo>) -> Self {
        let total = todos.len();
        Self { todos, total }
    }

    /// Builds a view-model from stored records in store order.
    #[must_use]
    pub fn from_todos(todos: &[Todo]) -> Self {
        Self::new(todos.iter().map(DisplayTodo::from).collect())
    }

    /// Returns the rows whose title contains `query`, ignoring case.
    ///
    /// An empty query keeps every row.
    #[must_use]
    pub fn filtered_by_title(&self, query: &str) -> Self {
        if query.is_empty() {
            return self.clone();
        }
        let needle = query.to_lowercase();
        Self::new(
            self.todos
                .iter()
                .filter(|todo| todo.title.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        )
    }

    /// Finds the row for `id`.
    #[must_use]
    pub fn find(&self, id: TodoId) -> Option<&DisplayTodo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Replaces the row that has the same id as `row`.
    ///
    /// Returns the index that changed, or `None` when no row matches.
    pub fn replace_row(&mut self, row: DisplayTodo) -> Option<usize> {
        let index = self.todos.iter().position(|todo| todo.id == row.id)?;
        let slot = self.todos.get_mut(index)?;
        *slot = row;
        Some(index)
    }
}
