//! Todo record and the value types used to create and modify it.

use super::TodoId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    description: String,
    completed: bool,
    date: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, not yet completed todo with a fresh identifier.
    #[must_use]
    pub fn new(new_todo: NewTodo) -> Self {
        let NewTodo {
            title,
            description,
            date,
        } = new_todo;
        Self {
            id: TodoId::new(),
            title,
            description,
            completed: false,
            date,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the todo has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation or display timestamp.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Flips the completion flag.
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Applies the fields present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: TodoPatch) {
        let TodoPatch {
            title,
            description,
            date,
        } = patch;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_date) = date {
            self.date = new_date;
        }
    }
}

/// Field values for a todo that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
    description: String,
    date: DateTime<Utc>,
}

impl NewTodo {
    /// Creates the field set for a new todo.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date,
        }
    }

    /// Returns the title the todo will be created with.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description the todo will be created with.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the date the todo will be created with.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Partial update for an existing todo.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    title: Option<String>,
    description: Option<String>,
    date: Option<DateTime<Utc>>,
}

impl TodoPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement date.
    #[must_use]
    pub const fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns `true` when the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.date.is_none()
    }
}
