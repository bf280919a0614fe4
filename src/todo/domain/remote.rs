//! Task descriptors received from the remote seed source.

use super::{NewTodo, RemoteTodoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix used to title remote tasks that arrive without one.
pub const UNTITLED_TITLE_PREFIX: &str = "Task #";

/// One entry of the remote seed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTodo {
    /// Identifier assigned by the remote source.
    pub id: RemoteTodoId,
    /// Optional display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Task text, imported as the description.
    #[serde(rename = "todo")]
    pub description: String,
    /// Remote completion state.
    pub completed: bool,
    /// Remote date string, if the source provides one.
    #[serde(default)]
    pub date: Option<String>,
}

impl RemoteTodo {
    /// Returns the remote title, or `"Task #<id>"` when none was sent.
    #[must_use]
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{UNTITLED_TITLE_PREFIX}{}", self.id))
    }

    /// Maps the descriptor onto the fields of a new local record.
    ///
    /// Remote completion state and date are not carried over; imported
    /// records start open and are stamped with `imported_at`.
    #[must_use]
    pub fn to_new_todo(&self, imported_at: DateTime<Utc>) -> NewTodo {
        NewTodo::new(self.display_title(), imported_at, self.description.clone())
    }
}

/// Top-level shape of the remote seed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPayload {
    /// Task descriptors in source order.
    pub todos: Vec<RemoteTodo>,
    /// Total number of tasks reported by the source.
    pub total: u64,
}
