//! Screen orchestration for the list and edit screens.
//!
//! Each screen pairs an interactor, which talks to the
//! [`TodoService`](crate::todo::ports::TodoService), with a presenter that
//! owns the screen state and talks to the view and router collaborators.
//! Presenters hold views through [`std::sync::Weak`] references: once the
//! view is dropped, deliveries to it are silently skipped.

pub mod edit;
pub mod list;

/// Message shown in place of any failure detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";
