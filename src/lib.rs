//! Todolist: the core of a single-screen to-do list application.
//!
//! This crate keeps todo records on the device, seeds them once from a
//! remote list on first launch, and drives the list and edit screens
//! through presenter/interactor pairs. Rendering is left to whoever
//! implements the view traits in [`screen`].
//!
//! # Architecture
//!
//! Todolist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, HTTP, memory)
//!
//! # Modules
//!
//! - [`todo`]: Records, persistence, and first-launch seeding
//! - [`screen`]: List and edit screen orchestration
//! - [`config`]: Runtime configuration
//! - [`app`]: Wiring of the file-backed service

pub mod app;
pub mod config;
pub mod screen;
pub mod todo;
