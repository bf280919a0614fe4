//! Adapter implementations for the todo ports.

pub mod file;
pub mod memory;
pub mod remote;
