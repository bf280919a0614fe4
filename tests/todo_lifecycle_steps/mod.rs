//! Step definitions for todo lifecycle scenarios.

pub mod world;
