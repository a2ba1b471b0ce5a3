//! Command handlers.
//!
//! Each module translates parsed CLI arguments into core requests, wires up
//! the production adapters, and renders results. No business logic lives
//! here.

pub mod completions;
pub mod generate;
pub mod list;
