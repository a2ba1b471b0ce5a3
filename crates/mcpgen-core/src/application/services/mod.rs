//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "generate a tool component" or "list registered
//! components".

pub mod generate_service;

pub use generate_service::{DEFAULT_TEST_TIMEOUT, GenerateService};
