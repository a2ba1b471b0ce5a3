//! Application layer for mcpgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{DEFAULT_TEST_TIMEOUT, GenerateService};

// Re-export port traits (for adapter implementation)
pub use ports::{
    ComponentRegistry, Filesystem, ParameterLoader, ProjectLocator, RegistryOutcome,
    SyntaxVerifier, TemplateEngine, TemplateSource, TestHarness,
};

pub use error::EngineError;
