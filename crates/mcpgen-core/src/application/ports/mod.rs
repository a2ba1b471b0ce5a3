//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `mcpgen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the pipeline, implemented by
//!   infrastructure — filesystem, project locator, template source and
//!   engine, syntax verifier, parameter loader, component registry, test
//!   harness.
//!
//! - **Driving (Input) Ports**: Called by the CLI, implemented by the
//!   application services.

pub mod output;

pub use output::{
    ComponentRegistry, Filesystem, ParameterLoader, ProjectLocator, RegistryOutcome,
    SyntaxVerifier, TemplateEngine, TemplateSource, TestHarness,
};
