//! Infrastructure adapters for mcpgen.
//!
//! This crate implements the ports defined in `mcpgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod locator;
pub mod params;
pub mod registry;
pub mod renderer;
pub mod syntax;
pub mod templates;
pub mod test_runner;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use locator::CargoProjectLocator;
pub use params::JsonParameterLoader;
pub use registry::TomlRegistry;
pub use renderer::TeraEngine;
pub use syntax::SynVerifier;
pub use templates::ProjectTemplateSource;
pub use test_runner::CargoTestHarness;
