//! mcpgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mcpgen
//! component generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mcpgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Locator, Templates, Engine, Verifier, │
//! │   Params, Registry, Harness, Filesystem)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mcpgen-adapters (Infrastructure)     │
//! │  (LocalFilesystem, TeraEngine, SynCheck,│
//! │   TomlRegistry, CargoTestHarness, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ComponentRequest, ParameterSpec,      │
//! │   RenderVars, ArtifactPaths, Stage)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mcpgen_core::{
//!     application::GenerateService,
//!     domain::{ComponentRequest, GenerationFlags, KindOptions},
//! };
//!
//! // 1. Build the request from CLI arguments
//! let request = ComponentRequest::new(
//!     "search_documents",
//!     "Full-text search over indexed documents",
//!     GenerationFlags::default(),
//!     KindOptions::Tool {
//!         read_only: true,
//!         idempotent: true,
//!         open_world: false,
//!         return_type: "String".into(),
//!     },
//! );
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(/* adapters */);
//! let outcome = service.generate(std::env::current_dir()?.as_path(), &request)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{
            ComponentRegistry, Filesystem, ParameterLoader, ProjectLocator, RegistryOutcome,
            SyntaxVerifier, TemplateEngine, TemplateSource, TestHarness,
        },
    };
    pub use crate::domain::{
        ComponentKind, ComponentRequest, GenerationFlags, GenerationOutcome, KindOptions,
        OutcomeStatus, ParameterSpec, ProjectContext, RegistryRecord, Stage, TestReport,
    };
    pub use crate::error::{ErrorOrigin, GeneratorError, GeneratorResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
