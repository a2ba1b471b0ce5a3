//! Core domain layer for mcpgen.
//!
//! Pure business logic with no I/O: request and parameter types, name
//! validation, template-variant selection, path derivation, and the render
//! context. All filesystem, templating, parsing, and subprocess concerns go
//! through ports (traits) defined in the application layer.

pub mod artifact;
pub mod error;
pub mod naming;
pub mod params;
pub mod project;
pub mod render;
pub mod request;
pub mod template;
pub mod variants;

// Re-exports for convenience
pub use artifact::{
    ArtifactPaths, ArtifactRole, GenerationOutcome, OutcomeStatus, RegistryRecord,
    RenderedArtifact, Stage, TestReport, artifact_paths, test_target_name,
};
pub use error::DomainError;
pub use naming::validate_component_name;
pub use params::{
    Constraints, ParamType, ParamValue, ParameterRecord, ParameterSpec, validate_parameters,
};
pub use project::{ProjectContext, module_ident};
pub use render::{ParamVar, RenderVars, build_render_vars};
pub use request::{
    ComponentKind, ComponentRequest, GenerationFlags, KindOptions, extract_uri_params,
};
pub use template::{COMPONENT_TEMPLATE, GeneratorTemplatePair, TEST_TEMPLATE};
pub use variants::{SignatureVariant, WrapperVariant};
