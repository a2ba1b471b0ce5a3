//! Driven (output) ports — implemented by infrastructure.
//!
//! These traits define what the generation pipeline needs from external
//! systems. The `mcpgen-adapters` crate provides the implementations; tests
//! supply in-memory fakes.

use std::path::Path;
use std::time::Duration;

use crate::domain::{
    ArtifactRole, ComponentKind, GeneratorTemplatePair, ParameterRecord, ProjectContext,
    RegistryRecord, RenderVars, TestReport,
};
use crate::error::GeneratorResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mcpgen_adapters::filesystem::LocalFilesystem` (production)
/// - `mcpgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file's entire content as UTF-8.
    fn read_file(&self, path: &Path) -> GeneratorResult<String>;

    /// Write content to a file (parent directory must exist).
    fn write_file(&self, path: &Path, content: &str) -> GeneratorResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GeneratorResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> GeneratorResult<()>;
}

/// Port for locating the enclosing generator-capable project.
///
/// The locator is a read-only probe: it walks ancestor directories from
/// `start` until it finds a project manifest declaring the MCP runtime
/// dependency, and reports which kinds have templates available.
pub trait ProjectLocator: Send + Sync {
    fn locate(&self, start: &Path) -> GeneratorResult<ProjectContext>;
}

/// Port for resolving and loading the per-kind template pair.
pub trait TemplateSource: Send + Sync {
    fn resolve(
        &self,
        project: &ProjectContext,
        kind: ComponentKind,
    ) -> GeneratorResult<GeneratorTemplatePair>;
}

/// Port for template rendering. Rendering must be strict: an unresolvable
/// variable is an error, never silently empty output.
pub trait TemplateEngine: Send + Sync {
    fn render(
        &self,
        role: ArtifactRole,
        template: &str,
        vars: &RenderVars,
    ) -> GeneratorResult<String>;
}

/// Port for syntax verification of rendered content, using the target
/// language's own parser.
pub trait SyntaxVerifier: Send + Sync {
    fn verify(&self, role: ArtifactRole, content: &str) -> GeneratorResult<()>;
}

/// Port for reading the optional parameter-definition document.
pub trait ParameterLoader: Send + Sync {
    fn load(&self, path: &Path) -> GeneratorResult<Vec<ParameterRecord>>;
}

/// Result of a registry append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryOutcome {
    /// A new record was appended.
    Appended,
    /// A record with this name already exists; the file was left untouched.
    AlreadyRegistered,
}

/// Port for the per-kind component registry. Appending must preserve the
/// order and text of existing entries.
pub trait ComponentRegistry: Send + Sync {
    fn register(
        &self,
        registry_path: &Path,
        record: &RegistryRecord,
    ) -> GeneratorResult<RegistryOutcome>;

    /// Read back all records from one registry file. A missing file is an
    /// empty registry, not an error.
    fn list(&self, registry_path: &Path) -> GeneratorResult<Vec<RegistryRecord>>;
}

/// Port for executing the generated test artifact in an isolated process.
pub trait TestHarness: Send + Sync {
    fn run(
        &self,
        project_root: &Path,
        test_target: &str,
        timeout: Duration,
    ) -> GeneratorResult<TestReport>;
}
