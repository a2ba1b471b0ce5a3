//! Artifact paths, rendered artifacts, registry records, and outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::request::{ComponentKind, ComponentRequest};

/// Whether a rendered artifact is the source file or the test file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactRole {
    Source,
    Test,
}

impl ArtifactRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target path plus rendered content. Transient.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArtifact {
    pub role: ArtifactRole,
    pub path: PathBuf,
    pub content: String,
}

/// The deterministic target paths for one kind + name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub source: PathBuf,
    pub test: PathBuf,
    pub registry: PathBuf,
}

/// Derive the artifact paths for a component.
///
/// Layout contract:
/// - source:   `<root>/src/<kind-dir>/<name>.rs`
/// - test:     `<root>/tests/<kind-dir>/test_<name>.rs`
/// - registry: `<root>/src/registry/<kind-dir>.toml`
pub fn artifact_paths(root: &Path, kind: ComponentKind, name: &str) -> ArtifactPaths {
    let dir = kind.dir_name();
    ArtifactPaths {
        source: root.join("src").join(dir).join(format!("{name}.rs")),
        test: root.join("tests").join(dir).join(format!("test_{name}.rs")),
        registry: root.join("src").join("registry").join(format!("{dir}.toml")),
    }
}

/// Cargo test-target name for the generated test file.
pub fn test_target_name(name: &str) -> String {
    format!("test_{name}")
}

/// One appended registry entry: the component's name plus a small metadata
/// bundle. Serialized as a `[[component]]` table by the registry adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub name: String,
    pub kind: String,
    pub description: String,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub with_context: bool,
    pub with_auth: bool,
    /// RFC 3339 creation timestamp, stamped by the registry adapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl RegistryRecord {
    pub fn from_request(request: &ComponentRequest) -> Self {
        Self {
            name: request.name.clone(),
            kind: request.kind().as_str().to_string(),
            description: request.description.clone(),
            is_async: request.flags.is_async,
            with_context: request.flags.with_context,
            with_auth: request.flags.with_auth,
            created: None,
        }
    }
}

/// Result of executing the generated test artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub passed: bool,
    /// Combined stdout + stderr of the test process.
    pub output: String,
}

/// Final pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Succeeded,
    Failed,
}

/// What one invocation did. Returned to the reporter, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub status: OutcomeStatus,
    pub created: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
    pub test: Option<TestReport>,
    pub diagnostics: Vec<String>,
    pub dry_run: bool,
}

/// Pipeline stages, in execution order. A stage's success is a precondition
/// for the next; any failure is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Locating,
    Validating,
    LoadingParameters,
    ResolvingTemplates,
    Rendering,
    VerifyingSyntax,
    Writing,
    UpdatingRegistry,
    RunningTests,
    Reporting,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locating => "locating project",
            Self::Validating => "validating request",
            Self::LoadingParameters => "loading parameters",
            Self::ResolvingTemplates => "resolving templates",
            Self::Rendering => "rendering templates",
            Self::VerifyingSyntax => "verifying syntax",
            Self::Writing => "writing artifacts",
            Self::UpdatingRegistry => "updating registry",
            Self::RunningTests => "running tests",
            Self::Reporting => "reporting",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_the_layout_contract() {
        let paths = artifact_paths(Path::new("/proj"), ComponentKind::Tool, "search_documents");
        assert_eq!(
            paths.source,
            PathBuf::from("/proj/src/tools/search_documents.rs")
        );
        assert_eq!(
            paths.test,
            PathBuf::from("/proj/tests/tools/test_search_documents.rs")
        );
        assert_eq!(paths.registry, PathBuf::from("/proj/src/registry/tools.toml"));
    }

    #[test]
    fn middleware_pluralizes_consistently() {
        let paths = artifact_paths(Path::new("/p"), ComponentKind::Middleware, "auth_mw");
        assert_eq!(paths.source, PathBuf::from("/p/src/middlewares/auth_mw.rs"));
        assert_eq!(
            paths.test,
            PathBuf::from("/p/tests/middlewares/test_auth_mw.rs")
        );
    }

    #[test]
    fn test_target_matches_file_stem() {
        assert_eq!(test_target_name("fetch_data"), "test_fetch_data");
    }

    #[test]
    fn stage_order_is_stable_in_display() {
        assert_eq!(Stage::Locating.to_string(), "locating project");
        assert_eq!(Stage::UpdatingRegistry.to_string(), "updating registry");
    }
}
