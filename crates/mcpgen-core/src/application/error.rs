//! Application layer errors.
//!
//! These errors represent orchestration and infrastructure failures, not
//! domain-rule violations. Domain-rule errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{ArtifactRole, ComponentKind};

/// Errors that occur while driving the generation pipeline.
#[derive(Debug, Error, Clone)]
pub enum EngineError {
    /// No enclosing generator-capable project was found.
    #[error("Not inside an MCP server project (searched upward from {start})")]
    NotAProject { start: PathBuf },

    /// The project lacks generator templates for the requested kind.
    #[error("Generator templates missing for '{kind}' (expected in {expected})")]
    TemplateMissing {
        kind: ComponentKind,
        expected: PathBuf,
        missing: Vec<String>,
    },

    /// A component with this name already exists at its expected path.
    #[error("Component '{name}' already exists at {path}")]
    ComponentExists { name: String, path: PathBuf },

    /// The parameter document could not be read or parsed.
    #[error("Failed to load parameter document {path}: {reason}")]
    ParameterFile { path: PathBuf, reason: String },

    /// Template rendering failed (unresolvable variable, template error).
    #[error("Template rendering failed for the {role} template: {detail}")]
    Render { role: ArtifactRole, detail: String },

    /// Rendered content failed to parse as Rust.
    #[error("Generated {role} file has a syntax error: {detail}")]
    SyntaxValidation { role: ArtifactRole, detail: String },

    /// The generated test did not pass (failure, timeout, or launch error).
    #[error("Generated tests failed: {detail}")]
    TestExecution { detail: String },

    /// A filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The registry file could not be parsed or appended to.
    #[error("Registry update failed for {path}: {reason}")]
    Registry { path: PathBuf, reason: String },
}

impl EngineError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAProject { .. } => vec![
                "Run this command from inside an MCP server project".into(),
                "A generator-capable project declares the 'rmcp' dependency in Cargo.toml".into(),
            ],
            Self::TemplateMissing { kind, expected, .. } => vec![
                format!("Expected template pair in {}", expected.display()),
                format!(
                    "Restore .mcpgen/generators/{kind}/component.rs.tera and test.rs.tera"
                ),
                "Was this project created from an mcpgen-capable template?".into(),
            ],
            Self::ComponentExists { name, .. } => vec![
                format!("Choose a different name than '{name}'"),
                "Or remove the existing component file and its test first".into(),
            ],
            Self::ParameterFile { .. } => vec![
                "Check that the file exists and contains a JSON array of records".into(),
                "Each record needs at least \"name\" and \"type\" fields".into(),
            ],
            Self::Render { .. } | Self::SyntaxValidation { .. } => vec![
                "This is a bug in the generator templates, not in your input".into(),
                "Please report it to the template maintainer".into(),
            ],
            Self::TestExecution { .. } => vec![
                "The generated test did not pass; this indicates a broken template".into(),
                "Inspect the written files and the test output above".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Check write permissions for {}", path.display()),
                "Ensure the project directory is not read-only".into(),
            ],
            Self::Registry { path, .. } => vec![
                format!("Check that {} is valid TOML", path.display()),
                "The written component files were rolled back; re-run after fixing".into(),
            ],
        }
    }
}
