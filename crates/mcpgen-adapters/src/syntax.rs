//! Syntax verification of rendered artifacts.
//!
//! Rendered code is parsed with the real Rust parser before anything is
//! written, so a broken template can never leave an unparseable file in the
//! target project.

use tracing::debug;

use mcpgen_core::{
    application::{EngineError, ports::SyntaxVerifier},
    domain::ArtifactRole,
    error::GeneratorResult,
};

/// Verifies rendered content with [`syn::parse_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SynVerifier;

impl SynVerifier {
    pub fn new() -> Self {
        Self
    }
}

impl SyntaxVerifier for SynVerifier {
    fn verify(&self, role: ArtifactRole, content: &str) -> GeneratorResult<()> {
        debug!(role = %role, bytes = content.len(), "Parsing rendered artifact");
        syn::parse_file(content).map_err(|e| EngineError::SyntaxValidation {
            role,
            detail: e.to_string(),
        })?;
        Ok(())
    }
}
