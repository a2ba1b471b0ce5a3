//! The declarative generation request.
//!
//! A [`ComponentRequest`] is created once per invocation from CLI arguments
//! and never persisted. The component kind is carried by [`KindOptions`] so a
//! request can never pair, say, resource options with a tool kind.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::params::ParameterSpec;

/// The closed set of generatable component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Tool,
    Resource,
    Prompt,
    Middleware,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Tool,
        ComponentKind::Resource,
        ComponentKind::Prompt,
        ComponentKind::Middleware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Resource => "resource",
            Self::Prompt => "prompt",
            Self::Middleware => "middleware",
        }
    }

    /// Directory name for this kind under `src/` and `tests/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Tool => "tools",
            Self::Resource => "resources",
            Self::Prompt => "prompts",
            Self::Middleware => "middlewares",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tool" => Ok(Self::Tool),
            "resource" => Ok(Self::Resource),
            "prompt" => Ok(Self::Prompt),
            "middleware" => Ok(Self::Middleware),
            other => Err(DomainError::UnknownKind {
                value: other.to_string(),
            }),
        }
    }
}

/// Behavioral flags shared by every kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationFlags {
    /// Generate an `async fn` signature.
    pub is_async: bool,
    /// Include a server context parameter in the signature.
    pub with_context: bool,
    /// Wrap the body in an authorization check.
    pub with_auth: bool,
    /// Report intended paths without touching the filesystem.
    pub dry_run: bool,
    /// Skip the test-runner stage after writing.
    pub skip_tests: bool,
}

/// Kind-specific options. The variant *is* the component kind.
#[derive(Debug, Clone, PartialEq)]
pub enum KindOptions {
    Tool {
        read_only: bool,
        idempotent: bool,
        open_world: bool,
        return_type: String,
    },
    Resource {
        uri: String,
        mime_type: String,
    },
    Prompt {
        with_schema: bool,
    },
    Middleware,
}

impl KindOptions {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Tool { .. } => ComponentKind::Tool,
            Self::Resource { .. } => ComponentKind::Resource,
            Self::Prompt { .. } => ComponentKind::Prompt,
            Self::Middleware => ComponentKind::Middleware,
        }
    }
}

/// One invocation's worth of generation input.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRequest {
    pub name: String,
    pub description: String,
    pub flags: GenerationFlags,
    pub options: KindOptions,
    /// Parameters known up front (e.g. extracted from a resource URI).
    pub inline_params: Vec<ParameterSpec>,
    /// Optional parameter-definition document to load during the pipeline.
    pub params_path: Option<PathBuf>,
}

impl ComponentRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        flags: GenerationFlags,
        options: KindOptions,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            flags,
            options,
            inline_params: Vec::new(),
            params_path: None,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.options.kind()
    }

    pub fn with_params_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.params_path = Some(path.into());
        self
    }

    pub fn with_inline_params(mut self, params: Vec<ParameterSpec>) -> Self {
        self.inline_params = params;
        self
    }
}

/// Extract `{name}`-style placeholders from a resource URI template, in
/// order of appearance.
///
/// Each placeholder becomes a required string parameter of the generated
/// resource handler. Malformed braces are ignored rather than rejected; the
/// URI itself is opaque to the generator.
pub fn extract_uri_params(uri: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut rest = uri;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                if !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_')
                    && !params.iter().any(|p| p == name)
                {
                    params.push(name.to_string());
                }
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    params
}
