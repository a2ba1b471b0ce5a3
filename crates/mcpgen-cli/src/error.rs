//! Comprehensive error handling for the mcpgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use mcpgen_core::{
    application::EngineError,
    domain::DomainError,
    error::{ErrorOrigin, GeneratorError},
};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from the generation pipeline.
    ///
    /// Wrapped here so that the CLI can attach exit codes and stage
    /// information drawn from the core error without touching core
    /// internals.
    #[error("{0}")]
    Generator(#[from] GeneratorError),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation failed outside the pipeline (e.g. writing output).
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Generator(e) => e.suggestions(),
            Self::Config { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check your config file at ~/.config/mcpgen/config.toml".into(),
                "Or pass an explicit file with --config".into(),
            ],
            Self::Io { .. } => vec![
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Code | Meaning                           |
    /// |------|-----------------------------------|
    /// |  1   | Internal error or engine defect   |
    /// |  3   | Not inside an MCP server project  |
    /// |  4   | Invalid component name or kind    |
    /// |  5   | Component already exists          |
    /// |  6   | Generator templates missing       |
    /// |  7   | Parameter document rejected       |
    ///
    /// (0 is success; 2 is reserved for argument-parse failures, which clap
    /// reports before a `CliError` ever exists.)
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Generator(GeneratorError::Domain(e)) => match e {
                DomainError::InvalidName { .. } | DomainError::UnknownKind { .. } => 4,
                DomainError::ParameterSchema { .. } => 7,
            },
            Self::Generator(GeneratorError::Engine(e)) => match e {
                EngineError::NotAProject { .. } => 3,
                EngineError::ComponentExists { .. } => 5,
                EngineError::TemplateMissing { .. } => 6,
                EngineError::ParameterFile { .. } => 7,
                EngineError::Render { .. }
                | EngineError::SyntaxValidation { .. }
                | EngineError::TestExecution { .. }
                | EngineError::Filesystem { .. }
                | EngineError::Registry { .. } => 1,
            },
            Self::Config { .. } | Self::Io { .. } => 1,
        }
    }

    /// Whether this failure is the user's to fix or ours.
    fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Generator(e) => e.origin(),
            Self::Config { .. } => ErrorOrigin::User,
            Self::Io { .. } => ErrorOrigin::EngineDefect,
        }
    }

    /// The failed pipeline stage, if this error came from the pipeline.
    fn stage_label(&self) -> Option<&'static str> {
        match self {
            Self::Generator(e) => Some(e.stage().as_str()),
            _ => None,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));
        if let Some(stage) = self.stage_label() {
            output.push_str(&format!("  {}\n", format!("(while {stage})").dimmed()));
        }

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if self.origin() == ErrorOrigin::EngineDefect {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{26a0}".yellow(),
                "This looks like a defect in the generator or its templates, not in your input."
                    .yellow()
            ));
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));
        if let Some(stage) = self.stage_label() {
            out.push_str(&format!("  (while {stage})\n"));
        }

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if self.origin() == ErrorOrigin::EngineDefect {
            out.push_str(
                "\nThis looks like a defect in the generator or its templates, not in your input.\n",
            );
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.origin() {
            ErrorOrigin::User => tracing::warn!("User error: {}", self),
            ErrorOrigin::EngineDefect => tracing::error!("Engine defect: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn wrap(e: impl Into<GeneratorError>) -> CliError {
        CliError::Generator(e.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_not_a_project() {
        let err = wrap(EngineError::NotAProject {
            start: PathBuf::from("/tmp"),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_invalid_name() {
        let err = wrap(DomainError::InvalidName {
            name: "Bad".into(),
            rule: "must be snake_case".into(),
            examples: ["bad".into(), "bad_tool".into()],
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_component_exists() {
        let err = wrap(EngineError::ComponentExists {
            name: "x".into(),
            path: PathBuf::from("/p/src/tools/x.rs"),
        });
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn exit_code_template_missing() {
        let err = wrap(EngineError::TemplateMissing {
            kind: mcpgen_core::domain::ComponentKind::Tool,
            expected: PathBuf::from("/p/.mcpgen/generators/tool"),
            missing: vec!["test.rs.tera".into()],
        });
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn exit_code_parameter_errors() {
        let schema = wrap(DomainError::ParameterSchema {
            index: 0,
            field: "type",
            reason: "unknown type".into(),
        });
        let file = wrap(EngineError::ParameterFile {
            path: PathBuf::from("p.json"),
            reason: "invalid JSON".into(),
        });
        assert_eq!(schema.exit_code(), 7);
        assert_eq!(file.exit_code(), 7);
    }

    #[test]
    fn engine_defects_exit_with_one() {
        let err = wrap(EngineError::SyntaxValidation {
            role: mcpgen_core::domain::ArtifactRole::Source,
            detail: "unexpected token".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_names_the_stage() {
        let err = wrap(EngineError::TemplateMissing {
            kind: mcpgen_core::domain::ComponentKind::Prompt,
            expected: PathBuf::from("/p/.mcpgen/generators/prompt"),
            missing: vec!["component.rs.tera".into()],
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("(while resolving templates)"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn defect_note_only_for_engine_defects() {
        let defect = wrap(EngineError::TestExecution {
            detail: "1 test failed".into(),
        });
        let user = wrap(EngineError::ComponentExists {
            name: "x".into(),
            path: PathBuf::from("/p/src/tools/x.rs"),
        });
        assert!(defect.format_plain(false).contains("defect"));
        assert!(!user.format_plain(false).contains("defect"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = wrap(EngineError::NotAProject {
            start: PathBuf::from("/tmp"),
        });
        assert!(!err.format_plain(true).contains("--verbose"));
    }
}
