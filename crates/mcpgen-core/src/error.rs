//! Unified error handling for the mcpgen core.
//!
//! The root [`GeneratorError`] wraps domain and engine errors and classifies
//! every failure two ways:
//!
//! - by **origin** ([`ErrorOrigin`]): user/environment errors carry a hint
//!   and no stack detail; engine defects (broken template or internal bug)
//!   are flagged for maintainers — a user should never see a syntax error
//!   produced from their own input.
//! - by **stage** ([`Stage`]): which pipeline stage the failure belongs to,
//!   so every user-visible message can name it.

use thiserror::Error;

use crate::application::EngineError;
use crate::domain::{DomainError, Stage};

/// Root error type for generation operations.
#[derive(Debug, Error, Clone)]
pub enum GeneratorError {
    /// Domain-rule violations (always user input).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration and infrastructure failures.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Who is at fault, which drives how the failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
    /// Recoverable by the user; report with a hint.
    User,
    /// Broken template or internal bug; flag for maintainers.
    EngineDefect,
}

impl GeneratorError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Engine(e) => e.suggestions(),
        }
    }

    /// Whether the fault lies with the user's input/environment or with the
    /// generator itself.
    pub fn origin(&self) -> ErrorOrigin {
        match self {
            Self::Domain(_) => ErrorOrigin::User,
            Self::Engine(e) => match e {
                EngineError::Render { .. }
                | EngineError::SyntaxValidation { .. }
                | EngineError::TestExecution { .. } => ErrorOrigin::EngineDefect,
                _ => ErrorOrigin::User,
            },
        }
    }

    /// The pipeline stage this failure belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Domain(DomainError::InvalidName { .. }) => Stage::Validating,
            Self::Domain(DomainError::UnknownKind { .. }) => Stage::Validating,
            Self::Domain(DomainError::ParameterSchema { .. }) => Stage::LoadingParameters,
            Self::Engine(e) => match e {
                EngineError::NotAProject { .. } => Stage::Locating,
                EngineError::ComponentExists { .. } => Stage::Validating,
                EngineError::ParameterFile { .. } => Stage::LoadingParameters,
                EngineError::TemplateMissing { .. } => Stage::ResolvingTemplates,
                EngineError::Render { .. } => Stage::Rendering,
                EngineError::SyntaxValidation { .. } => Stage::VerifyingSyntax,
                EngineError::Filesystem { .. } => Stage::Writing,
                EngineError::Registry { .. } => Stage::UpdatingRegistry,
                EngineError::TestExecution { .. } => Stage::RunningTests,
            },
        }
    }
}

/// Convenient result type alias.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
