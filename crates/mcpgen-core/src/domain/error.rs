use thiserror::Error;

/// Domain-rule violations.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Actionable (provides suggestions)
/// - Attributable (every variant is a user-input error, never an engine bug)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The component name breaks an identifier rule.
    ///
    /// `rule` names the specific rule violated; `examples` carries two
    /// corrected forms the user could use instead.
    #[error("Invalid component name '{name}': {rule}")]
    InvalidName {
        name: String,
        rule: String,
        examples: [String; 2],
    },

    /// A parameter record in the schema document is malformed.
    #[error("Parameter {index} ('{field}'): {reason}")]
    ParameterSchema {
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// An unrecognized component kind string.
    #[error("Unknown component kind '{value}'")]
    UnknownKind { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { rule, examples, .. } => vec![
                format!("Rule violated: {rule}"),
                format!("Try: {} or {}", examples[0], examples[1]),
            ],
            Self::ParameterSchema {
                index,
                field,
                reason,
            } => vec![
                format!("Fix record {index} in the parameter document (field '{field}')"),
                format!("Details: {reason}"),
                "Valid types: string, integer, float, boolean, list[T], optional[T]".into(),
            ],
            Self::UnknownKind { value } => vec![
                format!("'{value}' is not a component kind"),
                "Valid kinds: tool, resource, prompt, middleware".into(),
            ],
        }
    }
}
