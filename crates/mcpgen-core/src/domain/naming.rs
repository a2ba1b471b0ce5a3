//! Component name validation.
//!
//! Generated components become Rust modules and functions, so names must be
//! bare snake_case identifiers that are not reserved words. Errors always
//! name the specific rule violated and carry two corrected examples.

use super::error::DomainError;

/// Rust keywords (strict and reserved, both editions) that cannot be used as
/// bare identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Check whether `word` is a Rust keyword.
pub fn is_rust_keyword(word: &str) -> bool {
    RUST_KEYWORDS.contains(&word)
}

/// Validate a component name as a snake_case Rust identifier.
///
/// Rules:
/// - not empty
/// - starts with a lowercase letter or underscore
/// - contains only lowercase letters, digits, and underscores
/// - is not a Rust keyword
pub fn validate_component_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(invalid(name, "name cannot be empty"));
    }

    let first = name.chars().next().unwrap();
    if first.is_ascii_digit() {
        return Err(invalid(name, "name must start with a letter or underscore"));
    }
    if first.is_ascii_uppercase() {
        return Err(invalid(
            name,
            "name must use snake_case (start with a lowercase letter)",
        ));
    }
    if !(first.is_ascii_lowercase() || first == '_') {
        return Err(invalid(name, "name must start with a letter or underscore"));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(invalid(
            name,
            "name may contain only lowercase letters, digits, and underscores",
        ));
    }

    if is_rust_keyword(name) {
        return Err(invalid(
            name,
            "name is a Rust keyword and cannot be used as an identifier",
        ));
    }

    Ok(())
}

fn invalid(name: &str, rule: &str) -> DomainError {
    DomainError::InvalidName {
        name: name.to_string(),
        rule: rule.to_string(),
        examples: example_corrections(name),
    }
}

/// Produce two deterministic corrected forms of an invalid name.
fn example_corrections(name: &str) -> [String; 2] {
    let sanitized = sanitize(name);
    let alternate = if is_rust_keyword(&sanitized) || sanitized == name {
        format!("my_{sanitized}")
    } else {
        sanitized.clone()
    };
    // Never suggest the input back; fall back to a generic pair.
    if sanitized.is_empty() {
        return ["my_component".into(), "handle_request".into()];
    }
    if alternate == sanitized {
        [sanitized.clone(), format!("{sanitized}_handler")]
    } else {
        [alternate, format!("{sanitized}_handler")]
    }
}

/// Lowercase with underscores at case boundaries, map invalid characters to
/// underscores, strip leading digits.
fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev = '\0';
    for c in name.chars() {
        // Split at a lower-to-upper boundary so CamelCase becomes snake_case.
        if c.is_ascii_uppercase()
            && (prev.is_ascii_lowercase() || prev.is_ascii_digit())
            && !out.ends_with('_')
        {
            out.push('_');
        }
        prev = c;
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c == '_' {
            out.push(c);
        } else if c.is_ascii_digit() {
            if out.is_empty() {
                continue; // identifiers cannot start with a digit
            }
            out.push(c);
        } else {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}
