//! Typed parameter specifications.
//!
//! The parameter document is an ordered list of records; each record maps to
//! a [`ParameterSpec`]. Validation is pure parse-and-check: duplicate names,
//! unknown type tags, a default on a required parameter, and inconsistent
//! constraints are each a distinct error naming the offending record index
//! and field.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::naming::{is_rust_keyword, validate_component_name};

/// The fixed set of parameter type tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Float,
    Boolean,
    List(Box<ParamType>),
    Optional(Box<ParamType>),
}

impl ParamType {
    /// Parse a type tag such as `string`, `list[integer]`, `optional[float]`.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        match tag {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "boolean" => Some(Self::Boolean),
            _ => {
                let inner = tag
                    .strip_prefix("list[")
                    .map(|rest| (true, rest))
                    .or_else(|| tag.strip_prefix("optional[").map(|rest| (false, rest)))?;
                let (is_list, rest) = inner;
                let rest = rest.strip_suffix(']')?;
                // Only scalar element types; no nested containers.
                let element = match ParamType::parse(rest)? {
                    t @ (Self::String | Self::Integer | Self::Float | Self::Boolean) => t,
                    _ => return None,
                };
                Some(if is_list {
                    Self::List(Box::new(element))
                } else {
                    Self::Optional(Box::new(element))
                })
            }
        }
    }

    /// The Rust type this tag maps to in generated signatures.
    pub fn rust_type(&self) -> String {
        match self {
            Self::String => "String".into(),
            Self::Integer => "i64".into(),
            Self::Float => "f64".into(),
            Self::Boolean => "bool".into(),
            Self::List(inner) => format!("Vec<{}>", inner.rust_type()),
            Self::Optional(inner) => format!("Option<{}>", inner.rust_type()),
        }
    }

    /// The scalar type underneath any `list`/`optional` wrapper.
    pub fn base(&self) -> &ParamType {
        match self {
            Self::List(inner) | Self::Optional(inner) => inner.base(),
            other => other,
        }
    }

    pub fn is_stringy(&self) -> bool {
        matches!(self.base(), Self::String)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.base(), Self::Integer | Self::Float)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Boolean => f.write_str("boolean"),
            Self::List(inner) => write!(f, "list[{inner}]"),
            Self::Optional(inner) => write!(f, "optional[{inner}]"),
        }
    }
}

/// A parameter default value, as found in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Whether this value is assignable to a parameter of type `ty`.
    pub fn matches(&self, ty: &ParamType) -> bool {
        match (self, ty) {
            (_, ParamType::Optional(inner)) => self.matches(inner),
            (Self::Bool(_), ParamType::Boolean) => true,
            (Self::Int(_), ParamType::Integer) => true,
            // JSON integers are acceptable floats.
            (Self::Int(_) | Self::Float(_), ParamType::Float) => true,
            (Self::Str(_), ParamType::String) => true,
            (Self::List(items), ParamType::List(inner)) => {
                items.iter().all(|v| v.matches(inner))
            }
            _ => false,
        }
    }
}

/// A raw record from the parameter document, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<ParamValue>,
    #[serde(default)]
    pub min_length: Option<u64>,
    #[serde(default)]
    pub max_length: Option<u64>,
    #[serde(default)]
    pub ge: Option<f64>,
    #[serde(default)]
    pub le: Option<f64>,
    #[serde(default)]
    pub gt: Option<f64>,
    #[serde(default)]
    pub lt: Option<f64>,
    #[serde(default)]
    pub pattern: Option<String>,
}

/// The constraint set attached to one parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub ge: Option<f64>,
    pub le: Option<f64>,
    pub gt: Option<f64>,
    pub lt: Option<f64>,
    pub pattern: Option<String>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.ge.is_none()
            && self.le.is_none()
            && self.gt.is_none()
            && self.lt.is_none()
            && self.pattern.is_none()
    }
}

/// A validated, typed parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub ty: ParamType,
    pub description: String,
    pub required: bool,
    pub default: Option<ParamValue>,
    pub constraints: Constraints,
}

impl ParameterSpec {
    /// A required string parameter with no constraints (used for parameters
    /// derived from resource URI templates).
    pub fn required_string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ParamType::String,
            description: description.into(),
            required: true,
            default: None,
            constraints: Constraints::default(),
        }
    }
}

/// Validate an ordered list of records into parameter specs. Order is
/// preserved; reported indices refer to positions in the document.
pub fn validate_parameters(records: &[ParameterRecord]) -> Result<Vec<ParameterSpec>, DomainError> {
    let mut specs: Vec<ParameterSpec> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let spec = validate_record(index, record)?;
        if specs.iter().any(|p| p.name == spec.name) {
            return Err(DomainError::ParameterSchema {
                index,
                field: "name",
                reason: format!("duplicate parameter name '{}'", spec.name),
            });
        }
        specs.push(spec);
    }

    Ok(specs)
}

fn validate_record(index: usize, record: &ParameterRecord) -> Result<ParameterSpec, DomainError> {
    let schema_err = |field: &'static str, reason: String| DomainError::ParameterSchema {
        index,
        field,
        reason,
    };

    if validate_component_name(&record.name).is_err() || is_rust_keyword(&record.name) {
        return Err(schema_err(
            "name",
            format!(
                "'{}' is not a valid snake_case identifier",
                record.name
            ),
        ));
    }

    let ty = ParamType::parse(&record.type_tag).ok_or_else(|| {
        schema_err(
            "type",
            format!("unknown type tag '{}'", record.type_tag),
        )
    })?;

    if record.required && record.default.is_some() {
        return Err(schema_err(
            "default",
            "a required parameter may not declare a default value".into(),
        ));
    }

    if let Some(default) = &record.default {
        if !default.matches(&ty) {
            return Err(schema_err(
                "default",
                format!("default value does not match declared type '{ty}'"),
            ));
        }
    }

    // Constraint applicability.
    if (record.min_length.is_some() || record.max_length.is_some()) && !ty.is_stringy() {
        return Err(schema_err(
            "min_length",
            format!("length constraints only apply to string parameters, not '{ty}'"),
        ));
    }
    if record.pattern.is_some() && !ty.is_stringy() {
        return Err(schema_err(
            "pattern",
            format!("pattern constraints only apply to string parameters, not '{ty}'"),
        ));
    }
    let has_bounds =
        record.ge.is_some() || record.le.is_some() || record.gt.is_some() || record.lt.is_some();
    if has_bounds && !ty.is_numeric() {
        return Err(schema_err(
            "ge",
            format!("numeric bounds only apply to integer/float parameters, not '{ty}'"),
        ));
    }

    // Constraint internal consistency.
    if let (Some(min), Some(max)) = (record.min_length, record.max_length) {
        if min > max {
            return Err(schema_err(
                "min_length",
                format!("min_length ({min}) exceeds max_length ({max})"),
            ));
        }
    }
    if let (Some(ge), Some(le)) = (record.ge, record.le) {
        if ge > le {
            return Err(schema_err("ge", format!("ge ({ge}) exceeds le ({le})")));
        }
    }
    if let (Some(gt), Some(lt)) = (record.gt, record.lt) {
        if gt >= lt {
            return Err(schema_err(
                "gt",
                format!("gt ({gt}) must be strictly below lt ({lt})"),
            ));
        }
    }

    Ok(ParameterSpec {
        name: record.name.clone(),
        ty,
        description: record.description.clone(),
        required: record.required,
        default: record.default.clone(),
        constraints: Constraints {
            min_length: record.min_length,
            max_length: record.max_length,
            ge: record.ge,
            le: record.le,
            gt: record.gt,
            lt: record.lt,
            pattern: record.pattern.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, type_tag: &str) -> ParameterRecord {
        ParameterRecord {
            name: name.into(),
            type_tag: type_tag.into(),
            description: String::new(),
            required: false,
            default: None,
            min_length: None,
            max_length: None,
            ge: None,
            le: None,
            gt: None,
            lt: None,
            pattern: None,
        }
    }

    #[test]
    fn type_tags_parse() {
        assert_eq!(ParamType::parse("string"), Some(ParamType::String));
        assert_eq!(
            ParamType::parse("list[integer]"),
            Some(ParamType::List(Box::new(ParamType::Integer)))
        );
        assert_eq!(
            ParamType::parse("optional[boolean]"),
            Some(ParamType::Optional(Box::new(ParamType::Boolean)))
        );
        assert_eq!(ParamType::parse("str"), None);
        assert_eq!(ParamType::parse("list[list[string]]"), None);
    }

    #[test]
    fn rust_types_derived_from_tags() {
        assert_eq!(ParamType::parse("float").unwrap().rust_type(), "f64");
        assert_eq!(
            ParamType::parse("list[string]").unwrap().rust_type(),
            "Vec<String>"
        );
        assert_eq!(
            ParamType::parse("optional[integer]").unwrap().rust_type(),
            "Option<i64>"
        );
    }

    #[test]
    fn display_round_trips() {
        for tag in ["string", "integer", "list[float]", "optional[string]"] {
            assert_eq!(ParamType::parse(tag).unwrap().to_string(), tag);
        }
    }

    #[test]
    fn valid_records_become_specs_in_order() {
        let mut query = record("query", "string");
        query.required = true;
        let mut limit = record("limit", "integer");
        limit.default = Some(ParamValue::Int(10));
        limit.ge = Some(1.0);
        limit.le = Some(100.0);

        let specs = validate_parameters(&[query, limit]).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, "query");
        assert!(specs[0].required);
        assert_eq!(specs[1].name, "limit");
        assert_eq!(specs[1].default, Some(ParamValue::Int(10)));
        assert_eq!(specs[1].constraints.ge, Some(1.0));
        assert_eq!(specs[1].constraints.le, Some(100.0));
    }

    #[test]
    fn required_with_default_is_rejected_at_its_index() {
        let mut bad = record("query", "string");
        bad.required = true;
        bad.default = Some(ParamValue::Str("x".into()));

        let err = validate_parameters(&[record("ok", "integer"), bad]).unwrap_err();
        match err {
            DomainError::ParameterSchema { index, field, .. } => {
                assert_eq!(index, 1);
                assert_eq!(field, "default");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = validate_parameters(&[record("q", "string"), record("q", "integer")])
            .unwrap_err();
        match err {
            DomainError::ParameterSchema { index, field, .. } => {
                assert_eq!(index, 1);
                assert_eq!(field, "name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_tag_names_the_type_field() {
        let err = validate_parameters(&[record("q", "str")]).unwrap_err();
        match err {
            DomainError::ParameterSchema { field, .. } => assert_eq!(field, "type"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn inverted_length_bounds_are_rejected() {
        let mut bad = record("q", "string");
        bad.min_length = Some(10);
        bad.max_length = Some(2);
        assert!(validate_parameters(&[bad]).is_err());
    }

    #[test]
    fn numeric_bounds_on_string_are_rejected() {
        let mut bad = record("q", "string");
        bad.ge = Some(1.0);
        assert!(validate_parameters(&[bad]).is_err());
    }

    #[test]
    fn length_bounds_on_integer_are_rejected() {
        let mut bad = record("n", "integer");
        bad.min_length = Some(1);
        assert!(validate_parameters(&[bad]).is_err());
    }

    #[test]
    fn mismatched_default_type_is_rejected() {
        let mut bad = record("n", "integer");
        bad.default = Some(ParamValue::Str("ten".into()));
        assert!(validate_parameters(&[bad]).is_err());
    }

    #[test]
    fn integer_default_accepted_for_float() {
        let mut rec = record("ratio", "float");
        rec.default = Some(ParamValue::Int(1));
        assert!(validate_parameters(&[rec]).is_ok());
    }

    #[test]
    fn list_default_checks_element_types() {
        let mut rec = record("tags", "list[string]");
        rec.default = Some(ParamValue::List(vec![
            ParamValue::Str("a".into()),
            ParamValue::Int(1),
        ]));
        assert!(validate_parameters(&[rec]).is_err());
    }
}
