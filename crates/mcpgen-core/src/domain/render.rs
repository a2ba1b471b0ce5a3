//! The render-variable context.
//!
//! One deterministic context is derived from the request, the resolved
//! parameter list, and the project metadata, then bound to both templates.
//! The context is a plain serializable struct so the rendering adapter can
//! feed it to the template engine without knowing anything about requests.

use serde::Serialize;

use super::params::{ParamValue, ParameterSpec};
use super::project::ProjectContext;
use super::request::{ComponentRequest, KindOptions};
use super::variants::{SignatureVariant, WrapperVariant};

/// Everything a template may reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderVars {
    pub component_name: String,
    pub description: String,
    pub kind: String,
    pub kind_dir: String,
    pub project_name: String,
    pub module_name: String,

    /// Signature variant dispatch key (`sync`, `async`, `sync_ctx`, `async_ctx`).
    pub signature: String,
    /// Wrapper variant dispatch key (`plain`, `auth`).
    pub wrapper: String,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub with_context: bool,
    pub with_auth: bool,

    pub params: Vec<ParamVar>,

    // Tool options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_world: Option<bool>,

    // Resource options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    // Prompt options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_schema: Option<bool>,
}

/// One parameter as seen by the templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamVar {
    pub name: String,
    /// Type tag from the schema document (`string`, `list[integer]`, ...).
    pub type_tag: String,
    /// Rust type for the generated signature (`String`, `Vec<i64>`, ...).
    pub rust_type: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub le: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl ParamVar {
    fn from_spec(spec: &ParameterSpec) -> Self {
        Self {
            name: spec.name.clone(),
            type_tag: spec.ty.to_string(),
            rust_type: spec.ty.rust_type(),
            description: spec.description.clone(),
            required: spec.required,
            default: spec.default.clone(),
            min_length: spec.constraints.min_length,
            max_length: spec.constraints.max_length,
            ge: spec.constraints.ge,
            le: spec.constraints.le,
            gt: spec.constraints.gt,
            lt: spec.constraints.lt,
            pattern: spec.constraints.pattern.clone(),
        }
    }
}

/// Build the render context. Pure; the same inputs always produce the same
/// context, with parameters in their declared order.
pub fn build_render_vars(
    request: &ComponentRequest,
    params: &[ParameterSpec],
    project: &ProjectContext,
) -> RenderVars {
    let signature = SignatureVariant::select(&request.flags);
    let wrapper = WrapperVariant::select(&request.flags);

    let mut vars = RenderVars {
        component_name: request.name.clone(),
        description: request.description.clone(),
        kind: request.kind().as_str().to_string(),
        kind_dir: request.kind().dir_name().to_string(),
        project_name: project.package_name.clone(),
        module_name: project.module_name.clone(),
        signature: signature.name().to_string(),
        wrapper: wrapper.name().to_string(),
        is_async: signature.is_async(),
        with_context: signature.has_context(),
        with_auth: request.flags.with_auth,
        params: params.iter().map(ParamVar::from_spec).collect(),
        return_type: None,
        read_only: None,
        idempotent: None,
        open_world: None,
        uri: None,
        mime_type: None,
        with_schema: None,
    };

    match &request.options {
        KindOptions::Tool {
            read_only,
            idempotent,
            open_world,
            return_type,
        } => {
            vars.return_type = Some(return_type.clone());
            vars.read_only = Some(*read_only);
            vars.idempotent = Some(*idempotent);
            vars.open_world = Some(*open_world);
        }
        KindOptions::Resource { uri, mime_type } => {
            vars.uri = Some(uri.clone());
            vars.mime_type = Some(mime_type.clone());
            // Resources return their content as text.
            vars.return_type = Some("String".to_string());
        }
        KindOptions::Prompt { with_schema } => {
            vars.with_schema = Some(*with_schema);
            vars.return_type = Some("String".to_string());
        }
        KindOptions::Middleware => {}
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{ComponentKind, GenerationFlags};

    fn project() -> ProjectContext {
        ProjectContext::new("/p", "weather-server", vec![ComponentKind::Tool])
    }

    fn tool_request() -> ComponentRequest {
        ComponentRequest::new(
            "search_documents",
            "Search through documents",
            GenerationFlags {
                is_async: true,
                ..GenerationFlags::default()
            },
            KindOptions::Tool {
                read_only: true,
                idempotent: true,
                open_world: false,
                return_type: "String".into(),
            },
        )
    }

    #[test]
    fn context_is_deterministic() {
        let req = tool_request();
        let a = build_render_vars(&req, &[], &project());
        let b = build_render_vars(&req, &[], &project());
        assert_eq!(a, b);
    }

    #[test]
    fn tool_options_populate_tool_fields_only() {
        let vars = build_render_vars(&tool_request(), &[], &project());
        assert_eq!(vars.read_only, Some(true));
        assert_eq!(vars.return_type.as_deref(), Some("String"));
        assert!(vars.uri.is_none());
        assert!(vars.with_schema.is_none());
    }

    #[test]
    fn signature_variant_flows_into_context() {
        let vars = build_render_vars(&tool_request(), &[], &project());
        assert_eq!(vars.signature, "async");
        assert!(vars.is_async);
        assert!(!vars.with_context);
    }

    #[test]
    fn params_preserve_declared_order() {
        let params = vec![
            ParameterSpec::required_string("query", "Search query"),
            ParameterSpec::required_string("scope", "Search scope"),
        ];
        let vars = build_render_vars(&tool_request(), &params, &project());
        let names: Vec<_> = vars.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["query", "scope"]);
        assert_eq!(vars.params[0].rust_type, "String");
    }

    #[test]
    fn module_name_reaches_the_context() {
        let vars = build_render_vars(&tool_request(), &[], &project());
        assert_eq!(vars.project_name, "weather-server");
        assert_eq!(vars.module_name, "weather_server");
    }
}
