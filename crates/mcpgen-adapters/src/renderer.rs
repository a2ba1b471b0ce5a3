//! Tera-backed template rendering.
//!
//! Rendering is strict: Tera fails on undefined variables, so a template
//! referencing a variable the context does not carry surfaces as a render
//! error instead of silently producing broken code.

use tera::Tera;
use tracing::debug;

use mcpgen_core::{
    application::{EngineError, ports::TemplateEngine},
    domain::{ArtifactRole, RenderVars},
    error::GeneratorResult,
};

/// Template engine adapter over [`tera`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraEngine;

impl TeraEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for TeraEngine {
    fn render(
        &self,
        role: ArtifactRole,
        template: &str,
        vars: &RenderVars,
    ) -> GeneratorResult<String> {
        let context = tera::Context::from_serialize(vars).map_err(|e| EngineError::Render {
            role,
            detail: format!("context serialization failed: {e}"),
        })?;

        let mut tera = Tera::default();
        // Generated Rust must come out verbatim, not HTML-escaped.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(role.as_str(), template)
            .map_err(|e| render_error(role, e))?;

        debug!(role = %role, "Rendering template");
        tera.render(role.as_str(), &context)
            .map_err(|e| render_error(role, e))
    }
}

fn render_error(role: ArtifactRole, e: tera::Error) -> mcpgen_core::error::GeneratorError {
    // Tera nests the useful message in the error source chain.
    let mut detail = e.to_string();
    let mut source = std::error::Error::source(&e);
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    EngineError::Render { role, detail }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpgen_core::domain::{
        ComponentRequest, GenerationFlags, KindOptions, ProjectContext, build_render_vars,
    };

    fn vars() -> RenderVars {
        let request = ComponentRequest::new(
            "fetch_data",
            "Fetch data",
            GenerationFlags {
                is_async: true,
                ..Default::default()
            },
            KindOptions::Tool {
                read_only: true,
                idempotent: false,
                open_world: true,
                return_type: "String".into(),
            },
        );
        let project = ProjectContext::new("/p", "demo-server", vec![]);
        build_render_vars(&request, &[], &project)
    }

    #[test]
    fn renders_request_fields_and_conditionals() {
        let out = TeraEngine::new()
            .render(
                ArtifactRole::Source,
                "{% if async %}async {% endif %}fn {{ component_name }}() {}",
                &vars(),
            )
            .unwrap();
        assert_eq!(out, "async fn fetch_data() {}");
    }

    #[test]
    fn undefined_variable_is_a_render_error() {
        let err = TeraEngine::new()
            .render(ArtifactRole::Source, "{{ no_such_variable }}", &vars())
            .unwrap_err();
        assert!(matches!(
            err,
            mcpgen_core::error::GeneratorError::Engine(EngineError::Render { .. })
        ));
    }

    #[test]
    fn generics_survive_without_escaping() {
        let out = TeraEngine::new()
            .render(ArtifactRole::Source, "fn f() -> Vec<String> {}", &vars())
            .unwrap();
        assert_eq!(out, "fn f() -> Vec<String> {}");
    }
}
