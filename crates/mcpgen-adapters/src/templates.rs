//! Project-local template resolution.
//!
//! Templates are never bundled with the generator. Each project carries its
//! own pair per kind under `.mcpgen/generators/<kind>/`, so template changes
//! ship with the project, not with the tool.

use tracing::debug;

use mcpgen_core::{
    application::{EngineError, ports::TemplateSource},
    domain::{COMPONENT_TEMPLATE, ComponentKind, GeneratorTemplatePair, ProjectContext, TEST_TEMPLATE},
    error::GeneratorResult,
};

/// Loads the kind's template pair from the project tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectTemplateSource;

impl ProjectTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for ProjectTemplateSource {
    fn resolve(
        &self,
        project: &ProjectContext,
        kind: ComponentKind,
    ) -> GeneratorResult<GeneratorTemplatePair> {
        let dir = project.generators_dir(kind);
        let component = dir.join(COMPONENT_TEMPLATE);
        let test = dir.join(TEST_TEMPLATE);

        let missing: Vec<String> = [&component, &test]
            .iter()
            .filter(|p| !p.is_file())
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::TemplateMissing {
                kind,
                expected: dir,
                missing,
            }
            .into());
        }

        debug!(dir = %dir.display(), "Loading template pair");
        Ok(GeneratorTemplatePair {
            source: read_template(&component)?,
            test: read_template(&test)?,
        })
    }
}

fn read_template(path: &std::path::Path) -> GeneratorResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        EngineError::Filesystem {
            path: path.to_path_buf(),
            reason: format!("Failed to read template: {e}"),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(root: &std::path::Path) -> ProjectContext {
        ProjectContext::new(root, "demo-server", vec![ComponentKind::Tool])
    }

    #[test]
    fn resolves_a_complete_pair() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".mcpgen/generators/tool");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(COMPONENT_TEMPLATE), "src").unwrap();
        fs::write(dir.join(TEST_TEMPLATE), "test").unwrap();

        let pair = ProjectTemplateSource::new()
            .resolve(&project(tmp.path()), ComponentKind::Tool)
            .unwrap();
        assert_eq!(pair.source, "src");
        assert_eq!(pair.test, "test");
    }

    #[test]
    fn reports_exactly_which_files_are_missing() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".mcpgen/generators/tool");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(COMPONENT_TEMPLATE), "src").unwrap();

        let err = ProjectTemplateSource::new()
            .resolve(&project(tmp.path()), ComponentKind::Tool)
            .unwrap_err();
        match err {
            mcpgen_core::error::GeneratorError::Engine(EngineError::TemplateMissing {
                missing,
                ..
            }) => assert_eq!(missing, vec![TEST_TEMPLATE.to_string()]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
