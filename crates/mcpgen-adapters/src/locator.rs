//! Project discovery by manifest probing.
//!
//! A directory is a generator-capable project root when it holds a
//! `Cargo.toml` whose package declares the `rmcp` dependency. The search
//! walks upward from the starting directory, so the generator can be invoked
//! from anywhere inside the project tree.

use std::path::Path;

use tracing::debug;

use mcpgen_core::{
    application::{EngineError, ports::ProjectLocator},
    domain::{COMPONENT_TEMPLATE, ComponentKind, ProjectContext, TEST_TEMPLATE},
    error::GeneratorResult,
};

const MCP_RUNTIME_DEP: &str = "rmcp";

/// Locates the enclosing MCP server project via its Cargo manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoProjectLocator;

impl CargoProjectLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectLocator for CargoProjectLocator {
    fn locate(&self, start: &Path) -> GeneratorResult<ProjectContext> {
        for dir in start.ancestors() {
            let manifest = dir.join("Cargo.toml");
            if !manifest.is_file() {
                continue;
            }
            let Some(package_name) = probe_manifest(&manifest) else {
                // A manifest without the MCP runtime is some other project;
                // the real root may still be further up.
                debug!(manifest = %manifest.display(), "Manifest without {MCP_RUNTIME_DEP}, continuing upward");
                continue;
            };
            let available_kinds = scan_generator_kinds(dir);
            debug!(
                root = %dir.display(),
                package = %package_name,
                kinds = available_kinds.len(),
                "Project located"
            );
            return Ok(ProjectContext::new(dir, package_name, available_kinds));
        }
        Err(EngineError::NotAProject {
            start: start.to_path_buf(),
        }
        .into())
    }
}

/// Parse a manifest; return the package name if it declares the MCP runtime.
fn probe_manifest(manifest: &Path) -> Option<String> {
    let text = std::fs::read_to_string(manifest).ok()?;
    let doc: toml::Table = text.parse().ok()?;

    let declares_runtime = doc
        .get("dependencies")
        .and_then(|d| d.get(MCP_RUNTIME_DEP))
        .is_some()
        || doc
            .get("workspace")
            .and_then(|w| w.get("dependencies"))
            .and_then(|d| d.get(MCP_RUNTIME_DEP))
            .is_some();
    if !declares_runtime {
        return None;
    }

    doc.get("package")
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str())
        .map(str::to_string)
}

/// Kinds for which the project carries a complete template pair.
fn scan_generator_kinds(root: &Path) -> Vec<ComponentKind> {
    ComponentKind::ALL
        .into_iter()
        .filter(|kind| {
            let dir = root.join(".mcpgen").join("generators").join(kind.as_str());
            dir.join(COMPONENT_TEMPLATE).is_file() && dir.join(TEST_TEMPLATE).is_file()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, name: &str, with_rmcp: bool) {
        let deps = if with_rmcp { "rmcp = \"0.8\"" } else { "" };
        fs::write(
            dir.join("Cargo.toml"),
            format!("[package]\nname = \"{name}\"\nversion = \"0.1.0\"\n\n[dependencies]\n{deps}\n"),
        )
        .unwrap();
    }

    fn write_templates(root: &Path, kind: ComponentKind) {
        let dir = root.join(".mcpgen").join("generators").join(kind.as_str());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(COMPONENT_TEMPLATE), "pub fn x() {}").unwrap();
        fs::write(dir.join(TEST_TEMPLATE), "#[test] fn t() {}").unwrap();
    }

    #[test]
    fn locates_root_from_a_nested_directory() {
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), "weather-server", true);
        write_templates(tmp.path(), ComponentKind::Tool);
        let nested = tmp.path().join("src").join("tools");
        fs::create_dir_all(&nested).unwrap();

        let ctx = CargoProjectLocator::new().locate(&nested).unwrap();
        assert_eq!(ctx.package_name, "weather-server");
        assert_eq!(ctx.module_name, "weather_server");
        assert_eq!(ctx.root, tmp.path());
        assert!(ctx.has_templates_for(ComponentKind::Tool));
        assert!(!ctx.has_templates_for(ComponentKind::Prompt));
    }

    #[test]
    fn manifest_without_the_runtime_is_not_a_project() {
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), "plain-crate", false);

        let err = CargoProjectLocator::new().locate(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            mcpgen_core::error::GeneratorError::Engine(EngineError::NotAProject { .. })
        ));
    }

    #[test]
    fn workspace_level_runtime_dependency_counts() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("Cargo.toml"),
            "[package]\nname = \"ws-server\"\nversion = \"0.1.0\"\n\n[workspace.dependencies]\nrmcp = \"0.8\"\n",
        )
        .unwrap();

        let ctx = CargoProjectLocator::new().locate(tmp.path()).unwrap();
        assert_eq!(ctx.package_name, "ws-server");
        assert!(ctx.available_kinds.is_empty());
    }

    #[test]
    fn multi_section_manifest_parses_as_a_document() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("Cargo.toml"),
            concat!(
                "[package]\n",
                "name = \"full-server\"\n",
                "version = \"0.1.0\"\n",
                "edition = \"2024\"\n\n",
                "[dependencies]\n",
                "rmcp = { version = \"0.8\", features = [\"server\"] }\n",
                "tokio = { version = \"1\", features = [\"full\"] }\n\n",
                "[dev-dependencies]\n",
                "tempfile = \"3\"\n\n",
                "[profile.release]\n",
                "lto = true\n",
            ),
        )
        .unwrap();

        let ctx = CargoProjectLocator::new().locate(tmp.path()).unwrap();
        assert_eq!(ctx.package_name, "full-server");
    }

    #[test]
    fn incomplete_template_pair_does_not_count() {
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), "s", true);
        let dir = tmp.path().join(".mcpgen/generators/tool");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(COMPONENT_TEMPLATE), "x").unwrap();
        // test template missing

        let ctx = CargoProjectLocator::new().locate(tmp.path()).unwrap();
        assert!(!ctx.has_templates_for(ComponentKind::Tool));
    }
}
