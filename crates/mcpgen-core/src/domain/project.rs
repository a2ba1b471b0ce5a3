//! Project metadata discovered by the locator.

use std::path::PathBuf;

use super::request::ComponentKind;

/// Metadata about the enclosing generator-capable project.
///
/// Discovered once per invocation by walking up from the working directory;
/// lives only for that invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectContext {
    /// Absolute path of the project root (the directory holding Cargo.toml).
    pub root: PathBuf,
    /// Package name as declared in the manifest.
    pub package_name: String,
    /// Module identifier derived from the package name (`-` becomes `_`).
    pub module_name: String,
    /// Kinds for which generator templates are present in the project.
    pub available_kinds: Vec<ComponentKind>,
}

impl ProjectContext {
    pub fn new(
        root: impl Into<PathBuf>,
        package_name: impl Into<String>,
        available_kinds: Vec<ComponentKind>,
    ) -> Self {
        let package_name = package_name.into();
        let module_name = module_ident(&package_name);
        Self {
            root: root.into(),
            package_name,
            module_name,
            available_kinds,
        }
    }

    pub fn has_templates_for(&self, kind: ComponentKind) -> bool {
        self.available_kinds.contains(&kind)
    }

    /// Project-local directory holding the generator templates for a kind.
    pub fn generators_dir(&self, kind: ComponentKind) -> PathBuf {
        self.root.join(".mcpgen").join("generators").join(kind.as_str())
    }
}

/// Derive a Rust module identifier from a package name.
pub fn module_ident(package: &str) -> String {
    package.replace('-', "_")
}
