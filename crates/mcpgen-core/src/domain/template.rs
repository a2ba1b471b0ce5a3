//! The per-kind template pair.

/// File name of the source-file template inside a kind's generator directory.
pub const COMPONENT_TEMPLATE: &str = "component.rs.tera";

/// File name of the test-file template inside a kind's generator directory.
pub const TEST_TEMPLATE: &str = "test.rs.tera";

/// The two templates associated with one component kind, loaded from the
/// project's generator directory. Resolved and read once per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorTemplatePair {
    /// Template text for the source artifact.
    pub source: String,
    /// Template text for the test artifact.
    pub test: String,
}
