//! Generate Service - main application orchestrator.
//!
//! This service drives the whole generation pipeline, fail-fast and in a
//! fixed order:
//! 1. Locate the enclosing project
//! 2. Validate the request against it
//! 3. Load and validate the parameter document
//! 4. Resolve the kind's template pair
//! 5. Render both artifacts
//! 6. Verify the rendered syntax
//! 7. Write the artifacts (or stop here on dry-run)
//! 8. Append the registry record
//! 9. Execute the generated test
//! 10. Assemble the outcome report
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        EngineError,
        ports::{
            ComponentRegistry, Filesystem, ParameterLoader, ProjectLocator, RegistryOutcome,
            SyntaxVerifier, TemplateEngine, TemplateSource, TestHarness,
        },
    },
    domain::{
        ArtifactPaths, ArtifactRole, ComponentKind, ComponentRequest, GenerationOutcome,
        OutcomeStatus, ParameterSpec, ProjectContext, RegistryRecord, RenderedArtifact,
        TestReport, artifact_paths, build_render_vars, test_target_name,
        validate_component_name,
    },
    error::GeneratorResult,
};

/// Default wall-clock budget for the generated test run.
pub const DEFAULT_TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Main generation service.
///
/// Orchestrates locating, validating, rendering, writing, registering, and
/// test execution for one component request.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    locator: Box<dyn ProjectLocator>,
    templates: Box<dyn TemplateSource>,
    engine: Box<dyn TemplateEngine>,
    verifier: Box<dyn SyntaxVerifier>,
    params: Box<dyn ParameterLoader>,
    registry: Box<dyn ComponentRegistry>,
    harness: Box<dyn TestHarness>,
    test_timeout: Duration,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        locator: Box<dyn ProjectLocator>,
        templates: Box<dyn TemplateSource>,
        engine: Box<dyn TemplateEngine>,
        verifier: Box<dyn SyntaxVerifier>,
        params: Box<dyn ParameterLoader>,
        registry: Box<dyn ComponentRegistry>,
        harness: Box<dyn TestHarness>,
    ) -> Self {
        Self {
            filesystem,
            locator,
            templates,
            engine,
            verifier,
            params,
            registry,
            harness,
            test_timeout: DEFAULT_TEST_TIMEOUT,
        }
    }

    /// Override the test-run timeout.
    pub fn with_test_timeout(mut self, timeout: Duration) -> Self {
        self.test_timeout = timeout;
        self
    }

    /// Generate one component.
    ///
    /// This is the main use case. Any error is terminal: no later stage runs
    /// after a failure, and nothing written survives a failed write or
    /// registry update.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind(),
            name = %request.name,
            dry_run = request.flags.dry_run
        )
    )]
    pub fn generate(
        &self,
        start_dir: &Path,
        request: &ComponentRequest,
    ) -> GeneratorResult<GenerationOutcome> {
        info!("Generating {} '{}'", request.kind(), request.name);

        // 1. Locate the enclosing project
        let project = self.locator.locate(start_dir)?;
        info!(root = %project.root.display(), package = %project.package_name, "Project located");

        // 2. Validate the request
        let paths = self.validate(&project, request)?;

        // 3. Load parameters
        let params = self.load_parameters(request)?;
        if !params.is_empty() {
            info!(count = params.len(), "Parameters resolved");
        }

        // 4. Resolve the template pair
        let pair = self.templates.resolve(&project, request.kind())?;
        info!(kind = %request.kind(), "Templates resolved");

        // 5. Render both artifacts
        let vars = build_render_vars(request, &params, &project);
        let artifacts = [
            RenderedArtifact {
                role: ArtifactRole::Source,
                path: paths.source.clone(),
                content: self
                    .engine
                    .render(ArtifactRole::Source, &pair.source, &vars)?,
            },
            RenderedArtifact {
                role: ArtifactRole::Test,
                path: paths.test.clone(),
                content: self.engine.render(ArtifactRole::Test, &pair.test, &vars)?,
            },
        ];

        // 6. Verify syntax before anything touches the filesystem
        for artifact in &artifacts {
            self.verifier.verify(artifact.role, &artifact.content)?;
        }
        info!("Rendered artifacts are syntactically valid");

        // 7. Write (or report and stop on dry-run)
        if request.flags.dry_run {
            info!("Dry run, nothing written");
            return Ok(GenerationOutcome {
                status: OutcomeStatus::Succeeded,
                created: artifacts.iter().map(|a| a.path.clone()).collect(),
                modified: vec![paths.registry.clone()],
                test: None,
                diagnostics: vec!["dry run: no files were written".into()],
                dry_run: true,
            });
        }
        let created = self.write_artifacts(&artifacts)?;

        // 8. Append the registry record
        let mut diagnostics = Vec::new();
        let mut modified = Vec::new();
        let record = RegistryRecord::from_request(request);
        match self.registry.register(&paths.registry, &record) {
            Ok(RegistryOutcome::Appended) => {
                info!(registry = %paths.registry.display(), "Registry updated");
                modified.push(paths.registry.clone());
            }
            Ok(RegistryOutcome::AlreadyRegistered) => {
                warn!(name = %request.name, "Component already registered, registry left untouched");
                diagnostics.push(format!(
                    "'{}' was already registered in {}",
                    request.name,
                    paths.registry.display()
                ));
            }
            Err(e) => {
                warn!("Registry update failed, rolling back written artifacts");
                self.rollback(&created);
                return Err(e);
            }
        }

        // 9. Execute the generated test
        let test = self.run_tests(&project, request, &paths, &created, &mut diagnostics)?;

        // 10. Assemble the outcome
        info!("Generation completed successfully");
        Ok(GenerationOutcome {
            status: OutcomeStatus::Succeeded,
            created,
            modified,
            test,
            diagnostics,
            dry_run: false,
        })
    }

    /// List every registered component across all kinds.
    pub fn list(&self, start_dir: &Path) -> GeneratorResult<Vec<RegistryRecord>> {
        let project = self.locator.locate(start_dir)?;
        let mut records = Vec::new();
        for kind in ComponentKind::ALL {
            let registry_path = project
                .root
                .join("src")
                .join("registry")
                .join(format!("{}.toml", kind.dir_name()));
            records.extend(self.registry.list(&registry_path)?);
        }
        Ok(records)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Validate the name and check the target paths are free.
    fn validate(
        &self,
        project: &ProjectContext,
        request: &ComponentRequest,
    ) -> GeneratorResult<ArtifactPaths> {
        validate_component_name(&request.name)?;

        let paths = artifact_paths(&project.root, request.kind(), &request.name);
        for existing in [&paths.source, &paths.test] {
            if self.filesystem.exists(existing) {
                return Err(EngineError::ComponentExists {
                    name: request.name.clone(),
                    path: existing.clone(),
                }
                .into());
            }
        }
        Ok(paths)
    }

    /// Combine inline parameters with the optional parameter document.
    ///
    /// Inline parameters (e.g. extracted from a resource URI) come first and
    /// win on name collision.
    fn load_parameters(&self, request: &ComponentRequest) -> GeneratorResult<Vec<ParameterSpec>> {
        let mut specs = request.inline_params.clone();
        if let Some(path) = &request.params_path {
            let records = self.params.load(path)?;
            let loaded = crate::domain::validate_parameters(&records)?;
            for spec in loaded {
                if !specs.iter().any(|s| s.name == spec.name) {
                    specs.push(spec);
                }
            }
        }
        Ok(specs)
    }

    /// Write both artifacts, rolling back everything written on failure.
    fn write_artifacts(&self, artifacts: &[RenderedArtifact]) -> GeneratorResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        for artifact in artifacts {
            if let Err(e) = self.write_one(artifact) {
                warn!(path = %artifact.path.display(), "Write failed, attempting rollback");
                self.rollback(&written);
                return Err(e);
            }
            written.push(artifact.path.clone());
        }
        info!(files = written.len(), "Artifacts written");
        Ok(written)
    }

    fn write_one(&self, artifact: &RenderedArtifact) -> GeneratorResult<()> {
        if let Some(parent) = artifact.path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&artifact.path, &artifact.content)
    }

    /// Best-effort rollback of written files.
    fn rollback(&self, written: &[PathBuf]) {
        for path in written {
            if let Err(e) = self.filesystem.remove_file(path) {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
        if !written.is_empty() {
            info!(files = written.len(), "Rollback complete");
        }
    }

    /// Run the generated test target. A failing or timed-out run is an
    /// error, but the written files are deliberately kept for inspection.
    fn run_tests(
        &self,
        project: &ProjectContext,
        request: &ComponentRequest,
        paths: &ArtifactPaths,
        created: &[PathBuf],
        diagnostics: &mut Vec<String>,
    ) -> GeneratorResult<Option<TestReport>> {
        if request.flags.skip_tests {
            info!("Test execution skipped");
            diagnostics.push("test execution skipped (--skip-tests)".into());
            return Ok(None);
        }

        let target = test_target_name(&request.name);
        info!(target = %target, timeout_secs = self.test_timeout.as_secs(), "Running generated tests");
        let report = self.harness.run(&project.root, &target, self.test_timeout)?;
        if !report.passed {
            warn!(
                test = %paths.test.display(),
                files = created.len(),
                "Generated tests failed; written files kept for inspection"
            );
            return Err(EngineError::TestExecution {
                detail: report.output,
            }
            .into());
        }
        info!("Generated tests passed");
        Ok(Some(report))
    }
}
