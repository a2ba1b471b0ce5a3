//! Implementation of the `mcpgen generate` subcommands.
//!
//! Responsibility: translate CLI arguments into a `ComponentRequest`, call
//! the core generation service with the production adapters, and display
//! results. No business logic lives here.

use std::time::Duration;

use tracing::{debug, info, instrument};

use mcpgen_adapters::{
    CargoProjectLocator, CargoTestHarness, JsonParameterLoader, LocalFilesystem,
    ProjectTemplateSource, SynVerifier, TeraEngine, TomlRegistry,
};
use mcpgen_core::{
    application::GenerateService,
    domain::{
        ComponentRequest, GenerationFlags, KindOptions, ParameterSpec, extract_uri_params,
    },
};

use crate::{
    cli::{
        CommonGenerateArgs, GenerateCommands, MiddlewareArgs, OutputFormat, PromptArgs,
        ResourceArgs, ToolArgs, global::GlobalArgs,
    },
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    report,
};

/// Execute one of the `mcpgen generate` subcommands.
///
/// Dispatch sequence:
/// 1. Convert CLI args into a `ComponentRequest`
/// 2. Build the service from the production adapters
/// 3. Run the pipeline from the current directory
/// 4. Render the outcome
#[instrument(skip_all)]
pub fn execute(
    command: GenerateCommands,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(command);
    debug!(
        kind = %request.kind(),
        name = %request.name,
        dry_run = request.flags.dry_run,
        "Request built"
    );

    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(CargoProjectLocator::new()),
        Box::new(ProjectTemplateSource::new()),
        Box::new(TeraEngine::new()),
        Box::new(SynVerifier::new()),
        Box::new(JsonParameterLoader::new()),
        Box::new(TomlRegistry::new()),
        Box::new(CargoTestHarness::new()),
    )
    .with_test_timeout(Duration::from_secs(config.tests.timeout_secs));

    let start_dir = std::env::current_dir()?;
    info!(kind = %request.kind(), name = %request.name, "Generation started");
    let outcome = service.generate(&start_dir, &request)?;
    info!(name = %request.name, "Generation finished");

    report::print_outcome(&outcome, &output)?;
    // In JSON mode the report is the entire stdout document; a trailing
    // human line would corrupt it.
    if !outcome.dry_run && output.format() != OutputFormat::Json {
        output.success(&format!("{} '{}' generated!", request.kind(), request.name))?;
    }
    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

fn build_request(command: GenerateCommands) -> ComponentRequest {
    match command {
        GenerateCommands::Tool(args) => build_tool_request(args),
        GenerateCommands::Resource(args) => build_resource_request(args),
        GenerateCommands::Prompt(args) => build_prompt_request(args),
        GenerateCommands::Middleware(args) => build_middleware_request(args),
    }
}

fn flags_from(common: &CommonGenerateArgs, with_auth: bool) -> GenerationFlags {
    GenerationFlags {
        is_async: common.r#async,
        with_context: common.with_context,
        with_auth,
        dry_run: common.dry_run,
        skip_tests: common.skip_tests,
    }
}

fn build_tool_request(args: ToolArgs) -> ComponentRequest {
    let flags = flags_from(&args.common, args.with_auth);
    let mut request = ComponentRequest::new(
        args.common.name,
        args.common.description,
        flags,
        KindOptions::Tool {
            read_only: args.read_only,
            idempotent: args.idempotent,
            open_world: args.open_world,
            return_type: args.return_type,
        },
    );
    if let Some(path) = args.params {
        request = request.with_params_path(path);
    }
    request
}

fn build_resource_request(args: ResourceArgs) -> ComponentRequest {
    let flags = flags_from(&args.common, false);
    let uri = args
        .uri
        .unwrap_or_else(|| format!("resource://{}", args.common.name));

    // URI template placeholders become required string parameters of the
    // generated handler.
    let inline_params: Vec<ParameterSpec> = extract_uri_params(&uri)
        .into_iter()
        .map(|name| {
            let description = format!("URI parameter '{name}'");
            ParameterSpec::required_string(name, description)
        })
        .collect();

    ComponentRequest::new(
        args.common.name,
        args.common.description,
        flags,
        KindOptions::Resource {
            uri,
            mime_type: args.mime_type,
        },
    )
    .with_inline_params(inline_params)
}

fn build_prompt_request(args: PromptArgs) -> ComponentRequest {
    let flags = flags_from(&args.common, false);
    let mut request = ComponentRequest::new(
        args.common.name,
        args.common.description,
        flags,
        KindOptions::Prompt {
            with_schema: args.with_schema,
        },
    );
    if let Some(path) = args.params {
        request = request.with_params_path(path);
    }
    request
}

fn build_middleware_request(args: MiddlewareArgs) -> ComponentRequest {
    let flags = flags_from(&args.common, false);
    ComponentRequest::new(
        args.common.name,
        args.common.description,
        flags,
        KindOptions::Middleware,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mcpgen_core::domain::ComponentKind;

    use crate::cli::{Cli, Commands};

    fn parse_generate(argv: &[&str]) -> GenerateCommands {
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::Generate(command) => command,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn tool_args_become_a_tool_request() {
        let command = parse_generate(&[
            "mcpgen",
            "generate",
            "tool",
            "fetch_data",
            "--async",
            "--with-auth",
            "--return-type",
            "Vec<String>",
        ]);
        let request = build_request(command);
        assert_eq!(request.kind(), ComponentKind::Tool);
        assert!(request.flags.is_async);
        assert!(request.flags.with_auth);
        match request.options {
            KindOptions::Tool { return_type, .. } => assert_eq!(return_type, "Vec<String>"),
            other => panic!("expected tool options, got {other:?}"),
        }
    }

    #[test]
    fn resource_uri_params_become_inline_params() {
        let command = parse_generate(&[
            "mcpgen",
            "generate",
            "resource",
            "user_posts",
            "--uri",
            "resource://users/{user_id}/posts/{post_id}",
        ]);
        let request = build_request(command);
        let names: Vec<_> = request.inline_params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["user_id", "post_id"]);
        assert!(request.inline_params.iter().all(|p| p.required));
    }

    #[test]
    fn resource_without_uri_defaults_to_its_name() {
        let command = parse_generate(&["mcpgen", "generate", "resource", "app_config"]);
        let request = build_request(command);
        match &request.options {
            KindOptions::Resource { uri, .. } => assert_eq!(uri, "resource://app_config"),
            other => panic!("expected resource options, got {other:?}"),
        }
        assert!(request.inline_params.is_empty());
    }

    #[test]
    fn middleware_request_carries_no_params_path() {
        let command =
            parse_generate(&["mcpgen", "generate", "middleware", "rate_limit", "--dry-run"]);
        let request = build_request(command);
        assert_eq!(request.kind(), ComponentKind::Middleware);
        assert!(request.flags.dry_run);
        assert!(request.params_path.is_none());
    }
}
