//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mcpgen",
    bin_name = "mcpgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Typed, tested MCP components from project templates",
    long_about = "mcpgen generates typed, tested MCP server components \
                  (tools, resources, prompts, middleware) inside an existing \
                  project, using the project's own generator templates.",
    after_help = "EXAMPLES:\n\
        \x20 mcpgen generate tool search_documents --description \"Full-text search\"\n\
        \x20 mcpgen generate resource user_profile --uri \"resource://users/{id}\"\n\
        \x20 mcpgen list\n\
        \x20 mcpgen completions bash > /usr/share/bash-completion/completions/mcpgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new component in the enclosing project.
    #[command(
        visible_alias = "g",
        about = "Generate a component",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mcpgen generate tool fetch_data --async --description \"Fetch remote data\"\n\
            \x20 mcpgen generate resource app_config --uri \"resource://config\"\n\
            \x20 mcpgen generate prompt summarize --with-schema\n\
            \x20 mcpgen generate middleware rate_limit"
    )]
    Generate(GenerateCommands),

    /// List components registered in the enclosing project.
    #[command(
        visible_alias = "ls",
        about = "List registered components",
        after_help = "EXAMPLES:\n\
            \x20 mcpgen list\n\
            \x20 mcpgen list --kind tool\n\
            \x20 mcpgen list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mcpgen completions bash > ~/.local/share/bash-completion/completions/mcpgen\n\
            \x20 mcpgen completions zsh  > ~/.zfunc/_mcpgen\n\
            \x20 mcpgen completions fish > ~/.config/fish/completions/mcpgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// One subcommand per component kind, so each kind only exposes the flags
/// that apply to it.
#[derive(Debug, Subcommand)]
pub enum GenerateCommands {
    /// Generate an MCP tool handler.
    Tool(ToolArgs),
    /// Generate an MCP resource handler.
    Resource(ResourceArgs),
    /// Generate an MCP prompt handler.
    Prompt(PromptArgs),
    /// Generate a server middleware layer.
    Middleware(MiddlewareArgs),
}

/// Flags shared by every `generate` subcommand.
#[derive(Debug, Args)]
pub struct CommonGenerateArgs {
    /// Component name (snake_case).
    #[arg(value_name = "NAME", help = "Component name (snake_case)")]
    pub name: String,

    /// One-line description used in docs and the registry.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        default_value = "TODO: describe this component",
        help = "Component description"
    )]
    pub description: String,

    /// Generate an async handler.
    #[arg(long = "async", conflicts_with = "sync", help = "Generate an async handler")]
    pub r#async: bool,

    /// Generate a sync handler (the default; explicit form of the pair).
    #[arg(long = "sync", help = "Generate a sync handler (default)")]
    pub sync: bool,

    /// Include a server context parameter in the handler signature.
    #[arg(long = "with-context", help = "Include a server context parameter")]
    pub with_context: bool,

    /// Preview the run without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    /// Skip running the generated test after writing.
    #[arg(long = "skip-tests", help = "Skip executing the generated test")]
    pub skip_tests: bool,
}

/// Arguments for `mcpgen generate tool`.
#[derive(Debug, Args)]
pub struct ToolArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    /// JSON file with parameter definitions.
    #[arg(
        short = 'p',
        long = "params",
        value_name = "PATH",
        help = "JSON parameter definition file"
    )]
    pub params: Option<PathBuf>,

    /// Wrap the handler body in an authorization check.
    #[arg(long = "with-auth", help = "Wrap the handler in an authorization check")]
    pub with_auth: bool,

    /// Annotate the tool as read-only.
    #[arg(long = "read-only", help = "Mark the tool read-only")]
    pub read_only: bool,

    /// Annotate the tool as idempotent.
    #[arg(long = "idempotent", help = "Mark the tool idempotent")]
    pub idempotent: bool,

    /// Annotate the tool as interacting with the open world.
    #[arg(long = "open-world", help = "Mark the tool open-world")]
    pub open_world: bool,

    /// Rust return type for the handler.
    #[arg(
        long = "return-type",
        value_name = "TYPE",
        default_value = "String",
        help = "Handler return type"
    )]
    pub return_type: String,
}

/// Arguments for `mcpgen generate resource`.
#[derive(Debug, Args)]
pub struct ResourceArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    /// Resource URI template.  `{name}` placeholders become required string
    /// parameters of the generated handler.
    #[arg(
        short = 'u',
        long = "uri",
        value_name = "URI",
        help = "Resource URI template, e.g. resource://users/{id}"
    )]
    pub uri: Option<String>,

    /// MIME type served by the resource.
    #[arg(
        long = "mime-type",
        value_name = "MIME",
        default_value = "text/plain",
        help = "Resource MIME type"
    )]
    pub mime_type: String,
}

/// Arguments for `mcpgen generate prompt`.
#[derive(Debug, Args)]
pub struct PromptArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,

    /// JSON file with parameter definitions.
    #[arg(
        short = 'p',
        long = "params",
        value_name = "PATH",
        help = "JSON parameter definition file"
    )]
    pub params: Option<PathBuf>,

    /// Generate a typed argument schema alongside the prompt.
    #[arg(long = "with-schema", help = "Generate a typed argument schema")]
    pub with_schema: bool,
}

/// Arguments for `mcpgen generate middleware`.
#[derive(Debug, Args)]
pub struct MiddlewareArgs {
    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `mcpgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by component kind.
    #[arg(short = 'k', long = "kind", value_enum, help = "Filter by kind")]
    pub kind: Option<KindFilter>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Component kinds accepted by `--kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindFilter {
    Tool,
    Resource,
    Prompt,
    Middleware,
}

impl KindFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Resource => "resource",
            Self::Prompt => "prompt",
            Self::Middleware => "middleware",
        }
    }
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mcpgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
