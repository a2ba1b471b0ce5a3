//! Implementation of the `mcpgen list` command.

use mcpgen_adapters::{CargoProjectLocator, TomlRegistry};
use mcpgen_core::{
    application::ports::{ComponentRegistry, ProjectLocator},
    domain::{ComponentKind, RegistryRecord},
};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let start_dir = std::env::current_dir()?;
    let project = CargoProjectLocator::new().locate(&start_dir)?;

    let registry = TomlRegistry::new();
    let mut records: Vec<RegistryRecord> = Vec::new();
    for kind in ComponentKind::ALL {
        if let Some(filter) = args.kind {
            if filter.as_str() != kind.as_str() {
                continue;
            }
        }
        let path = project
            .root
            .join("src")
            .join("registry")
            .join(format!("{}.toml", kind.dir_name()));
        records.extend(registry.list(&path)?);
    }

    match args.format {
        ListFormat::Table => {
            if records.is_empty() {
                output.info("No components registered yet")?;
                return Ok(());
            }
            output.header(&format!("Components in '{}':", project.package_name))?;
            for record in &records {
                let mut traits = Vec::new();
                if record.is_async {
                    traits.push("async");
                }
                if record.with_context {
                    traits.push("context");
                }
                if record.with_auth {
                    traits.push("auth");
                }
                let suffix = if traits.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", traits.join(", "))
                };
                output.print(&format!(
                    "  {:<12} {}{} - {}",
                    record.kind, record.name, suffix, record.description
                ))?;
            }
        }
        ListFormat::List => {
            for record in &records {
                println!("{}", record.name);
            }
        }
        ListFormat::Json => {
            // Serialise to stdout (bypasses OutputManager because JSON
            // output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
