//! Outcome reporting.
//!
//! The same outcome always renders the same report: created paths in write
//! order, then modifications, then diagnostics, then the test summary.

use serde::Serialize;
use std::path::PathBuf;

use mcpgen_core::domain::GenerationOutcome;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

/// Serializable view of an outcome for `--output-format json`.
#[derive(Debug, Serialize)]
struct OutcomeReport<'a> {
    status: &'static str,
    dry_run: bool,
    created: &'a [PathBuf],
    modified: &'a [PathBuf],
    diagnostics: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    tests_passed: Option<bool>,
}

/// Render a generation outcome to the terminal.
pub fn print_outcome(outcome: &GenerationOutcome, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        // JSON bypasses the OutputManager because it must stay parseable
        // even in non-TTY pipes and quiet mode.
        let report = OutcomeReport {
            status: "succeeded",
            dry_run: outcome.dry_run,
            created: &outcome.created,
            modified: &outcome.modified,
            diagnostics: &outcome.diagnostics,
            tests_passed: outcome.test.as_ref().map(|t| t.passed),
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into()));
        return Ok(());
    }

    if outcome.dry_run {
        output.info("Dry run: no files were written")?;
        for path in &outcome.created {
            output.print(&format!("  would create {}", path.display()))?;
        }
        for path in &outcome.modified {
            output.print(&format!("  would update {}", path.display()))?;
        }
        return Ok(());
    }

    for path in &outcome.created {
        output.success(&format!("created {}", path.display()))?;
    }
    for path in &outcome.modified {
        output.success(&format!("updated {}", path.display()))?;
    }
    for diagnostic in &outcome.diagnostics {
        output.warning(diagnostic)?;
    }
    if let Some(test) = &outcome.test {
        if test.passed {
            output.success("generated tests passed")?;
        }
    }
    Ok(())
}
