//! Subprocess test execution for generated components.
//!
//! The generated test target is run through `cargo test` in the target
//! project, with a wall-clock timeout. The child is polled rather than
//! waited on so a hung test run cannot hang the generator; on timeout the
//! child is killed and the run reported as failed.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use mcpgen_core::{
    application::{EngineError, ports::TestHarness},
    domain::TestReport,
    error::GeneratorResult,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs generated tests with `cargo test --test <target>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoTestHarness;

impl CargoTestHarness {
    pub fn new() -> Self {
        Self
    }
}

impl TestHarness for CargoTestHarness {
    fn run(
        &self,
        project_root: &Path,
        test_target: &str,
        timeout: Duration,
    ) -> GeneratorResult<TestReport> {
        debug!(target = %test_target, root = %project_root.display(), "Spawning cargo test");
        let mut child = Command::new("cargo")
            .args(["test", "--test", test_target])
            .current_dir(project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::TestExecution {
                detail: format!("failed to launch cargo test: {e}"),
            })?;

        // Drain the pipes on reader threads so a chatty child can't block
        // on a full pipe while we poll.
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let out_handle = thread::spawn(move || read_all(stdout));
        let err_handle = thread::spawn(move || read_all(stderr));

        let deadline = Instant::now() + timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break Some(status),
                Ok(None) => {
                    if Instant::now() >= deadline {
                        warn!(target = %test_target, "Test run exceeded timeout, killing");
                        let _ = child.kill();
                        let _ = child.wait();
                        break None;
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    let _ = child.kill();
                    return Err(EngineError::TestExecution {
                        detail: format!("failed to poll cargo test: {e}"),
                    }
                    .into());
                }
            }
        };

        let mut output = out_handle.join().unwrap_or_default();
        let err_output = err_handle.join().unwrap_or_default();
        if !err_output.is_empty() {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&err_output);
        }

        match status {
            Some(status) => Ok(TestReport {
                passed: status.success(),
                output,
            }),
            None => Ok(TestReport {
                passed: false,
                output: format!(
                    "test run timed out after {}s\n{output}",
                    timeout.as_secs()
                ),
            }),
        }
    }
}

fn read_all(pipe: Option<impl Read>) -> String {
    let mut buf = String::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_string(&mut buf);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Running a real `cargo test` inside a test is slow, so these exercise
    // the launch/timeout plumbing with the harness pointed at an empty
    // directory where the run fails fast.
    #[test]
    fn failed_launch_surfaces_in_the_report() {
        let tmp = TempDir::new().unwrap();
        let report = CargoTestHarness::new()
            .run(tmp.path(), "test_missing", Duration::from_secs(60))
            .unwrap();
        // No manifest in the directory: cargo exits non-zero.
        assert!(!report.passed);
        assert!(!report.output.is_empty());
    }
}
