//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mcpgen() -> Command {
    let mut cmd = Command::cargo_bin("mcpgen").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn fixture_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Cargo.toml"),
        "[package]\nname = \"demo-server\"\nversion = \"0.1.0\"\n\n[dependencies]\nrmcp = \"0.8\"\n",
    )
    .unwrap();
    let dir = tmp.path().join(".mcpgen/generators/tool");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("component.rs.tera"),
        "pub fn {{ component_name }}() {}\n",
    )
    .unwrap();
    fs::write(
        dir.join("test.rs.tera"),
        "#[test]\nfn smoke_{{ component_name }}() {}\n",
    )
    .unwrap();
    tmp
}

fn seed_existing(root: &Path, name: &str) {
    fs::create_dir_all(root.join("src/tools")).unwrap();
    fs::write(
        root.join("src/tools").join(format!("{name}.rs")),
        "pub fn old() {}\n",
    )
    .unwrap();
}

#[test]
fn usage_error_exits_2() {
    mcpgen()
        .args(["generate", "tool"]) // missing NAME
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unreadable_config_file_exits_1_with_a_suggestion() {
    let project = fixture_project();
    fs::write(project.path().join("bad.toml"), "[output\nno_color = ").unwrap();

    mcpgen()
        .current_dir(project.path())
        .args([
            "--config",
            "bad.toml",
            "generate",
            "tool",
            "fetch_data",
            "--skip-tests",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn outside_a_project_exits_3_with_a_hint() {
    let tmp = TempDir::new().unwrap();
    mcpgen()
        .current_dir(tmp.path())
        .args(["generate", "tool", "fetch_data", "--skip-tests"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Not inside an MCP server project"))
        .stderr(predicate::str::contains("rmcp"));
}

#[test]
fn invalid_name_exits_4_with_examples() {
    let project = fixture_project();
    mcpgen()
        .current_dir(project.path())
        .args(["generate", "tool", "FetchData", "--skip-tests"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid component name"))
        .stderr(predicate::str::contains("fetch_data"));
}

#[test]
fn keyword_name_exits_4() {
    let project = fixture_project();
    mcpgen()
        .current_dir(project.path())
        .args(["generate", "tool", "match", "--skip-tests"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn existing_component_exits_5_and_keeps_the_original() {
    let project = fixture_project();
    seed_existing(project.path(), "fetch_data");

    mcpgen()
        .current_dir(project.path())
        .args(["generate", "tool", "fetch_data", "--skip-tests"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("already exists"));

    let kept = fs::read_to_string(project.path().join("src/tools/fetch_data.rs")).unwrap();
    assert_eq!(kept, "pub fn old() {}\n");
}

#[test]
fn missing_templates_exit_6_and_name_the_files() {
    let project = fixture_project();
    // No prompt templates were installed in the fixture.
    mcpgen()
        .current_dir(project.path())
        .args(["generate", "prompt", "summarize", "--skip-tests"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("templates missing"))
        .stderr(predicate::str::contains("component.rs.tera"));
}

#[test]
fn malformed_params_file_exits_7() {
    let project = fixture_project();
    fs::write(project.path().join("params.json"), "{ not json").unwrap();

    mcpgen()
        .current_dir(project.path())
        .args([
            "generate",
            "tool",
            "fetch_data",
            "--params",
            "params.json",
            "--skip-tests",
        ])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("parameter"));
}

#[test]
fn rejected_parameter_schema_exits_7_with_the_index() {
    let project = fixture_project();
    fs::write(
        project.path().join("params.json"),
        r#"[{"name": "q", "type": "blob", "description": "bad type"}]"#,
    )
    .unwrap();

    mcpgen()
        .current_dir(project.path())
        .args([
            "generate",
            "tool",
            "fetch_data",
            "--params",
            "params.json",
            "--skip-tests",
        ])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Parameter 0"));
}

#[test]
fn broken_template_is_reported_as_a_generator_defect() {
    let project = fixture_project();
    // A template that renders to unparseable Rust.
    fs::write(
        project
            .path()
            .join(".mcpgen/generators/tool/component.rs.tera"),
        "pub fn {{ component_name }}( {\n",
    )
    .unwrap();

    mcpgen()
        .current_dir(project.path())
        .args(["generate", "tool", "fetch_data", "--skip-tests"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("syntax error"))
        .stderr(predicate::str::contains("not in your input"));

    // Nothing may survive a pre-write failure.
    assert!(!project.path().join("src/tools/fetch_data.rs").exists());
    assert!(!project.path().join("src/registry/tools.toml").exists());
}

#[test]
fn undefined_template_variable_is_a_render_error() {
    let project = fixture_project();
    fs::write(
        project
            .path()
            .join(".mcpgen/generators/tool/component.rs.tera"),
        "pub fn {{ misspelled_name }}() {}\n",
    )
    .unwrap();

    mcpgen()
        .current_dir(project.path())
        .args(["generate", "tool", "fetch_data", "--skip-tests"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("rendering failed"));
}
