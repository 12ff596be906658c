//! End-to-end tests of the tfctl binary with an isolated configuration environment.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_tfctl");
    Command::new(bin)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("TFCTL_LOG")
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_binary_prints_rewritten_invocation_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(
        temp_dir.path(),
        &["--format", "json", "acme", "prod", "run-123", "apply"],
    );
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["command"], serde_json::json!(["run", "apply"]));
    assert_eq!(value["flags"]["id"], "run-123");
}

#[test]
fn test_binary_canonical_invocation_passes_through() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(
        temp_dir.path(),
        &["--format", "json", "workspace", "list", "-org=acme"],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["command"], serde_json::json!(["workspace", "list"]));
    assert_eq!(value["flags"]["org"], "acme");
}

#[test]
fn test_binary_organization_context_help() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["acme", "-h"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("tfctl acme teams"));
    assert!(out.contains("team list -org=acme"));
}

#[test]
fn test_binary_unroutable_address_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["acme", "prod", "run-123", "explode"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown command: acme prod run-123 explode"));
}

#[test]
fn test_binary_reads_working_directory_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join(".tfctl")).unwrap();
    std::fs::write(
        temp_dir.path().join(".tfctl").join("config.toml"),
        r#"
[routing]
extra_commands = ["module list"]

[routing.keywords.organization_collections]
modules = "module"
"#,
    )
    .unwrap();

    let output = run_in(temp_dir.path(), &["--format", "json", "acme", "modules"]);
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["command"], serde_json::json!(["module", "list"]));
}

#[test]
fn test_binary_rejects_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "[api]\naddress = \"not-a-url\"\n").unwrap();

    let output = run_in(
        temp_dir.path(),
        &["--config", config_file.to_str().unwrap(), "acme"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("address"));
}
