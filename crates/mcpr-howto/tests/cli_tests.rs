//! CLI integration tests.
//!
//! These tests exercise the non-interactive commands end-to-end.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the binary with an isolated home so no user config is picked up.
fn run(args: &[&str]) -> (Output, TempDir) {
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_mcpr-howto"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("XDG_STATE_HOME", home.path().join(".local/state"))
        .env_remove("MCPR_HOWTO_CONFIG_CONTENT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");
    (output, home)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_version_command() {
    let (output, _home) = run(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("mcpr-howto"));
}

#[test]
fn test_help_command() {
    let (output, _home) = run(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Instructions for connecting the MCP Router CLI"));
    assert!(text.contains("--token"));
    assert!(text.contains("--locale"));
    assert!(text.contains("--dialog"));
}

#[test]
fn test_print_cli_with_token() {
    let (output, _home) = run(&["--token", "abc123", "print", "--section", "cli"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.lines().any(|l| l == "export MCPR_TOKEN=\"abc123\""));
    assert!(text.ends_with("npx -y @mcp_router/cli@latest connect\n"));
}

#[test]
fn test_print_cli_without_token() {
    let (output, _home) = run(&["print", "--section", "cli"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "npx -y @mcp_router/cli@latest connect\n");
}

#[test]
fn test_print_config_without_token() {
    let (output, _home) = run(&["print", "--section", "config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("\"MCPR_TOKEN\": \"undefined\""));
}

#[test]
fn test_print_all_in_japanese() {
    let (output, _home) = run(&["--locale", "ja", "print"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("CLIでの使用"));
    assert!(text.contains("設定ファイルでの使用"));
}

#[test]
fn test_token_from_config_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = dir.path().join("howto.jsonc");
    std::fs::write(
        &config,
        r#"{
            // token issued by the router
            "token": "from-config"
        }"#,
    )
    .expect("Failed to write config");

    let config_arg = config.to_string_lossy().to_string();
    let (output, _home) = run(&["--config", &config_arg, "print", "--section", "config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("\"MCPR_TOKEN\": \"from-config\""));
}

#[test]
fn test_invalid_locale() {
    let (output, _home) = run(&["--locale", "xx", "print"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown locale"));
}

#[test]
fn test_missing_config_file() {
    let (output, _home) = run(&["--config", "/nonexistent/mcpr-howto.json", "print"]);
    assert!(!output.status.success());
}
