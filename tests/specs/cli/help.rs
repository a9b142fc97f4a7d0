//! CLI help output specs

use crate::prelude::*;

#[test]
fn tk_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("run")
        .stdout_has("exec")
        .stdout_has("list")
        .stdout_has("check")
        .stdout_lacks("run-job");
}

#[test]
fn tk_exec_help_shows_usage() {
    cli()
        .args(&["exec", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--no-notify");
}

#[test]
fn tk_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn tk_without_command_fails_with_usage() {
    cli().fails().stderr_has("Usage:");
}
