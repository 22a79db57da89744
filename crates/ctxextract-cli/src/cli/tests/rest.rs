//! Tests for verify, config, completions.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;
use std::path::Path;

#[test]
fn cli_parse_verify() {
    match parse(&["ctxextract", "verify", "--output", "/tmp/out"]) {
        Some(CliCommand::Verify { dirs }) => {
            assert!(dirs.source.is_none());
            assert_eq!(dirs.output.as_deref(), Some(Path::new("/tmp/out")));
        }
        other => panic!("expected Verify, got {other:?}"),
    }
}

#[test]
fn cli_verify_has_no_dry_run() {
    assert!(Cli::try_parse_from(["ctxextract", "verify", "--dry-run"]).is_err());
}

#[test]
fn cli_parse_config() {
    match parse(&["ctxextract", "config"]) {
        Some(CliCommand::Config) => {}
        other => panic!("expected Config, got {other:?}"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["ctxextract", "completions", "bash"]) {
        Some(CliCommand::Completions { shell }) => assert_eq!(shell, Shell::Bash),
        other => panic!("expected Completions, got {other:?}"),
    }
}

#[test]
fn cli_completions_requires_known_shell() {
    assert!(Cli::try_parse_from(["ctxextract", "completions", "cmd.exe"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
