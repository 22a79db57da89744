//! Tests for the default invocation and the extract subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_no_args_is_default_extract() {
    assert!(parse(&["ctxextract"]).is_none());
}

#[test]
fn cli_parse_extract() {
    match parse(&["ctxextract", "extract"]) {
        Some(CliCommand::Extract { dirs, dry_run }) => {
            assert!(dirs.source.is_none());
            assert!(dirs.output.is_none());
            assert!(!dry_run);
        }
        other => panic!("expected Extract, got {other:?}"),
    }
}

#[test]
fn cli_parse_extract_dirs_and_dry_run() {
    match parse(&[
        "ctxextract",
        "extract",
        "--source",
        "/data/clips",
        "--output",
        "out",
        "--dry-run",
    ]) {
        Some(CliCommand::Extract { dirs, dry_run }) => {
            assert_eq!(dirs.source.as_deref(), Some(Path::new("/data/clips")));
            assert_eq!(dirs.output.as_deref(), Some(Path::new("out")));
            assert!(dry_run);
        }
        other => panic!("expected Extract with overrides, got {other:?}"),
    }
}

#[test]
fn cli_rejects_positional_directories() {
    assert!(Cli::try_parse_from(["ctxextract", "extract", "/data/clips"]).is_err());
}
