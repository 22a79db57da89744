//! CLI for ctxextract.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ctxextract_core::config::{self, ExtractConfig, ExtractOptions};
use std::path::PathBuf;

use commands::{run_completions, run_config, run_extract, run_verify};

/// Top-level CLI. With no subcommand, runs `extract` with the configured directories.
#[derive(Debug, Parser)]
#[command(name = "ctxextract", version)]
#[command(
    about = "Copy context_info.json descriptors into one directory, named by their context",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Copy every descriptor into the output directory (default command).
    Extract {
        #[command(flatten)]
        dirs: DirArgs,

        /// Print what would be copied without writing anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that the output directory matches the source descriptors.
    Verify {
        #[command(flatten)]
        dirs: DirArgs,
    },

    /// Show the config file location and effective settings.
    Config,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Directory overrides shared by `extract` and `verify`.
#[derive(Debug, Default, Clone, Args)]
pub struct DirArgs {
    /// Source root holding one subfolder per clip (overrides config).
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output directory for renamed descriptors (overrides config).
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Extract {
            dirs: DirArgs::default(),
            dry_run: false,
        });

        match command {
            CliCommand::Extract { dirs, dry_run } => run_extract(&dirs.resolve()?, dry_run)?,
            CliCommand::Verify { dirs } => run_verify(&dirs.resolve()?)?,
            CliCommand::Config => run_config(&load_config()?)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

impl DirArgs {
    /// Merges the overrides with the config file, relative to the working directory.
    fn resolve(&self) -> Result<ExtractOptions> {
        let cfg = load_config()?;
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        Ok(cfg.to_options(&cwd, self.source.as_deref(), self.output.as_deref()))
    }
}

fn load_config() -> Result<ExtractConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
