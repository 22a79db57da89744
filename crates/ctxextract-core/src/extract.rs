//! The extraction run: scan, read, copy, report.
//!
//! Console lines go to the caller's writer; the same events are logged
//! through `tracing`. Folders are handled one at a time, so a fatal error
//! leaves every record written before it in place.

use crate::config::ExtractOptions;
use crate::plan::{self, Outcome, Plan, SkipReason, Warning};
use crate::scan;
use crate::storage;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

/// One output record written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedRecord {
    pub folder: String,
    pub filename: String,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    pub output_dir: PathBuf,
    pub copied: Vec<CopiedRecord>,
    pub skipped: Vec<(String, SkipReason)>,
}

impl ExtractReport {
    /// Number of successful copies, collisions included.
    pub fn count(&self) -> usize {
        self.copied.len()
    }
}

/// Copies every usable descriptor under `opts.source_dir` into
/// `opts.output_dir`, named after its context field.
///
/// The output directory is created if needed and never cleared; existing
/// records with the same name are overwritten.
pub fn run<W: Write>(opts: &ExtractOptions, out: &mut W) -> Result<ExtractReport> {
    storage::ensure_output_dir(&opts.output_dir)?;
    tracing::info!(
        source = %opts.source_dir.display(),
        output = %opts.output_dir.display(),
        "extraction started"
    );

    let mut report = ExtractReport {
        output_dir: opts.output_dir.clone(),
        copied: Vec::new(),
        skipped: Vec::new(),
    };

    for folder in scan::source_folders(&opts.source_dir)? {
        let outcome = plan::plan_folder(&folder, opts)?;
        match outcome {
            Outcome::Copy {
                descriptor,
                filename,
            } => {
                let dest = opts.output_dir.join(&filename);
                let bytes = storage::copy_record(&descriptor, &dest)?;
                writeln!(out, "Copied: {} -> {}", folder.name, filename)?;
                tracing::info!(folder = %folder.name, file = %filename, bytes, "copied");
                report.copied.push(CopiedRecord {
                    folder: folder.name,
                    filename,
                });
            }
            Outcome::Skip(reason) => {
                let warning = Warning::new(&folder.name, &reason).to_string();
                writeln!(out, "{warning}")?;
                tracing::warn!(folder = %folder.name, "{warning}");
                report.skipped.push((folder.name, reason));
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Done! Extracted {} JSON files to '{}'",
        report.count(),
        opts.output_dir.display()
    )?;
    tracing::info!(
        count = report.count(),
        skipped = report.skipped.len(),
        "extraction finished"
    );
    Ok(report)
}

/// Prints what [`run`] would do without creating or writing anything.
pub fn dry_run<W: Write>(opts: &ExtractOptions, out: &mut W) -> Result<Plan> {
    let plan = plan::build_plan(opts)?;
    for item in &plan.items {
        match &item.outcome {
            Outcome::Copy { filename, .. } => {
                writeln!(out, "Would copy: {} -> {}", item.folder.name, filename)?;
            }
            Outcome::Skip(_) => {
                if let Some(warning) = item.warning() {
                    writeln!(out, "{warning}")?;
                }
            }
        }
    }
    for (filename, claims) in plan.collisions() {
        let folders: Vec<&str> = claims.iter().map(|c| c.folder).collect();
        tracing::debug!(file = filename, folders = ?folders, "output name claimed more than once");
    }

    writeln!(out)?;
    writeln!(
        out,
        "Dry run: {} JSON files would be extracted to '{}' ({} folders skipped)",
        plan.copy_count(),
        opts.output_dir.display(),
        plan.skip_count()
    )?;
    Ok(plan)
}
