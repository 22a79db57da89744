//! `ctxextract verify` – compare output records with their sources.

use anyhow::{bail, Result};
use ctxextract_core::config::ExtractOptions;
use ctxextract_core::verify::{self, RecordStatus};

/// Prints one line per expected record. Fails if any record is not an exact copy.
pub fn run_verify(opts: &ExtractOptions) -> Result<()> {
    let report = verify::verify(opts)?;
    for record in &report.records {
        println!("{record}");
        if !record.overwritten.is_empty() {
            println!("  overwrites: {}", record.overwritten.join(", "));
        }
    }

    println!();
    println!(
        "Verified {} records in '{}': {} ok, {} mismatched, {} missing",
        report.records.len(),
        opts.output_dir.display(),
        report.count(RecordStatus::Match),
        report.count(RecordStatus::Mismatch),
        report.count(RecordStatus::Missing),
    );

    if !report.is_clean() {
        bail!("output directory does not match source descriptors");
    }
    Ok(())
}
