//! Checks an output directory against the records a run would produce.
//!
//! When several folders claim one filename, only the last folder (in run
//! order) is compared; that is the copy an extraction leaves behind.

use crate::checksum;
use crate::config::ExtractOptions;
use crate::plan;
use anyhow::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// Output record matches its source byte for byte.
    Match,
    /// Output record exists but differs from its source.
    Mismatch,
    /// No output record with the expected name.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCheck {
    pub filename: String,
    /// Folder whose descriptor the record should equal.
    pub folder: String,
    /// Earlier folders that claimed the same filename.
    pub overwritten: Vec<String>,
    pub status: RecordStatus,
}

impl fmt::Display for RecordCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            RecordStatus::Match => write!(f, "OK {}", self.filename),
            RecordStatus::Mismatch => write!(f, "MISMATCH {} (from {})", self.filename, self.folder),
            RecordStatus::Missing => write!(f, "MISSING {} (from {})", self.filename, self.folder),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// One entry per output filename, sorted by filename.
    pub records: Vec<RecordCheck>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.records.iter().all(|r| r.status == RecordStatus::Match)
    }

    pub fn count(&self, status: RecordStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }
}

/// Compares every expected output record against its source descriptor.
/// Reads only; never writes to either directory.
pub fn verify(opts: &ExtractOptions) -> Result<VerifyReport> {
    let plan = plan::build_plan(opts)?;

    let mut records = Vec::new();
    for (filename, claims) in plan.claims() {
        let Some((winner, earlier)) = claims.split_last() else {
            continue;
        };

        let dest = opts.output_dir.join(filename);
        let status = if !dest.is_file() {
            RecordStatus::Missing
        } else if checksum::sha256_path(winner.descriptor)? == checksum::sha256_path(&dest)? {
            RecordStatus::Match
        } else {
            RecordStatus::Mismatch
        };
        tracing::debug!(file = filename, folder = winner.folder, status = ?status, "verified record");

        records.push(RecordCheck {
            filename: filename.to_string(),
            folder: winner.folder.to_string(),
            overwritten: earlier.iter().map(|c| c.folder.to_string()).collect(),
            status,
        });
    }

    Ok(VerifyReport { records })
}
