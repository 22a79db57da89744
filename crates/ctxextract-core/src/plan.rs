//! Per-folder outcomes, computed before anything is written.

use crate::config::ExtractOptions;
use crate::descriptor;
use crate::error::Result;
use crate::naming;
use crate::scan::{self, SourceFolder};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a folder produces no output record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The folder has no descriptor file.
    MissingDescriptor { descriptor_name: String },
    /// The descriptor has no (or an empty) context field.
    MissingContext {
        descriptor_name: String,
        field: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copy {
        descriptor: PathBuf,
        filename: String,
    },
    Skip(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanItem {
    pub folder: SourceFolder,
    pub outcome: Outcome,
}

impl PlanItem {
    /// Console line for a skipped folder, `None` for copies.
    pub fn warning(&self) -> Option<Warning<'_>> {
        match &self.outcome {
            Outcome::Skip(reason) => Some(Warning::new(&self.folder.name, reason)),
            Outcome::Copy { .. } => None,
        }
    }
}

/// Displays as the user-facing warning line for a skipped folder.
pub struct Warning<'a> {
    folder: &'a str,
    reason: &'a SkipReason,
}

impl<'a> Warning<'a> {
    pub fn new(folder: &'a str, reason: &'a SkipReason) -> Self {
        Self { folder, reason }
    }
}

impl fmt::Display for Warning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::MissingDescriptor { descriptor_name } => {
                write!(f, "Warning: No {} in {}", descriptor_name, self.folder)
            }
            SkipReason::MissingContext {
                descriptor_name,
                field,
            } => write!(
                f,
                "Warning: No '{}' field in {}/{}",
                field, self.folder, descriptor_name
            ),
        }
    }
}

/// Ordered outcomes for every source folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub items: Vec<PlanItem>,
}

impl Plan {
    /// Items that will produce an output record, in run order.
    pub fn copies(&self) -> impl Iterator<Item = (&PlanItem, &PathBuf, &str)> {
        self.items.iter().filter_map(|item| match &item.outcome {
            Outcome::Copy {
                descriptor,
                filename,
            } => Some((item, descriptor, filename.as_str())),
            Outcome::Skip(_) => None,
        })
    }

    pub fn copy_count(&self) -> usize {
        self.copies().count()
    }

    pub fn skip_count(&self) -> usize {
        self.items.len() - self.copy_count()
    }

    /// Output filenames claimed by more than one folder. The last claim in
    /// each list wins.
    pub fn collisions(&self) -> BTreeMap<&str, Vec<Claim<'_>>> {
        let mut claims = self.claims();
        claims.retain(|_, claims| claims.len() > 1);
        claims
    }

    /// Every output filename with the folders that write it, in run order.
    pub fn claims(&self) -> BTreeMap<&str, Vec<Claim<'_>>> {
        let mut claims: BTreeMap<&str, Vec<Claim<'_>>> = BTreeMap::new();
        for (item, descriptor, filename) in self.copies() {
            claims.entry(filename).or_default().push(Claim {
                folder: &item.folder.name,
                descriptor,
            });
        }
        claims
    }
}

/// A folder whose descriptor would be written under a given output name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim<'a> {
    pub folder: &'a str,
    pub descriptor: &'a Path,
}

/// Scans the source root and decides each folder's outcome.
///
/// Reads descriptors but writes nothing. Fails on the first fatal condition
/// (missing source root, unreadable or malformed descriptor, unusable name).
pub fn build_plan(opts: &ExtractOptions) -> Result<Plan> {
    let mut items = Vec::new();
    for folder in scan::source_folders(&opts.source_dir)? {
        let outcome = plan_folder(&folder, opts)?;
        items.push(PlanItem { folder, outcome });
    }
    Ok(Plan { items })
}

/// Decides the outcome for one folder. Reads its descriptor, writes nothing.
pub fn plan_folder(folder: &SourceFolder, opts: &ExtractOptions) -> Result<Outcome> {
    let descriptor = folder.descriptor_path(&opts.descriptor_name);
    if !descriptor.is_file() {
        return Ok(Outcome::Skip(SkipReason::MissingDescriptor {
            descriptor_name: opts.descriptor_name.clone(),
        }));
    }

    let doc = descriptor::read_descriptor(&descriptor)?;
    let context = match descriptor::context_value(&doc, &opts.context_field, &descriptor)? {
        Some(c) => c,
        None => {
            return Ok(Outcome::Skip(SkipReason::MissingContext {
                descriptor_name: opts.descriptor_name.clone(),
                field: opts.context_field.clone(),
            }))
        }
    };

    let filename = naming::output_filename(&context);
    naming::validate_filename(&filename)?;
    Ok(Outcome::Copy {
        descriptor,
        filename,
    })
}
