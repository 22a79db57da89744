//! Source root scanning.

use crate::error::{ExtractError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// An immediate subdirectory of the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFolder {
    /// Entry name, used in console and log lines.
    pub name: String,
    pub path: PathBuf,
}

impl SourceFolder {
    pub fn descriptor_path(&self, descriptor_name: &str) -> PathBuf {
        self.path.join(descriptor_name)
    }
}

/// Lists the immediate subdirectories of `root`, sorted by name.
///
/// Files and other non-directory entries are skipped. Symlinks to
/// directories count as directories.
pub fn source_folders(root: &Path) -> Result<Vec<SourceFolder>> {
    let root_err = |source| ExtractError::SourceRoot {
        path: root.to_path_buf(),
        source,
    };

    let mut folders = Vec::new();
    for entry in fs::read_dir(root).map_err(root_err)? {
        let entry = entry.map_err(root_err)?;
        let path = entry.path();
        if !path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping non-directory entry");
            continue;
        }
        folders.push(SourceFolder {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    folders.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    tracing::debug!(root = %root.display(), count = folders.len(), "scanned source folders");
    Ok(folders)
}
