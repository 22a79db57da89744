//! Source trees on disk for extraction tests.

use std::fs;
use std::path::{Path, PathBuf};

use ctxextract_core::config::ExtractOptions;
use tempfile::TempDir;

/// A temp dir holding `clips/` (source root) and `out/` (output root).
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("clips")).unwrap();
        Self { dir }
    }

    pub fn source(&self) -> PathBuf {
        self.dir.path().join("clips")
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn options(&self) -> ExtractOptions {
        ExtractOptions::new(self.source(), self.output())
    }

    /// Adds a clip folder, with a `context_info.json` when `body` is set.
    pub fn clip(&self, name: &str, body: Option<&str>) -> PathBuf {
        let folder = self.source().join(name);
        fs::create_dir_all(&folder).unwrap();
        if let Some(body) = body {
            fs::write(folder.join("context_info.json"), body).unwrap();
        }
        folder
    }

    /// Sorted names of the files in the output directory.
    pub fn output_files(&self) -> Vec<String> {
        list(&self.output())
    }
}

pub fn list(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
