//! Output record writing.
//!
//! Records are copied into a `.part` sibling, stamped with the source's
//! timestamps and permissions, then renamed over the final name. A run that
//! dies mid-copy leaves at most a stray `.part` file, never a truncated record.

use crate::error::{ExtractError, Result};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `sunset.json` → `sunset.json.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates `dir` and its parents if missing. Existing directories are fine.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ExtractError::CreateOutput {
        path: dir.to_path_buf(),
        source,
    })
}

/// Copies `src` to `dest` byte for byte, keeping permissions and access and
/// modification times. An existing `dest` is replaced. Returns bytes copied.
pub fn copy_record(src: &Path, dest: &Path) -> Result<u64> {
    let tmp = temp_path(dest);
    let result = copy_via_temp(src, &tmp, dest);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(|source| ExtractError::Copy {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source,
    })
}

fn copy_via_temp(src: &Path, tmp: &Path, dest: &Path) -> io::Result<u64> {
    let mut input = File::open(src)?;
    let meta = input.metadata()?;

    let mut output = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp)?;
    let bytes = io::copy(&mut input, &mut output)?;

    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    output.set_times(times)?;
    output.sync_all()?;
    drop(output);

    // Permissions last: a read-only source would otherwise block set_times.
    fs::set_permissions(tmp, meta.permissions())?;
    fs::rename(tmp, dest)?;
    tracing::debug!(from = %src.display(), to = %dest.display(), bytes, "record written");
    Ok(bytes)
}
