//! `ctxextract extract` – copy descriptors into the output directory.

use anyhow::Result;
use ctxextract_core::config::ExtractOptions;
use ctxextract_core::extract;
use std::io;

pub fn run_extract(opts: &ExtractOptions, dry_run: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if dry_run {
        extract::dry_run(opts, &mut out)?;
    } else {
        extract::run(opts, &mut out)?;
    }
    Ok(())
}
