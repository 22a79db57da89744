//! `ctxextract config` – show where settings live and what they are.

use anyhow::Result;
use ctxextract_core::config::{self, ExtractConfig};

pub fn run_config(cfg: &ExtractConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
