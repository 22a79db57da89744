use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default source root: one subfolder per clip.
pub const DEFAULT_SOURCE_DIR: &str = "context_videoclips";
/// Default flat output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "context_jsons";
/// Descriptor file looked up inside each source folder.
pub const DEFAULT_DESCRIPTOR_NAME: &str = "context_info.json";
/// JSON key whose value names the output record.
pub const DEFAULT_CONTEXT_FIELD: &str = "context";

/// Global configuration loaded from `~/.config/ctxextract/config.toml`.
///
/// Every key is optional in the file; missing keys take the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Source root; relative paths resolve against the working directory.
    pub source_dir: PathBuf,
    /// Output root; created if missing, never cleared.
    pub output_dir: PathBuf,
    /// Descriptor file name inside each source folder.
    pub descriptor_name: String,
    /// JSON field used to derive the output filename.
    pub context_field: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            descriptor_name: DEFAULT_DESCRIPTOR_NAME.to_string(),
            context_field: DEFAULT_CONTEXT_FIELD.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Serializes the settings in the on-disk format.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build run options, resolving relative directories against `base`.
    /// `source` and `output` override the configured directories.
    pub fn to_options(
        &self,
        base: &Path,
        source: Option<&Path>,
        output: Option<&Path>,
    ) -> ExtractOptions {
        let source = source.unwrap_or(self.source_dir.as_path());
        let output = output.unwrap_or(self.output_dir.as_path());
        ExtractOptions {
            source_dir: base.join(source),
            output_dir: base.join(output),
            descriptor_name: self.descriptor_name.clone(),
            context_field: self.context_field.clone(),
        }
    }
}

/// Fully resolved inputs for a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub descriptor_name: String,
    pub context_field: String,
}

impl ExtractOptions {
    /// Options with the default descriptor name and context field.
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            descriptor_name: DEFAULT_DESCRIPTOR_NAME.to_string(),
            context_field: DEFAULT_CONTEXT_FIELD.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ctxextract")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ExtractConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ExtractConfig> {
    if !path.exists() {
        let default_cfg = ExtractConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: ExtractConfig = toml::from_str(&data)?;
    Ok(cfg)
}
