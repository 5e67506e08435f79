use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::algorithm::ChecksumType;
use crate::checksum::DEFAULT_BUF_SIZE;

/// Global configuration loaded from `~/.config/sumstream/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumConfig {
    /// Algorithm used when the command line does not name one.
    #[serde(default)]
    pub algorithm: ChecksumType,
    /// Size of the buffer each read through the checksum reader fills.
    #[serde(default = "default_read_buffer_bytes")]
    pub read_buffer_bytes: usize,
}

fn default_read_buffer_bytes() -> usize {
    DEFAULT_BUF_SIZE
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            algorithm: ChecksumType::default(),
            read_buffer_bytes: default_read_buffer_bytes(),
        }
    }
}

impl SumConfig {
    /// Read buffer size, never zero.
    pub fn buffer_size(&self) -> usize {
        self.read_buffer_bytes.max(1)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sumstream")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SumConfig = toml::from_str(&data)?;
    Ok(cfg)
}
