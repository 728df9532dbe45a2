use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How file bytes are fed to the hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashMode {
    /// Decode as UTF-8 (BOM stripped, undecodable bytes dropped) and hash the
    /// re-encoded text.
    #[default]
    Text,
    /// Hash the file bytes as they are on disk.
    Raw,
}

/// How the computed digest is compared with the manifest's expected digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestCase {
    /// Byte-for-byte comparison; an uppercase expected digest never matches.
    #[default]
    Exact,
    /// ASCII case-insensitive comparison.
    Insensitive,
}

/// Global configuration loaded from `~/.config/sumcheck/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SumcheckConfig {
    /// "text" (default) or "raw".
    #[serde(default)]
    pub hash_mode: HashMode,
    /// "exact" (default) or "insensitive".
    #[serde(default)]
    pub digest_case: DigestCase,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sumcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SumcheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SumcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SumcheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Like [`load_or_init`], but an unreadable or invalid config only logs a
/// warning and yields the defaults.
pub fn load_or_default() -> SumcheckConfig {
    fallback_to_default(load_or_init())
}

fn fallback_to_default(loaded: Result<SumcheckConfig>) -> SumcheckConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("config unavailable, using defaults: {:#}", err);
        SumcheckConfig::default()
    })
}
