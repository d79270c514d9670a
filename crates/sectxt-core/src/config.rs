use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP settings shared by the document fetch and live link validation.
///
/// Redirect following is not configurable: every request surfaces the first
/// response, so a security.txt has to live at the exact location asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Overall per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connect-phase timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Refuse to issue plain `http` requests.
    pub force_tls: bool,
    /// Abort a transfer once its body grows past this many bytes.
    pub max_body_bytes: u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 15,
            force_tls: false,
            max_body_bytes: 256 * 1024,
        }
    }
}

/// Strictness of field validation. Both off means parsing is local and pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Encryption must be `https`; Encryption and Acknowledgements links must
    /// answer a GET with exactly 200. Performs network I/O while parsing.
    pub live_validation: bool,
    /// Encryption and Acknowledgements links must share the document's
    /// hostname. Skipped when the document has no origin (local files).
    pub enforce_same_origin: bool,
}

/// Global configuration loaded from `~/.config/sectxt/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectxtConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub validation: ValidationOptions,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sectxt")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SectxtConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SectxtConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<SectxtConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SectxtConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
