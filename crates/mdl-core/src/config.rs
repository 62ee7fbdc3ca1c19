use crate::parser::{ParserRegistry, SoundCloudParser};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// SoundCloud parser settings (`[soundcloud]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundCloudConfig {
    /// Register the SoundCloud parser at startup.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Classify `m.soundcloud.com` share links as well.
    #[serde(default)]
    pub accept_mobile_links: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SoundCloudConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            accept_mobile_links: false,
        }
    }
}

/// Global configuration loaded from `~/.config/mdl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdlConfig {
    /// Default output format; `--json` on a command overrides it.
    #[serde(default)]
    pub output: OutputFormat,
    /// Log filter directives (e.g. "warn,mdl_core=info"). `RUST_LOG` overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub soundcloud: SoundCloudConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MdlConfig::default();
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
pub fn load_from(path: &Path) -> Result<MdlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: MdlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Build the process-wide parser registry from configuration.
pub fn build_registry(cfg: &MdlConfig) -> ParserRegistry {
    let mut registry = ParserRegistry::new();
    if cfg.soundcloud.enabled {
        registry.register(
            SoundCloudParser::new().with_mobile_links(cfg.soundcloud.accept_mobile_links),
        );
    } else {
        tracing::info!("soundcloud parser disabled by config");
    }
    registry
}
