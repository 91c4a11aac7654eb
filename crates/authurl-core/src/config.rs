use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::UrlError;
use crate::redirect::{AllowedOrigin, Environment};

/// One allowed-redirect-origin entry as written in config.toml: either a
/// plain (possibly wildcard) origin string or a `{ regex = "..." }` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OriginEntry {
    Pattern(String),
    Regex { regex: String },
}

impl TryFrom<&OriginEntry> for AllowedOrigin {
    type Error = UrlError;

    fn try_from(entry: &OriginEntry) -> std::result::Result<Self, Self::Error> {
        match entry {
            OriginEntry::Pattern(pattern) => Ok(AllowedOrigin::pattern(pattern.clone())),
            OriginEntry::Regex { regex } => AllowedOrigin::regex(regex),
        }
    }
}

/// Global configuration loaded from `~/.config/authurl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUrlConfig {
    /// Frontend hostname of the product instance (e.g. `clerk.example.com`).
    pub product_domain: String,
    /// `production` (default) or `development`.
    #[serde(default)]
    pub environment: Environment,
    /// URL standing in for the current page location. None = no location.
    #[serde(default)]
    pub location: Option<String>,
    /// Explicit redirect allow-list; if missing or empty, defaults are derived.
    #[serde(default)]
    pub allowed_redirect_origins: Option<Vec<OriginEntry>>,
}

impl Default for AuthUrlConfig {
    fn default() -> Self {
        Self {
            product_domain: "clerk.example.com".to_string(),
            environment: Environment::Production,
            location: None,
            allowed_redirect_origins: None,
        }
    }
}

impl AuthUrlConfig {
    /// Compiles the configured allow-list entries.
    pub fn allowed_origins(&self) -> std::result::Result<Option<Vec<AllowedOrigin>>, UrlError> {
        self.allowed_redirect_origins
            .as_ref()
            .map(|entries| {
                entries
                    .iter()
                    .map(AllowedOrigin::try_from)
                    .collect::<std::result::Result<Vec<_>, _>>()
            })
            .transpose()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("authurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AuthUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AuthUrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<AuthUrlConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AuthUrlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
