use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::app_id::AppId;
use crate::link::{LinkTemplate, ManifestEndpoint, DEFAULT_AUTH_CODE, DEFAULT_BASE_URL};
use crate::messages::{Locale, Messages};
use crate::navigate::DEFAULT_OPENER;

/// How `manilink open` hands over the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigatorKind {
    /// Launch the opener program (browser).
    #[default]
    Open,
    /// Print the link to stdout.
    Print,
}

/// Global configuration loaded from `~/.config/manilink/config.toml`.
/// Every key is optional; missing keys take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManilinkConfig {
    /// Endpoint host; the download path and query are appended to it.
    pub base_url: String,
    /// Token sent as `auth_code`.
    pub auth_code: String,
    /// Language of status messages: "pt" (default) or "en".
    pub locale: Locale,
    /// "open" (default) or "print".
    pub navigator: NavigatorKind,
    /// Program used by the "open" navigator.
    pub opener: String,
}

impl Default for ManilinkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_code: DEFAULT_AUTH_CODE.to_string(),
            locale: Locale::default(),
            navigator: NavigatorKind::default(),
            opener: DEFAULT_OPENER.to_string(),
        }
    }
}

impl ManilinkConfig {
    /// Endpoint described by `base_url` and `auth_code`. Fails on a non-http(s) base.
    pub fn endpoint(&self) -> Result<ManifestEndpoint> {
        ManifestEndpoint::new(&self.base_url, &self.auth_code)
    }

    pub fn messages(&self) -> Messages {
        Messages::for_locale(self.locale)
    }
}

/// Builds the endpoint per call, so a broken `base_url` only surfaces for valid AppIds.
impl LinkTemplate for ManilinkConfig {
    fn build_link(&self, app_id: &AppId) -> Result<Url> {
        Ok(self.endpoint()?.link_for(app_id))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("manilink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG location, creating a default file if none exists.
pub fn load_or_init() -> Result<ManilinkConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ManilinkConfig> {
    if !path.exists() {
        let default_cfg = ManilinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ManilinkConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
