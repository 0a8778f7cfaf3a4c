//! Persisted user configuration
//!
//! Stored as TOML under the platform config directory. Environment
//! variables take precedence over the file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default put.io API root
pub const DEFAULT_BASE_URL: &str = "https://api.put.io/v2/";

/// Web page listing the account's transfers
pub const TRANSFERS_PAGE_URL: &str = "https://app.put.io/transfers";

/// Env var pointing at an alternate config file
pub const CONFIG_PATH_ENV: &str = "PUTFETCH_CONFIG";

/// Env var overriding the API root
pub const BASE_URL_ENV: &str = "PUTIO_BASE_URL";

/// On-disk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// OAuth token for the put.io API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// API root, e.g. `https://api.put.io/v2/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Location of the config file
    ///
    /// `PUTFETCH_CONFIG` wins, otherwise `<config dir>/putio-fetch/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("putio-fetch").join("config.toml"))
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;
        fs::write(path, contents)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Effective API root, honouring `PUTIO_BASE_URL`
    pub fn base_url(&self) -> String {
        self.base_url_with(env::var(BASE_URL_ENV).ok())
    }

    /// Effective API root given an explicit override
    ///
    /// Always ends with `/` so endpoint paths can be appended directly.
    pub fn base_url_with(&self, override_url: Option<String>) -> String {
        let base = override_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base = base.trim();
        if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        }
    }
}
