//! put.io authentication

use crate::auth::AuthSource;
use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Deserialize;
use std::env;
use tracing::debug;

/// Env var holding the OAuth token
pub const TOKEN_ENV: &str = "PUTIO_TOKEN";

/// put.io authentication configuration
#[derive(Debug, Clone)]
pub struct PutioAuthConfig {
    /// OAuth token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
    /// API root the token is used against
    pub base_url: String,
}

#[derive(Deserialize)]
struct AccountInfoResponse {
    info: AccountInfo,
}

#[derive(Deserialize)]
struct AccountInfo {
    username: String,
}

/// Get put.io authentication
///
/// Priority:
/// 1. `PUTIO_TOKEN` environment variable
/// 2. `token` in the config file
pub fn get_putio_auth(config: &Config) -> Result<PutioAuthConfig> {
    debug!("checking {TOKEN_ENV} env var");
    resolve_putio_auth(config, env::var(TOKEN_ENV).ok())
}

/// Resolve authentication from an explicit env value and the config
///
/// Blank tokens count as missing.
pub fn resolve_putio_auth(config: &Config, env_token: Option<String>) -> Result<PutioAuthConfig> {
    let base_url = config.base_url();

    if let Some(token) = env_token.map(|t| t.trim().to_string())
        && !token.is_empty()
    {
        debug!("obtained put.io token from {TOKEN_ENV} env var");
        return Ok(PutioAuthConfig {
            token,
            source: AuthSource::EnvVar,
            base_url,
        });
    }

    if let Some(token) = config.token.as_deref().map(str::trim)
        && !token.is_empty()
    {
        debug!("obtained put.io token from config file");
        return Ok(PutioAuthConfig {
            token: token.to_string(),
            source: AuthSource::ConfigFile,
            base_url,
        });
    }

    debug!("no put.io authentication found");
    Err(Error::Auth(format!(
        "No put.io token found. Run `putfetch auth login` or set {TOKEN_ENV}"
    )))
}

/// Test put.io authentication, returning the account's username
pub async fn test_putio_auth(config: &PutioAuthConfig) -> Result<String> {
    let mut url = url::Url::parse(&format!("{}account/info", config.base_url))
        .map_err(|e| Error::MalformedEndpoint(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("oauth_token", &config.token);

    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| Error::Internal(format!("failed to create HTTP client: {e}")))?;

    debug!("requesting account info");
    let response: AccountInfoResponse = client
        .get(url)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?
        .json()
        .await?;

    Ok(response.info.username)
}
