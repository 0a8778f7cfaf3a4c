//! put.io transfer service implementation

use crate::error::{Error, Result};
use crate::platform::TransferService;
use crate::types::TransferRequest;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Connection timeout for the add-transfer request, in seconds
pub const CONNECT_TIMEOUT_SECS: u64 = 8;

/// put.io service using reqwest
pub struct PutioService {
    client: Client,
    base_url: String,
}

impl PutioService {
    /// Create a new put.io service
    ///
    /// `base_url` must end with `/`; see [`crate::config::Config::base_url`].
    /// Only the connect phase is bounded, by [`CONNECT_TIMEOUT_SECS`]; a slow
    /// response is waited out.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_connect_timeout(base_url, Duration::from_secs(CONNECT_TIMEOUT_SECS))
    }

    /// Create a service with a custom connect timeout
    pub fn with_connect_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| Error::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// `{base}transfers/add?oauth_token={token}`
    pub fn transfers_add_url(&self, token: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}transfers/add", self.base_url))
            .map_err(|e| Error::MalformedEndpoint(format!("{}: {e}", self.base_url)))?;
        if url.cannot_be_a_base() {
            return Err(Error::MalformedEndpoint(self.base_url.clone()));
        }
        url.query_pairs_mut().append_pair("oauth_token", token);
        Ok(url)
    }
}

/// Form body for the add-transfer call
///
/// The text goes in verbatim, without percent-encoding.
fn form_body(request: &TransferRequest) -> String {
    format!("url={}", request.raw_urls())
}

#[async_trait]
impl TransferService for PutioService {
    async fn add_transfers(&self, request: &TransferRequest) -> Result<()> {
        let url = self.transfers_add_url(request.auth_token())?;
        debug!(lines = request.line_count(), "adding transfers");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form_body(request))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "put.io rejected transfers");
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        debug!("added transfers");
        Ok(())
    }
}
