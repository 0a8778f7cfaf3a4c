//! Transfer service factory
//!
//! Creates transfer services based on configuration.

use crate::auth::PutioAuthConfig;
use crate::error::Result;
use crate::platform::{PutioService, TransferService};
use std::sync::Arc;
use tracing::debug;

/// Create a transfer service for the authenticated account
pub fn create_transfer_service(auth: &PutioAuthConfig) -> Result<Arc<dyn TransferService>> {
    debug!(base_url = %auth.base_url, "creating put.io service");
    Ok(Arc::new(PutioService::new(auth.base_url.clone())?))
}
