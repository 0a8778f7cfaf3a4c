//! Transfer services
//!
//! Provides the interface the submission worker uses to reach put.io.

mod factory;
mod putio;

pub use factory::create_transfer_service;
pub use putio::{CONNECT_TIMEOUT_SECS, PutioService};

use crate::error::Result;
use crate::types::TransferRequest;
use async_trait::async_trait;

/// Transfer service trait
///
/// Abstracts the HTTP call so the submission state machine can run against
/// put.io or a test double.
#[async_trait]
pub trait TransferService: Send + Sync {
    /// Ask the service to add the transfers in `request`
    ///
    /// A single attempt: implementations must not retry on their own.
    async fn add_transfers(&self, request: &TransferRequest) -> Result<()>;
}
