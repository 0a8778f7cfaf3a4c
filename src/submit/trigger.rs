//! Submission trigger
//!
//! Entry point that validates what the user entered and hands it off to
//! the worker without waiting for the network.

use crate::error::{Error, Result};
use crate::submit::notify::RetryAction;
use crate::submit::worker::{SubmissionHandle, SubmissionWorker};
use crate::types::{LaunchContext, TransferRequest};
use tracing::debug;

/// Validates input and dispatches submissions
#[derive(Clone)]
pub struct SubmissionTrigger {
    worker: SubmissionWorker,
    token: String,
}

impl SubmissionTrigger {
    /// Create a trigger submitting with `token`
    pub fn new(worker: SubmissionWorker, token: impl Into<String>) -> Self {
        Self {
            worker,
            token: token.into(),
        }
    }

    /// Submit the entered text
    ///
    /// Fails with [`Error::EmptyInput`] when `input` is blank, without any
    /// network activity or notification. Otherwise posts `Started`,
    /// dispatches exactly one submission and returns without waiting for
    /// the network. Must be called inside a tokio runtime.
    pub async fn submit(&self, input: &str) -> Result<SubmissionHandle> {
        if input.trim().is_empty() {
            debug!("empty input, nothing to submit");
            return Err(Error::EmptyInput);
        }

        let request = TransferRequest::new(input, self.token.as_str());
        debug!(lines = request.line_count(), "dispatching submission");
        Ok(self.worker.dispatch(request, LaunchContext::new(input)).await)
    }

    /// Replay a failed submission with its original input
    pub async fn retry(&self, action: &RetryAction) -> Result<SubmissionHandle> {
        debug!("retrying submission");
        self.submit(action.launch().input()).await
    }
}
