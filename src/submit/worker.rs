//! Background submission worker
//!
//! Runs the `Started -> Succeeded | Failed` state machine for one
//! submission on its own tokio task.

use crate::error::{Error, Result};
use crate::platform::TransferService;
use crate::submit::notify::{Notification, Notifier, RetryAction};
use crate::types::{LaunchContext, TransferRequest};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Handle to a dispatched submission
///
/// Dropping it detaches the task; the submission still runs to completion.
#[derive(Debug)]
pub struct SubmissionHandle {
    task: JoinHandle<Notification>,
}

impl SubmissionHandle {
    /// Wait for the terminal notification
    pub async fn wait(self) -> Result<Notification> {
        self.task
            .await
            .map_err(|e| Error::Internal(format!("submission task failed: {e}")))
    }

    /// Whether the submission has reached a terminal state
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Performs submissions and reports their states
#[derive(Clone)]
pub struct SubmissionWorker {
    service: Arc<dyn TransferService>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionWorker {
    /// Create a worker posting to `notifier`
    pub fn new(service: Arc<dyn TransferService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { service, notifier }
    }

    /// Post `Started`, then spawn the request on the current tokio runtime
    ///
    /// `Started` is visible by the time this returns; the network call and
    /// the terminal notification happen on the spawned task. Concurrent
    /// submissions are independent; nothing is coalesced or serialised.
    pub async fn dispatch(
        &self,
        request: TransferRequest,
        launch: LaunchContext,
    ) -> SubmissionHandle {
        self.notifier.notify(Notification::started()).await;

        let worker = self.clone();
        let task = tokio::spawn(async move { worker.complete(request, launch).await });
        SubmissionHandle { task }
    }

    /// Run the submission to its terminal state on the current task
    ///
    /// Posts `Started` before any network I/O, then exactly one terminal
    /// notification, which is also returned.
    pub async fn run(&self, request: TransferRequest, launch: LaunchContext) -> Notification {
        self.notifier.notify(Notification::started()).await;
        self.complete(request, launch).await
    }

    async fn complete(&self, request: TransferRequest, launch: LaunchContext) -> Notification {
        let result = self.service.add_transfers(&request).await;
        let terminal = settle(&result, launch);
        debug!(outcome = %terminal.outcome, "submission finished");

        self.notifier.notify(terminal.clone()).await;
        terminal
    }
}

/// Map the result of the HTTP call to the terminal notification
fn settle(result: &Result<()>, launch: LaunchContext) -> Notification {
    match result {
        Ok(()) => Notification::succeeded(),
        Err(Error::MalformedEndpoint(msg)) => {
            error!(%msg, "could not build transfers endpoint");
            Notification::failed(RetryAction::new(launch))
        }
        Err(e) => {
            debug!(error = %e, "submission failed");
            Notification::failed(RetryAction::new(launch))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubmissionOutcome;

    #[test]
    fn test_settle_ok_is_succeeded() {
        let n = settle(&Ok(()), LaunchContext::new("a"));
        assert_eq!(n.outcome, SubmissionOutcome::Succeeded);
        assert!(n.retry_action().is_none());
    }

    #[test]
    fn test_settle_errors_are_failed_with_retry() {
        for err in [
            Error::UnexpectedStatus(500),
            Error::MalformedEndpoint("x".to_string()),
            Error::Internal("boom".to_string()),
        ] {
            let n = settle(&Err(err), LaunchContext::new("magnet:?xt=urn:btih:A"));
            assert_eq!(n.outcome, SubmissionOutcome::Failed);
            assert_eq!(
                n.retry_action().unwrap().launch().input(),
                "magnet:?xt=urn:btih:A"
            );
        }
    }
}
