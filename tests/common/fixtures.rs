//! Shared inputs and builders

use putio_fetch::platform::TransferService;
use putio_fetch::submit::{MemoryNotifier, SubmissionTrigger, SubmissionWorker};
use std::sync::Arc;

#[allow(dead_code)]
pub const MAGNET: &str = "magnet:?xt=urn:btih:ABCD";

#[allow(dead_code)]
pub const TOKEN: &str = "tok123";

/// Trigger wired to `service`, posting into a fresh `MemoryNotifier`
#[allow(dead_code)]
pub fn trigger_with(service: Arc<dyn TransferService>) -> (SubmissionTrigger, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let worker = SubmissionWorker::new(service, notifier.clone());
    (SubmissionTrigger::new(worker, TOKEN), notifier)
}
