//! Scripted `TransferService` double

use async_trait::async_trait;
use putio_fetch::error::{Error, Result};
use putio_fetch::platform::TransferService;
use putio_fetch::submit::{MemoryNotifier, TRANSFER_NOTIFICATION_ID};
use putio_fetch::types::{SubmissionOutcome, TransferRequest};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock answers with
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum MockResponse {
    /// 200 OK
    Ok,
    /// Any other status
    Status(u16),
    /// Connection could not be made
    ConnectionFailed,
}

/// Records every request and answers from a script
///
/// Once the script runs out, every call answers `Ok`.
#[derive(Default)]
pub struct MockTransferService {
    responses: Mutex<VecDeque<MockResponse>>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<TransferRequest>>,
    observed: Mutex<Vec<Option<SubmissionOutcome>>>,
    watch: Option<Arc<MemoryNotifier>>,
}

#[allow(dead_code)]
impl MockTransferService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer with `responses` in order
    pub fn with_responses(responses: impl IntoIterator<Item = MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Delay the answer for requests whose raw text equals `input`
    pub fn with_delay(mut self, input: &str, delay: Duration) -> Self {
        self.delays.insert(input.to_string(), delay);
        self
    }

    /// Record what `notifier` shows at the moment each call starts
    pub fn watching(mut self, notifier: Arc<MemoryNotifier>) -> Self {
        self.watch = Some(notifier);
        self
    }

    pub fn requests(&self) -> Vec<TransferRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Notification state seen at the start of each call
    pub fn observed(&self) -> Vec<Option<SubmissionOutcome>> {
        self.observed.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransferService for MockTransferService {
    async fn add_transfers(&self, request: &TransferRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(notifier) = &self.watch {
            let shown = notifier.current(TRANSFER_NOTIFICATION_ID).map(|n| n.outcome);
            self.observed.lock().unwrap().push(shown);
        }

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockResponse::Ok);

        if let Some(delay) = self.delays.get(request.raw_urls()) {
            tokio::time::sleep(*delay).await;
        }

        match response {
            MockResponse::Ok => Ok(()),
            MockResponse::Status(code) => Err(Error::UnexpectedStatus(code)),
            MockResponse::ConnectionFailed => {
                Err(Error::Io(std::io::Error::from(std::io::ErrorKind::ConnectionRefused)))
            }
        }
    }
}
