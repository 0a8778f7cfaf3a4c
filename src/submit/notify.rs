//! Notification trait for interface-agnostic submission feedback
//!
//! The worker posts every state of a submission as a [`Notification`].
//! All transfer notifications share [`TRANSFER_NOTIFICATION_ID`], so a
//! surface that keys by id only ever shows the latest one.

use crate::types::{LaunchContext, SubmissionOutcome};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Slot a notification is posted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u32);

/// Slot shared by every add-transfer notification
pub const TRANSFER_NOTIFICATION_ID: NotificationId = NotificationId(1);

/// Replays a failed submission through the trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryAction {
    launch: LaunchContext,
}

impl RetryAction {
    /// Retry with the given original launch
    pub const fn new(launch: LaunchContext) -> Self {
        Self { launch }
    }

    /// The launch to replay
    pub const fn launch(&self) -> &LaunchContext {
        &self.launch
    }
}

/// What activating a notification does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationAction {
    /// Nothing
    None,
    /// Open the transfers overview
    OpenTransfers,
    /// Resubmit the original input
    Retry(RetryAction),
}

/// A notification posted by the submission worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Slot this notification replaces
    pub id: NotificationId,
    /// Submission state it reflects
    pub outcome: SubmissionOutcome,
    /// Headline
    pub title: &'static str,
    /// Secondary line, if any
    pub text: Option<&'static str>,
    /// Ongoing notifications cannot be dismissed by the user
    pub ongoing: bool,
    /// Action on activation
    pub action: NotificationAction,
}

impl Notification {
    /// Progress notification shown while the request is in flight
    pub const fn started() -> Self {
        Self {
            id: TRANSFER_NOTIFICATION_ID,
            outcome: SubmissionOutcome::Started,
            title: "Adding torrent",
            text: None,
            ongoing: true,
            action: NotificationAction::None,
        }
    }

    /// put.io accepted the transfer
    pub const fn succeeded() -> Self {
        Self {
            id: TRANSFER_NOTIFICATION_ID,
            outcome: SubmissionOutcome::Succeeded,
            title: "Added torrent",
            text: Some("Processing it now."),
            ongoing: false,
            action: NotificationAction::OpenTransfers,
        }
    }

    /// The submission failed; activating it retries
    pub const fn failed(retry: RetryAction) -> Self {
        Self {
            id: TRANSFER_NOTIFICATION_ID,
            outcome: SubmissionOutcome::Failed,
            title: "Couldn't add torrent",
            text: Some("Try again?"),
            ongoing: false,
            action: NotificationAction::Retry(retry),
        }
    }

    /// The retry action, for failed notifications
    pub const fn retry_action(&self) -> Option<&RetryAction> {
        match &self.action {
            NotificationAction::Retry(retry) => Some(retry),
            _ => None,
        }
    }
}

/// Notification surface
///
/// Implement this trait to present submission states.
/// - CLI implementations can draw a spinner and print the result
/// - Tests can record what was posted
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post `notification`, replacing whatever is shown under its id
    async fn notify(&self, notification: Notification);
}

/// No-op notifier for when feedback isn't needed
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _notification: Notification) {}
}

/// In-memory notifier keeping one notification per id plus a full history
#[derive(Default)]
pub struct MemoryNotifier {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    slots: HashMap<NotificationId, Notification>,
    history: Vec<Notification>,
}

impl MemoryNotifier {
    /// Create an empty notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification currently shown under `id`
    pub fn current(&self, id: NotificationId) -> Option<Notification> {
        self.lock().slots.get(&id).cloned()
    }

    /// Number of notifications currently shown
    pub fn visible_count(&self) -> usize {
        self.lock().slots.len()
    }

    /// Every notification posted, oldest first
    pub fn history(&self) -> Vec<Notification> {
        self.lock().history.clone()
    }

    /// Outcomes of every notification posted, oldest first
    pub fn outcomes(&self) -> Vec<SubmissionOutcome> {
        self.lock().history.iter().map(|n| n.outcome).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, notification: Notification) {
        let mut state = self.lock();
        state.history.push(notification.clone());
        state.slots.insert(notification.id, notification);
    }
}
