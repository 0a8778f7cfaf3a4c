//! Add-transfer submission engine
//!
//! Handles submitting entered URLs to put.io:
//! 1. Trigger - validate input and dispatch
//! 2. Worker - perform the request on a background task
//! 3. Notify - present `Started`, then `Succeeded` or `Failed`

mod notify;
mod trigger;
mod worker;

pub use notify::{
    MemoryNotifier, NoopNotifier, Notification, NotificationAction, NotificationId, Notifier,
    RetryAction, TRANSFER_NOTIFICATION_ID,
};
pub use trigger::SubmissionTrigger;
pub use worker::{SubmissionHandle, SubmissionWorker};
