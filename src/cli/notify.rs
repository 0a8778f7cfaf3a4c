//! Terminal notification surface

use crate::cli::style::{Stylize, check, cross, link, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use putio_fetch::config::TRANSFERS_PAGE_URL;
use putio_fetch::submit::{Notification, NotificationAction, Notifier};
use putio_fetch::types::SubmissionOutcome;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Notifier that draws a spinner while a request is in flight and prints
/// the terminal state
///
/// There is a single slot: posting a notification clears whatever was
/// shown before.
#[derive(Default)]
pub struct CliNotifier {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliNotifier {
    /// Create a notifier with nothing shown
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Notifier for CliNotifier {
    async fn notify(&self, notification: Notification) {
        let mut slot = self.slot();
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }

        match notification.outcome {
            SubmissionOutcome::Started => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(spinner_style());
                spinner.set_message(format!("{}...", notification.title));
                spinner.enable_steady_tick(Duration::from_millis(80));
                *slot = Some(spinner);
            }
            SubmissionOutcome::Succeeded => {
                println!("{} {}", check(), notification.title);
                if let Some(text) = notification.text {
                    println!("  {}", text.muted());
                }
                if notification.action == NotificationAction::OpenTransfers {
                    println!("  {}", link("View transfers", TRANSFERS_PAGE_URL));
                }
            }
            SubmissionOutcome::Failed => {
                eprintln!("{} {}", cross(), notification.title);
            }
        }
    }
}
