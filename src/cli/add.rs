//! Add command - submit URLs and magnet links as transfers

use crate::cli::auth::run_auth_setup;
use crate::cli::{CliNotifier, config_path};
use dialoguer::{Confirm, Input};
use putio_fetch::auth::get_putio_auth;
use putio_fetch::config::Config;
use putio_fetch::error::{Error, Result};
use putio_fetch::platform::create_transfer_service;
use putio_fetch::submit::{Notification, SubmissionTrigger, SubmissionWorker};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Options for the add command
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// Don't offer to retry a failed submission
    pub no_retry: bool,
}

/// Run the add command
pub async fn run_add(
    config_path_arg: Option<&Path>,
    urls: &[String],
    options: AddOptions,
) -> Result<()> {
    let config = Config::load_from(&config_path(config_path_arg)?)?;

    // Without a token there is nothing to submit with; show how to get one
    let auth = match get_putio_auth(&config) {
        Ok(auth) => auth,
        Err(e) => {
            run_auth_setup();
            return Err(e);
        }
    };

    let service = create_transfer_service(&auth)?;
    let worker = SubmissionWorker::new(service, Arc::new(CliNotifier::new()));
    let trigger = SubmissionTrigger::new(worker, auth.token);

    let input = read_input(urls)?;
    let mut handle = trigger.submit(&input).await?;
    let can_retry = !options.no_retry && io::stdin().is_terminal();

    loop {
        let notification = handle.wait().await?;
        let Some(retry) = notification.retry_action() else {
            return Ok(());
        };
        if !can_retry || !confirm_retry(&notification)? {
            return Err(Error::SubmissionFailed);
        }
        handle = trigger.retry(retry).await?;
    }
}

/// Text to submit: arguments, piped stdin, or an interactive prompt
fn read_input(urls: &[String]) -> Result<String> {
    if !urls.is_empty() {
        debug!(count = urls.len(), "reading URLs from arguments");
        return Ok(urls.join("\n"));
    }

    if !io::stdin().is_terminal() {
        debug!("reading URLs from stdin");
        let text = io::read_to_string(io::stdin())?;
        return Ok(text.trim_end_matches(['\r', '\n']).to_string());
    }

    Input::<String>::new()
        .with_prompt("URLs or magnet links")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| Error::Internal(format!("Failed to read input: {e}")))
}

fn confirm_retry(notification: &Notification) -> Result<bool> {
    Confirm::new()
        .with_prompt(notification.text.unwrap_or("Try again?"))
        .default(true)
        .interact()
        .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))
}
