//! Core types shared by the trigger, the worker and the HTTP layer

use std::fmt;

/// A request to add one or more transfers
///
/// `raw_urls` is passed through untouched: it may hold several
/// newline-separated URLs or magnet links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    raw_urls: String,
    auth_token: String,
}

impl TransferRequest {
    /// Build a request from the text entered and the OAuth token
    pub fn new(raw_urls: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            raw_urls: raw_urls.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Text to submit, exactly as entered
    pub fn raw_urls(&self) -> &str {
        &self.raw_urls
    }

    /// OAuth token sent as the `oauth_token` query parameter
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Number of non-blank lines in the submitted text
    pub fn line_count(&self) -> usize {
        self.raw_urls
            .lines()
            .filter(|l| !l.trim().is_empty())
            .count()
    }
}

/// Where a submission currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionOutcome {
    /// Request dispatched, waiting on put.io
    Started,
    /// put.io accepted the transfer
    Succeeded,
    /// The request failed or was rejected
    Failed,
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// The input the trigger was launched with
///
/// Kept by the retry action so a failed submission can be replayed through
/// the same entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchContext {
    input: String,
}

impl LaunchContext {
    /// Capture the original input
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The original input, untrimmed
    pub fn input(&self) -> &str {
        &self.input
    }
}
