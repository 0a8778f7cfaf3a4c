//! Error types for putio-fetch

use thiserror::Error;

/// Errors produced by the library
#[derive(Error, Debug)]
pub enum Error {
    /// Nothing (or only whitespace) was entered
    #[error("nothing entered to fetch")]
    EmptyInput,

    /// The transfers endpoint could not be built from the base URL
    #[error("malformed endpoint: {0}")]
    MalformedEndpoint(String),

    /// Transport-level failure (connect, write or read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// put.io answered with something other than 200 OK
    #[error("put.io returned HTTP {0}")]
    UnexpectedStatus(u16),

    /// Missing or rejected token
    #[error("authentication error: {0}")]
    Auth(String),

    /// The submission ended in the failed state
    #[error("couldn't add torrent")]
    SubmissionFailed,

    /// Unreadable or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything that should not happen
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
