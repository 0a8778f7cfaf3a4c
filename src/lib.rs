//! putio-fetch - submit transfers to put.io
//!
//! Library behind the `putfetch` CLI. A [`submit::SubmissionTrigger`]
//! validates what the user entered and hands it to a
//! [`submit::SubmissionWorker`], which performs the HTTP call through a
//! [`platform::TransferService`] and reports progress through a
//! [`submit::Notifier`].

pub mod auth;
pub mod config;
pub mod error;
pub mod platform;
pub mod submit;
pub mod types;
