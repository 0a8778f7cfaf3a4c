//! Authentication for put.io
//!
//! Supports an environment variable and the persisted config file.

mod putio;

pub use putio::{
    PutioAuthConfig, TOKEN_ENV, get_putio_auth, resolve_putio_auth, test_putio_auth,
};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from environment variable
    EnvVar,
    /// Token from the config file
    ConfigFile,
}
