//! CLI command implementations

mod add;
mod auth;
mod notify;
mod style;

pub use add::{AddOptions, run_add};
pub use auth::{run_auth_login, run_auth_setup, run_auth_test};
pub use notify::CliNotifier;

use putio_fetch::config::Config;
use putio_fetch::error::Result;
use std::path::{Path, PathBuf};

/// Config file to use: `--config` if given, otherwise the default location
fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(Config::default_path, |p| Ok(p.to_path_buf()))
}
