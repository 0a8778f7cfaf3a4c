//! Auth command - test and manage authentication

use crate::cli::config_path;
use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use dialoguer::Password;
use indicatif::ProgressBar;
use putio_fetch::auth::{TOKEN_ENV, get_putio_auth, test_putio_auth};
use putio_fetch::config::Config;
use putio_fetch::error::{Error, Result};
use std::path::Path;
use std::time::Duration;

/// Run the auth test command
pub async fn run_auth_test(config_path_arg: Option<&Path>) -> Result<()> {
    let config = Config::load_from(&config_path(config_path_arg)?)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message("Testing put.io authentication...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let auth = match get_putio_auth(&config) {
        Ok(auth) => auth,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };
    let result = test_putio_auth(&auth).await;
    spinner.finish_and_clear();
    let username = result?;

    println!("{} Authenticated as: {}", check(), username.accent());
    println!("  {} {:?}", "Token source:".muted(), auth.source);
    println!("  {} {}", "API:".muted(), auth.base_url);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "put.io Authentication Setup".emphasis());
    println!();
    println!("{}", "Step 1: Get an OAuth token".muted());
    println!(
        "  Create an OAuth app at {} and copy its token",
        "https://app.put.io/oauth".accent()
    );
    println!();
    println!("{}", "Step 2: Store it".muted());
    println!("  Run: {}", "putfetch auth login".accent());
    println!("  or set {}=<your-token>", TOKEN_ENV.accent());
    println!();
    println!("{}", "Check it with `putfetch auth test`".muted());
}

/// Run the auth login command (store a token in the config file)
pub fn run_auth_login(config_path_arg: Option<&Path>, token: Option<String>) -> Result<()> {
    let path = config_path(config_path_arg)?;
    let mut config = Config::load_from(&path)?;

    let token = match token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("put.io OAuth token")
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read token: {e}")))?,
    };
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::Auth("token must not be empty".to_string()));
    }

    config.token = Some(token.to_string());
    config.save_to(&path)?;
    println!("{} Saved token to {}", check(), path.display().accent());
    Ok(())
}
