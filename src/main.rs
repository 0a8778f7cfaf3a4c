//! putfetch - add put.io transfers from the command line
//!
//! CLI binary for submitting URLs and magnet links to put.io.

use anyhow::Result;
use clap::{Parser, Subcommand};
use putio_fetch::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "putfetch")]
#[command(about = "Add URLs and magnet links as put.io transfers")]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to $PUTFETCH_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add transfers (prompts when no URL is given and stdin is a terminal)
    Add {
        /// URLs or magnet links to fetch
        urls: Vec<String>,

        /// Don't offer to retry a failed submission
        #[arg(long)]
        no_retry: bool,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
    /// Store a token in the config file
    Login {
        /// OAuth token (prompted for when omitted)
        #[arg(long)]
        token: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("PUTFETCH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "putio_fetch=debug,putfetch=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        // Default: interactive mode
        None => cli::run_add(config_path, &[], cli::AddOptions::default()).await,
        Some(Commands::Add { urls, no_retry }) => {
            cli::run_add(config_path, &urls, cli::AddOptions { no_retry }).await
        }
        Some(Commands::Auth { action }) => match action {
            AuthAction::Test => cli::run_auth_test(config_path).await,
            AuthAction::Setup => {
                cli::run_auth_setup();
                Ok(())
            }
            AuthAction::Login { token } => cli::run_auth_login(config_path, token),
        },
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Already shown by the notifier
        Err(Error::SubmissionFailed) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
