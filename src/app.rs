//! Application startup and utilities.
//!
//! Exit codes, tracing setup, and configuration error hints used by the
//! main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use twin_mills::config::ConfigError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable file, invalid URL or key.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - event stream failure.
    ///
    /// A function because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'twin-mills init' to generate a configuration template.");
        }
        ConfigError::InvalidUrl { field, .. } => {
            eprintln!(
                "\nSet webhook.{field} to an http(s) URL, or leave it empty to disable the category."
            );
        }
        ConfigError::InvalidApiKey { field, .. } => {
            eprintln!(
                "\nSet webhook.{field} to a value without control characters or line breaks."
            );
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
