//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Twin Mills: game event webhook relay
///
/// Reads host game events as JSON lines on stdin and forwards each one
/// to the webhook configured for its category.
#[derive(Debug, Parser)]
#[command(name = "twin-mills")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// API key sent as the Authorization header (empty disables sending)
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Webhook URL for `PlayerDeath` events (empty disables the category)
    #[arg(long = "player-death-url", value_name = "URL")]
    pub player_death_url: Option<String>,

    /// Webhook URL for `PlayerKill` events (empty disables the category)
    #[arg(long = "player-kill-url", value_name = "URL")]
    pub player_kill_url: Option<String>,

    /// Webhook URL for `PlayerLoot` events (empty disables the category)
    #[arg(long = "player-loot-url", value_name = "URL")]
    pub player_loot_url: Option<String>,

    /// Webhook URL for `PlayerLogin` events (empty disables the category)
    #[arg(long = "player-login-url", value_name = "URL")]
    pub player_login_url: Option<String>,

    /// Webhook URL for `EntityDestroyed` events (empty disables the category)
    #[arg(long = "entity-destroyed-url", value_name = "URL")]
    pub entity_destroyed_url: Option<String>,

    /// Test mode - log requests without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for twin-mills
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "twin-mills.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
