//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write the configuration template (init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A webhook URL could not be used.
    #[error("Invalid URL for {field} '{url}': {reason}")]
    InvalidUrl {
        /// Name of the setting
        field: &'static str,
        /// The rejected URL string
        url: String,
        /// Reason for rejection
        reason: String,
    },

    /// The API key cannot be sent as a header value.
    #[error("Invalid {field}: {reason}")]
    InvalidApiKey {
        /// Name of the setting
        field: &'static str,
        /// Reason for rejection
        reason: String,
    },
}

/// Setting names as they appear in the `[webhook]` section.
pub mod field {
    /// Shared API key.
    pub const API_KEY: &str = "api_key";
    /// `PlayerDeath` destination.
    pub const PLAYER_DEATH_URL: &str = "player_death_url";
    /// `PlayerKill` destination.
    pub const PLAYER_KILL_URL: &str = "player_kill_url";
    /// `PlayerLoot` destination.
    pub const PLAYER_LOOT_URL: &str = "player_loot_url";
    /// `PlayerLogin` destination.
    pub const PLAYER_LOGIN_URL: &str = "player_login_url";
    /// `EntityDestroyed` destination.
    pub const ENTITY_DESTROYED_URL: &str = "entity_destroyed_url";
}
