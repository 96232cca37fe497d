//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root structure of the configuration file.
///
/// Every value is optional; absent values leave the feature disabled
/// unless a CLI flag supplies them.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook section
    #[serde(default)]
    pub webhook: WebhookSection,
}

/// The `[webhook]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Shared API key sent as the `Authorization` header
    pub api_key: Option<String>,
    /// Destination for `PlayerDeath` events
    pub player_death_url: Option<String>,
    /// Destination for `PlayerKill` events
    pub player_kill_url: Option<String>,
    /// Destination for `PlayerLoot` events
    pub player_loot_url: Option<String>,
    /// Destination for `PlayerLogin` events
    pub player_login_url: Option<String>,
    /// Destination for `EntityDestroyed` events
    pub entity_destroyed_url: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or has unknown keys.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates the commented configuration template written by `init`.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Twin Mills webhook configuration
#
# Each event category posts to its own URL. Leave a URL unset or empty
# to disable that category. Without an api_key nothing is sent at all.

[webhook]
# Sent verbatim as the Authorization header of every request
# api_key = "your-api-key"

# Player killed by another player
# player_death_url = "https://hooks.example/death"

# Player entity destroyed by another player
# player_kill_url = "https://hooks.example/kill"

# Player looted by a player from another team
# player_loot_url = "https://hooks.example/loot"

# Player connected
# player_login_url = "https://hooks.example/login"

# Deployable or structure destroyed by a player
# entity_destroyed_url = "https://hooks.example/entity"
"#
    .to_string()
}
