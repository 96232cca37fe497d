//! Validated settings after merging CLI and TOML sources.
//!
//! [`Settings`] is built once at startup and shared read-only for the
//! rest of the process. Every destination is an explicit `Option`:
//! `None` means the category is disabled.

use std::fmt;
use std::path::Path;

use url::Url;

use crate::webhook::{ApiKey, Category};

use super::cli::Cli;
use super::error::{ConfigError, field};
use super::toml::{TomlConfig, WebhookSection};

/// Destination URL per event category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookUrls {
    /// `PlayerDeath` destination
    pub player_death: Option<Url>,
    /// `PlayerKill` destination
    pub player_kill: Option<Url>,
    /// `PlayerLoot` destination
    pub player_loot: Option<Url>,
    /// `PlayerLogin` destination
    pub player_login: Option<Url>,
    /// `EntityDestroyed` destination
    pub entity_destroyed: Option<Url>,
}

impl WebhookUrls {
    /// Returns the destination for `category`, or `None` if disabled.
    #[must_use]
    pub const fn url(&self, category: Category) -> Option<&Url> {
        match category {
            Category::PlayerDeath => self.player_death.as_ref(),
            Category::PlayerKill => self.player_kill.as_ref(),
            Category::PlayerLoot => self.player_loot.as_ref(),
            Category::PlayerLogin => self.player_login.as_ref(),
            Category::EntityDestroyed => self.entity_destroyed.as_ref(),
        }
    }

    /// Returns the categories that have a destination.
    #[must_use]
    pub fn enabled(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.url(*c).is_some())
            .collect()
    }
}

/// Fully validated runtime settings.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Shared API key; `None` disables all dispatch
    pub api_key: Option<ApiKey>,

    /// Per-category destinations
    pub webhooks: WebhookUrls,

    /// Dry-run mode (log requests without sending)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled = self.webhooks.enabled();
        let enabled_str = if enabled.is_empty() {
            "none".to_string()
        } else {
            enabled
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        write!(
            f,
            "Settings {{ api_key: {}, webhooks: [{}], dry_run: {} }}",
            if self.api_key.is_some() { "set" } else { "unset" },
            enabled_str,
            self.dry_run,
        )
    }
}

impl Settings {
    /// Creates settings from CLI arguments and an optional TOML config.
    ///
    /// An explicit CLI value wins over TOML, including an empty one, which
    /// disables the setting. Empty or blank values resolve to `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a URL does not parse or is not http(s), or if
    /// the API key is not a valid header value.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let section = toml.map(|t| &t.webhook);

        let api_key = Self::resolve_api_key(cli, section)?;

        let webhooks = WebhookUrls {
            player_death: resolve_url(
                field::PLAYER_DEATH_URL,
                cli.player_death_url.as_deref(),
                section.and_then(|s| s.player_death_url.as_deref()),
            )?,
            player_kill: resolve_url(
                field::PLAYER_KILL_URL,
                cli.player_kill_url.as_deref(),
                section.and_then(|s| s.player_kill_url.as_deref()),
            )?,
            player_loot: resolve_url(
                field::PLAYER_LOOT_URL,
                cli.player_loot_url.as_deref(),
                section.and_then(|s| s.player_loot_url.as_deref()),
            )?,
            player_login: resolve_url(
                field::PLAYER_LOGIN_URL,
                cli.player_login_url.as_deref(),
                section.and_then(|s| s.player_login_url.as_deref()),
            )?,
            entity_destroyed: resolve_url(
                field::ENTITY_DESTROYED_URL,
                cli.entity_destroyed_url.as_deref(),
                section.and_then(|s| s.entity_destroyed_url.as_deref()),
            )?,
        };

        Ok(Self {
            api_key,
            webhooks,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads the config file named by `cli.config` (if any) and merges it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// merged settings are invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns the destination for `category`.
    #[must_use]
    pub const fn url(&self, category: Category) -> Option<&Url> {
        self.webhooks.url(category)
    }

    fn resolve_api_key(
        cli: &Cli,
        section: Option<&WebhookSection>,
    ) -> Result<Option<ApiKey>, ConfigError> {
        let Some(key) = pick(
            cli.api_key.as_deref(),
            section.and_then(|s| s.api_key.as_deref()),
        ) else {
            return Ok(None);
        };

        ApiKey::new(key)
            .map(Some)
            .map_err(|e| ConfigError::InvalidApiKey {
                field: field::API_KEY,
                reason: e.to_string(),
            })
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// CLI value if given (even empty), else TOML; blank resolves to `None`.
fn pick<'a>(cli: Option<&'a str>, toml: Option<&'a str>) -> Option<&'a str> {
    cli.or(toml).map(str::trim).filter(|s| !s.is_empty())
}

fn resolve_url(
    name: &'static str,
    cli: Option<&str>,
    toml: Option<&str>,
) -> Result<Option<Url>, ConfigError> {
    let Some(raw) = pick(cli, toml) else {
        return Ok(None);
    };

    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        field: name,
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(Some(url)),
        other => Err(ConfigError::InvalidUrl {
            field: name,
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}', expected http or https"),
        }),
    }
}
