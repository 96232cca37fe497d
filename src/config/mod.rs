//! Configuration layer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated, read-only settings ([`Settings`], [`WebhookUrls`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! Each value is resolved from (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Disabled** - there are no built-in destinations or keys
//!
//! An explicit empty CLI value still counts as given, so
//! `--player-loot-url ""` turns off a category the config file enables.

mod cli;
mod error;
mod settings;
mod toml;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use settings::{Settings, WebhookUrls, write_default_config};
pub use toml::{TomlConfig, WebhookSection, default_config_template};
