//! # Console Configuration
//!
//! Settings loaded once at startup. Read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--orders-file`, `--shop-name`, `--log`)
//! 2. Environment variables (`RUSHMORE_*`)
//! 3. Defaults (this file)
//!
//! Tax rate and discount tiers are business rules and live in
//! `rushmore-core`, not here.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use rushmore_core::Money;
use rushmore_store::DEFAULT_ORDERS_FILE;

use crate::cli::Cli;

pub const ENV_SHOP_NAME: &str = "RUSHMORE_SHOP_NAME";
pub const ENV_ORDERS_FILE: &str = "RUSHMORE_ORDERS_FILE";
pub const ENV_LOG: &str = "RUSHMORE_LOG";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Shown in the banner and the goodbye line.
    /// Default: "RushMore Pizza"
    pub shop_name: String,

    /// Order log location.
    /// Default: `pizza_orders.json` in the working directory
    pub orders_file: PathBuf,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            shop_name: "RushMore Pizza".to_string(),
            orders_file: PathBuf::from(DEFAULT_ORDERS_FILE),
            currency_symbol: "$".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Defaults overridden by `RUSHMORE_*` environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ConsoleConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConsoleConfig::default();

        if let Some(name) = lookup(ENV_SHOP_NAME) {
            config.shop_name = non_blank(ENV_SHOP_NAME, name)?;
        }
        if let Some(path) = lookup(ENV_ORDERS_FILE) {
            config.orders_file = PathBuf::from(non_blank(ENV_ORDERS_FILE, path)?);
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = non_blank(ENV_LOG, filter)?;
        }

        Ok(config)
    }

    /// Applies command line flags on top.
    pub fn with_cli(mut self, cli: &Cli) -> ConfigResult<Self> {
        if let Some(path) = &cli.orders_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue("--orders-file".to_string()));
            }
            self.orders_file = path.clone();
        }
        if let Some(name) = &cli.shop_name {
            self.shop_name = non_blank("--shop-name", name.clone())?;
        }
        if let Some(filter) = &cli.log {
            self.log_filter = non_blank("--log", filter.clone())?;
        }
        Ok(self)
    }

    /// Formats money for display: `$16.45`, `-$5.50`.
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.cents() < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

fn non_blank(key: &str, value: String) -> ConfigResult<String> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(value)
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
