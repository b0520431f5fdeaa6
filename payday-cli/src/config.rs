//! Runtime configuration
//!
//! Read from the environment, then overridden by command-line flags:
//!
//! | Variable             | Flag               | Default |
//! |----------------------|--------------------|---------|
//! | `PAYDAY_SAMPLE_DATA` | `--no-sample-data` | `true`  |
//! | `PAYDAY_CURRENCY`    | `--currency`       | `$`     |
//! | `PAYDAY_LOG`         | `--log-level`      | `warn`  |

use std::env;

use crate::logging::DEFAULT_FILTER;

pub const ENV_SAMPLE_DATA: &str = "PAYDAY_SAMPLE_DATA";
pub const ENV_CURRENCY: &str = "PAYDAY_CURRENCY";
pub const ENV_LOG: &str = "PAYDAY_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed the ledger with demo accounts at startup
    pub sample_data: bool,
    /// Symbol printed before every amount
    pub currency: String,
    /// tracing filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_data: true,
            currency: "$".to_string(),
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let sample_data = lookup(ENV_SAMPLE_DATA)
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.sample_data);
        let currency = lookup(ENV_CURRENCY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.currency);
        let log_filter = lookup(ENV_LOG)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            sample_data,
            currency,
            log_filter,
        }
    }

    /// Apply command-line flags on top of the loaded values
    pub fn with_overrides(
        mut self,
        no_sample_data: bool,
        currency: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        if no_sample_data {
            self.sample_data = false;
        }
        if let Some(currency) = currency {
            self.currency = currency;
        }
        if let Some(level) = log_level {
            self.log_filter = level;
        }
        self
    }
}

/// Parse a boolean environment value; unknown values yield None
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
