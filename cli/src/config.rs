//! Converter configuration.
//!
//! Values are layered: built-in defaults, then `CURCONV_*` environment
//! variables, then command-line flags.

use std::path::PathBuf;

use curconv_common::Currency;
use curconv_fx::PathStrategy;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Main converter configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Pairs file, or `-` for standard input.
    pub pairs_file: Option<PathBuf>,
    /// Currency to convert from.
    pub from: Option<String>,
    /// Currency to convert to.
    pub to: Option<String>,
    /// Path selection strategy.
    pub strategy: PathStrategy,
    /// Output format.
    pub format: OutputFormat,
    /// Print each hop and raise the default log level.
    pub verbose: bool,
    /// Emit logs as JSON.
    pub log_json: bool,
}

/// A fully specified conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub pairs_file: PathBuf,
    pub from: Currency,
    pub to: Currency,
}

impl Query {
    /// Check whether pairs come from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.pairs_file.as_os_str() == STDIN_PATH
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("CURCONV_FILE") {
            config.pairs_file = Some(PathBuf::from(path));
        }

        if let Some(strategy) = lookup("CURCONV_STRATEGY") {
            config.strategy = strategy
                .parse()
                .map_err(|e| CliError::Config(format!("CURCONV_STRATEGY: {}", e)))?;
        }

        if let Some(format) = lookup("CURCONV_FORMAT") {
            config.format = format
                .parse()
                .map_err(|e| CliError::Config(format!("CURCONV_FORMAT: {}", e)))?;
        }

        Ok(config)
    }

    /// Check that everything needed for a conversion is present.
    pub fn query(&self) -> Result<Query, CliError> {
        let from = required_currency(&self.from, "the currency to convert from")?;
        let to = required_currency(&self.to, "the currency to convert to")?;
        let pairs_file = self
            .pairs_file
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(CliError::MissingArgument(
                "a currency pairs file (--file or CURCONV_FILE)",
            ))?;

        Ok(Query {
            pairs_file,
            from,
            to,
        })
    }
}

fn required_currency(value: &Option<String>, what: &'static str) -> Result<Currency, CliError> {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .ok_or(CliError::MissingArgument(what))
}
