//! Runtime settings.
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file
//! (`config/tally.toml` or `--config`), `TALLY_*` environment variables, and
//! finally command line flags.

use serde::Deserialize;

use crate::{cli::Cli, error::Result};

const DEFAULT_CONFIG_PATH: &str = "config/tally.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// sea-orm connection string, e.g. `sqlite:./tally.db?mode=rwc`.
    pub database_url: String,
    /// Level for the `tally` and `engine` tracing targets.
    pub log_level: String,
    /// Symbol printed in front of amounts.
    pub currency: String,
    /// Colour budget status lines.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./tally.db?mode=rwc".to_string(),
            log_level: "warn".to_string(),
            currency: "₹".to_string(),
            color: true,
        }
    }
}

pub fn load(cli: &Cli) -> Result<Settings> {
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    // An explicit --config must exist; the default location is optional.
    let required = cli.config.is_some();

    let mut settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(required))
        .add_source(config::Environment::with_prefix("TALLY").try_parsing(true))
        .build()?
        .try_deserialize()?;

    if let Some(database_url) = &cli.database_url {
        settings.database_url = database_url.clone();
    }
    if let Some(currency) = &cli.currency {
        settings.currency = currency.clone();
    }
    if let Some(log_level) = &cli.log_level {
        settings.log_level = log_level.clone();
    }
    if cli.no_color {
        settings.color = false;
    }

    Ok(settings)
}
