//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Every setting can also come from the environment or a `--config` file;
//!   flags only override what they set
//! - camelCase aliases keep existing automation working

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigOverrides, LogLevel, RawAttributes};
use crate::domain::value_objects::Region;

/// Discover mobile app releases in New Relic and record deployment markers
#[derive(Parser, Debug)]
#[command(name = "mobile-deploy-marker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// New Relic account id
    #[arg(long, alias = "accountId", value_name = "ID")]
    pub account_id: Option<u64>,

    /// New Relic User API key
    #[arg(long, alias = "apiKey", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Path of the persisted app/version catalogue [default: apps.json]
    #[arg(long, alias = "appConfigFile", value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// JSON object attached to every marker [default: {}]
    #[arg(long, alias = "customAttributes", value_name = "JSON")]
    pub custom_attributes: Option<String>,

    /// NRQL SINCE clause for application discovery [default: "3 months ago"]
    #[arg(long, alias = "discoverAppsSince", value_name = "SINCE")]
    pub discover_apps_since: Option<String>,

    /// NRQL SINCE clause for version discovery [default: "24 hours ago"]
    #[arg(long, alias = "discoverVersionsSince", value_name = "SINCE")]
    pub discover_versions_since: Option<String>,

    /// Record new versions without creating markers
    #[arg(long, alias = "discoverOnly")]
    pub discover_only: bool,

    /// Create markers even if the environment or config file sets discover-only
    #[arg(long, conflicts_with = "discover_only")]
    pub no_discover_only: bool,

    /// Drop applications that stopped reporting
    #[arg(long)]
    pub prune_inactive_apps: bool,

    /// Keep every saved application, overriding the config file
    #[arg(long, conflicts_with = "prune_inactive_apps")]
    pub no_prune_inactive_apps: bool,

    /// Log verbosity [default: info]
    #[arg(long, alias = "logLevel", value_enum, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    /// New Relic data center [default: us]
    #[arg(long, value_enum, ignore_case = true)]
    pub region: Option<Region>,

    /// Timeout for each API call, in seconds [default: 60]
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// NerdGraph URL replacing the region's
    #[arg(long, value_name = "URL", hide = true)]
    pub graphql_endpoint: Option<String>,

    /// TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The flag layer of the configuration. Unset flags stay `None`.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            account_id: self.account_id,
            api_key: self.api_key.clone(),
            region: self.region,
            state_file: self.state_file.clone(),
            custom_attributes: self.custom_attributes.clone().map(RawAttributes::Json),
            discover_apps_since: self.discover_apps_since.clone(),
            discover_versions_since: self.discover_versions_since.clone(),
            discover_only: switch(self.discover_only, self.no_discover_only),
            prune_inactive_apps: switch(self.prune_inactive_apps, self.no_prune_inactive_apps),
            log_level: self.log_level,
            timeout_secs: self.timeout_secs,
            graphql_endpoint: self.graphql_endpoint.clone(),
        }
    }
}

/// A `--flag` / `--no-flag` pair as one optional override
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
