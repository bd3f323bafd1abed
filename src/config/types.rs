//! Configuration type definitions

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::domain::value_objects::{CustomAttributes, Region, SinceClause};

pub const DEFAULT_STATE_FILE: &str = "apps.json";
pub const DEFAULT_CUSTOM_ATTRIBUTES: &str = "{}";
pub const DEFAULT_DISCOVER_APPS_SINCE: &str = "3 months ago";
pub const DEFAULT_DISCOVER_VERSIONS_SINCE: &str = "24 hours ago";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// Case-insensitive lookup used for environment and config values
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LogLevel::parse(&raw).ok_or_else(|| {
            de::Error::custom(format!(
                "unknown log level `{raw}`, expected one of error, warn, info, debug"
            ))
        })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// A User API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Custom attributes as written by the user: a JSON string or, in the
/// config file, a TOML table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAttributes {
    Json(String),
    Table(Map<String, Value>),
}

/// One layer of settings. Every field is optional; layers are merged with
/// [`ConfigOverrides::over`] and validated once by [`Config::from_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub state_file: Option<PathBuf>,
    #[serde(default)]
    pub custom_attributes: Option<RawAttributes>,
    #[serde(default)]
    pub discover_apps_since: Option<String>,
    #[serde(default)]
    pub discover_versions_since: Option<String>,
    #[serde(default)]
    pub discover_only: Option<bool>,
    #[serde(default)]
    pub prune_inactive_apps: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub graphql_endpoint: Option<String>,
}

impl ConfigOverrides {
    /// Lay `self` over `lower`: values set in `self` win.
    pub fn over(self, lower: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            account_id: self.account_id.or(lower.account_id),
            api_key: self.api_key.or(lower.api_key),
            region: self.region.or(lower.region),
            state_file: self.state_file.or(lower.state_file),
            custom_attributes: self.custom_attributes.or(lower.custom_attributes),
            discover_apps_since: self.discover_apps_since.or(lower.discover_apps_since),
            discover_versions_since: self
                .discover_versions_since
                .or(lower.discover_versions_since),
            discover_only: self.discover_only.or(lower.discover_only),
            prune_inactive_apps: self.prune_inactive_apps.or(lower.prune_inactive_apps),
            log_level: self.log_level.or(lower.log_level),
            timeout_secs: self.timeout_secs.or(lower.timeout_secs),
            graphql_endpoint: self.graphql_endpoint.or(lower.graphql_endpoint),
        }
    }
}

/// Validated, immutable runtime configuration.
///
/// Built once at startup and passed by reference; there is no global state.
#[derive(Debug, Clone)]
pub struct Config {
    pub account_id: u64,
    pub api_key: ApiKey,
    pub region: Region,
    pub state_file: PathBuf,
    pub custom_attributes: CustomAttributes,
    pub discover_apps_since: SinceClause,
    pub discover_versions_since: SinceClause,
    pub discover_only: bool,
    pub prune_inactive_apps: bool,
    pub log_level: LogLevel,
    pub request_timeout: Duration,
    /// Replaces the region's NerdGraph URL when set
    pub graphql_endpoint: Option<String>,
}
