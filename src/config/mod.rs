//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NEW_RELIC_*, MOBILE_MARKER_*)
//! 3. TOML config file passed with `--config`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    from_env, load, load_file, ConfigWarning, ENV_ACCOUNT_ID, ENV_API_KEY,
    ENV_CUSTOM_ATTRIBUTES, ENV_GRAPHQL_ENDPOINT, ENV_LOG_LEVEL, ENV_REGION, ENV_STATE_FILE,
};
pub use types::{
    ApiKey, Config, ConfigOverrides, LogLevel, RawAttributes, DEFAULT_CUSTOM_ATTRIBUTES,
    DEFAULT_DISCOVER_APPS_SINCE, DEFAULT_DISCOVER_VERSIONS_SINCE, DEFAULT_STATE_FILE,
    DEFAULT_TIMEOUT_SECS,
};
