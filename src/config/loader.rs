//! Configuration loading and validation

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::value_objects::{CustomAttributes, Region, SinceClause};
use crate::error::ConfigError;

use super::types::{
    ApiKey, Config, ConfigOverrides, LogLevel, RawAttributes, DEFAULT_CUSTOM_ATTRIBUTES,
    DEFAULT_DISCOVER_APPS_SINCE, DEFAULT_DISCOVER_VERSIONS_SINCE, DEFAULT_STATE_FILE,
    DEFAULT_TIMEOUT_SECS,
};

pub const ENV_ACCOUNT_ID: &str = "NEW_RELIC_ACCOUNT_ID";
pub const ENV_API_KEY: &str = "NEW_RELIC_API_KEY";
pub const ENV_REGION: &str = "NEW_RELIC_REGION";
pub const ENV_STATE_FILE: &str = "MOBILE_MARKER_STATE_FILE";
pub const ENV_CUSTOM_ATTRIBUTES: &str = "MOBILE_MARKER_CUSTOM_ATTRIBUTES";
pub const ENV_LOG_LEVEL: &str = "MOBILE_MARKER_LOG_LEVEL";
pub const ENV_GRAPHQL_ENDPOINT: &str = "NEW_RELIC_GRAPHQL_ENDPOINT";

/// Non-fatal configuration warning (e.g. an unknown key in the config file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Resolve the effective configuration.
///
/// Precedence, highest first: `cli`, environment (through `env`), the
/// optional TOML `config_file`, built-in defaults.
pub fn load<F>(
    config_file: Option<&Path>,
    cli: ConfigOverrides,
    env: F,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (file_layer, warnings) = match config_file {
        Some(path) => load_file(path)?,
        None => (ConfigOverrides::default(), Vec::new()),
    };
    let env_layer = from_env(env)?;

    let merged = cli.over(env_layer.over(file_layer));
    Ok((Config::from_overrides(merged)?, warnings))
}

/// Load a TOML config file and collect unknown keys as warnings.
pub fn load_file(path: &Path) -> Result<(ConfigOverrides, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let overrides: ConfigOverrides = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((overrides, warnings))
}

/// Read the environment layer. Empty variables count as unset.
pub fn from_env<F>(env: F) -> Result<ConfigOverrides, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    let account_id = match var(ENV_ACCOUNT_ID) {
        Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
            key: ENV_ACCOUNT_ID,
            message: e.to_string(),
        })?),
        None => None,
    };

    let region = match var(ENV_REGION) {
        Some(raw) => Some(Region::parse(&raw).ok_or_else(|| ConfigError::Invalid {
            key: ENV_REGION,
            message: format!("'{}' is not one of: us, eu", raw),
        })?),
        None => None,
    };

    let log_level = match var(ENV_LOG_LEVEL) {
        Some(raw) => Some(LogLevel::parse(&raw).ok_or_else(|| ConfigError::Invalid {
            key: ENV_LOG_LEVEL,
            message: format!("'{}' is not one of: info, debug, warn, error", raw),
        })?),
        None => None,
    };

    Ok(ConfigOverrides {
        account_id,
        api_key: var(ENV_API_KEY),
        region,
        state_file: var(ENV_STATE_FILE).map(PathBuf::from),
        custom_attributes: var(ENV_CUSTOM_ATTRIBUTES).map(RawAttributes::Json),
        log_level,
        graphql_endpoint: var(ENV_GRAPHQL_ENDPOINT).map(|v| v.trim().to_string()),
        ..ConfigOverrides::default()
    })
}

impl Config {
    /// Apply defaults and validate a fully merged set of overrides.
    pub fn from_overrides(overrides: ConfigOverrides) -> Result<Config, ConfigError> {
        let api_key = overrides
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("apiKey"))?;

        let account_id = match overrides.account_id {
            None | Some(0) => return Err(ConfigError::Missing("accountId")),
            Some(id) => id,
        };

        let custom_attributes = match overrides.custom_attributes {
            None => CustomAttributes::parse(DEFAULT_CUSTOM_ATTRIBUTES)?,
            Some(RawAttributes::Json(raw)) => CustomAttributes::parse(&raw)?,
            Some(RawAttributes::Table(map)) => CustomAttributes::from(map),
        };

        let discover_apps_since = since_clause(
            "discoverAppsSince",
            overrides.discover_apps_since,
            DEFAULT_DISCOVER_APPS_SINCE,
        )?;
        let discover_versions_since = since_clause(
            "discoverVersionsSince",
            overrides.discover_versions_since,
            DEFAULT_DISCOVER_VERSIONS_SINCE,
        )?;

        let timeout_secs = overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "timeoutSecs",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Config {
            account_id,
            api_key: ApiKey::new(api_key.trim()),
            region: overrides.region.unwrap_or_default(),
            state_file: overrides
                .state_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE)),
            custom_attributes,
            discover_apps_since,
            discover_versions_since,
            discover_only: overrides.discover_only.unwrap_or(false),
            prune_inactive_apps: overrides.prune_inactive_apps.unwrap_or(false),
            log_level: overrides.log_level.unwrap_or_default(),
            request_timeout: Duration::from_secs(timeout_secs),
            graphql_endpoint: overrides
                .graphql_endpoint
                .filter(|endpoint| !endpoint.trim().is_empty()),
        })
    }
}

fn since_clause(
    key: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<SinceClause, ConfigError> {
    SinceClause::new(value.unwrap_or_else(|| default.to_string())).map_err(|e| {
        ConfigError::Invalid {
            key,
            message: e.to_string(),
        }
    })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "account_id",
        "api_key",
        "region",
        "state_file",
        "custom_attributes",
        "discover_apps_since",
        "discover_versions_since",
        "discover_only",
        "prune_inactive_apps",
        "log_level",
        "timeout_secs",
        "graphql_endpoint",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
