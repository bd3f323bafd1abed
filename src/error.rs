//! Error types for mobile-deploy-marker
//!
//! Each concern has its own `thiserror` enum; `DeployMarkerError` is the
//! crate-level error for everything that aborts a run.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StateError;
use crate::domain::services::DiscoveryError;
use crate::domain::value_objects::CustomAttributesError;

/// Result type alias for fatal operations
pub type DeployMarkerResult<T> = Result<T, DeployMarkerError>;

/// Errors that abort a run (process exits non-zero)
#[derive(Error, Debug)]
pub enum DeployMarkerError {
    /// Missing or invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A discovery query failed or returned an unusable result
    #[error("discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    /// The state file could not be loaded or saved
    #[error(transparent)]
    State(#[from] StateError),
}

/// Configuration errors, all reported before any remote call
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting has no value
    #[error("{0} is a required parameter")]
    Missing(&'static str),

    /// A setting has a value that cannot be used
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },

    /// Custom attributes are not a JSON object
    #[error("invalid customAttributes: {0}")]
    CustomAttributes(#[from] CustomAttributesError),

    /// The config file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for our schema
    #[error("invalid config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
