//! mobile-deploy-marker - deployment markers for mobile app releases
//!
//! Discovers mobile applications and their versions from New Relic Mobile
//! telemetry, creates a change-tracking deployment marker for every version
//! not seen before, and keeps the catalogue of known versions in a local
//! JSON file so repeated runs never mark the same version twice.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{MarkDeploymentsUseCase, MarkOptions, MarkReport};
pub use config::{Config, ConfigOverrides, LogLevel};
pub use error::{ConfigError, DeployMarkerError, DeployMarkerResult};
