//! Mark Options

use crate::config::Config;
use crate::domain::value_objects::{CustomAttributes, SinceClause};

/// Options for the mark use case
#[derive(Debug, Clone)]
pub struct MarkOptions {
    /// Window for application discovery
    pub discover_apps_since: SinceClause,
    /// Window for version discovery
    pub discover_versions_since: SinceClause,
    /// Record new versions without submitting markers
    pub discover_only: bool,
    /// Drop applications that no longer report
    pub prune_inactive_apps: bool,
    /// Attributes attached to every marker
    pub custom_attributes: CustomAttributes,
}

impl MarkOptions {
    pub fn new(discover_apps_since: SinceClause, discover_versions_since: SinceClause) -> Self {
        Self {
            discover_apps_since,
            discover_versions_since,
            discover_only: false,
            prune_inactive_apps: false,
            custom_attributes: CustomAttributes::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.discover_apps_since.clone(),
            config.discover_versions_since.clone(),
        )
        .with_discover_only(config.discover_only)
        .with_prune_inactive_apps(config.prune_inactive_apps)
        .with_custom_attributes(config.custom_attributes.clone())
    }

    pub fn with_discover_only(mut self, discover_only: bool) -> Self {
        self.discover_only = discover_only;
        self
    }

    pub fn with_prune_inactive_apps(mut self, prune: bool) -> Self {
        self.prune_inactive_apps = prune;
        self
    }

    pub fn with_custom_attributes(mut self, attributes: CustomAttributes) -> Self {
        self.custom_attributes = attributes;
        self
    }
}
