//! Mark Result
//!
//! Summary of one run, printed with `--json`.

use serde::Serialize;

/// A marker the backend did not accept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkFailure {
    pub entity_guid: String,
    pub version: String,
    pub error: String,
}

/// Result of a mark run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkReport {
    /// Applications in the saved catalogue
    pub applications: usize,
    /// Applications added by this run's discovery
    pub new_applications: Vec<String>,
    /// Applications removed as inactive
    pub pruned_applications: Vec<String>,
    /// Versions returned by version discovery, across all applications
    pub versions_discovered: usize,
    /// Versions not seen before this run
    pub new_versions: usize,
    pub markers_created: usize,
    pub markers_failed: Vec<MarkFailure>,
    pub discover_only: bool,
}

impl MarkReport {
    pub fn new(discover_only: bool) -> Self {
        Self {
            discover_only,
            ..Self::default()
        }
    }
}
