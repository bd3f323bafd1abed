//! VersionRecord entity - one observed release of a mobile application

use crate::domain::value_objects::{EntityGuid, EpochMillis};

/// The latest observation of one version label of one application.
///
/// A record is replaced wholesale when the same label is observed again;
/// it is never edited field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// Version label, unique within its application (e.g. "1.2.3")
    pub app_version: String,
    /// Build identifier reported by the agent
    pub app_build: String,
    /// Numeric application id
    pub app_id: i64,
    /// Human readable application name
    pub app_name: String,
    /// Numeric version id
    pub app_version_id: i64,
    /// Entity the version belongs to
    pub entity_guid: EntityGuid,
    /// When the version was last observed
    pub timestamp: EpochMillis,
}

impl VersionRecord {
    pub fn label(&self) -> &str {
        &self.app_version
    }
}
