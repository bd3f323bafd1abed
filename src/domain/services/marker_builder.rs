//! Marker Builder Domain Service
//!
//! Turns a newly discovered [`VersionRecord`] into the [`DeploymentEvent`]
//! that gets submitted, including stale-timestamp normalization.

use chrono::{DateTime, Utc};

use crate::domain::entities::{DeploymentEvent, DeploymentType, VersionRecord};
use crate::domain::value_objects::{CustomAttributes, NormalizedTimestamp};

/// Description attached to every marker
pub const MARKER_DESCRIPTION: &str = "Automated deployment marker";
/// Actor recorded as the marker's user
pub const MARKER_USER: &str = "nri-mark-deployment";
/// Grouping key shared by all markers
pub const MARKER_GROUP_ID: &str = "deployment";

/// A marker ready for submission plus how its timestamp was chosen
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedMarker {
    pub event: DeploymentEvent,
    pub timestamp: NormalizedTimestamp,
}

/// Builds deployment events from version records
#[derive(Debug, Clone)]
pub struct MarkerBuilder<'a> {
    custom_attributes: &'a CustomAttributes,
}

impl<'a> MarkerBuilder<'a> {
    pub fn new(custom_attributes: &'a CustomAttributes) -> Self {
        Self { custom_attributes }
    }

    /// Build the marker for `record`, using `now` for stale timestamps.
    ///
    /// The record's build, name and ids are added to the user's custom
    /// attributes and take precedence over same-named user keys.
    pub fn build(&self, record: &VersionRecord, now: DateTime<Utc>) -> PreparedMarker {
        let mut attributes = self.custom_attributes.clone();
        attributes.insert("AppBuild", record.app_build.clone());
        attributes.insert("AppName", record.app_name.clone());
        attributes.insert("AppId", record.app_id);
        attributes.insert("AppVersionId", record.app_version_id);

        let timestamp = record.timestamp.normalize(now);

        PreparedMarker {
            event: DeploymentEvent {
                version: record.app_version.clone(),
                entity_guid: record.entity_guid.clone(),
                deployment_type: DeploymentType::Basic,
                description: MARKER_DESCRIPTION.to_string(),
                user: MARKER_USER.to_string(),
                group_id: MARKER_GROUP_ID.to_string(),
                timestamp: timestamp.value(),
                custom_attributes: attributes,
            },
            timestamp,
        }
    }
}
