//! DeploymentEvent entity - a marker ready to be submitted

use crate::domain::value_objects::{CustomAttributes, EntityGuid, EpochMillis};

/// Deployment strategy reported with the marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentType {
    #[default]
    Basic,
}

impl DeploymentType {
    /// Wire name used by the change-tracking API
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::Basic => "BASIC",
        }
    }
}

/// A deployment marker for one version of one application.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentEvent {
    pub version: String,
    pub entity_guid: EntityGuid,
    pub deployment_type: DeploymentType,
    pub description: String,
    pub user: String,
    pub group_id: String,
    pub timestamp: EpochMillis,
    pub custom_attributes: CustomAttributes,
}
