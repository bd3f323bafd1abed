//! MarkerGateway port - submit a deployment marker

use crate::domain::entities::DeploymentEvent;
use crate::domain::value_objects::EntityGuid;

/// Validation the backend should apply before accepting a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFlag {
    /// Reject the marker instead of truncating over-long fields
    FailOnFieldLength,
}

impl ValidationFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationFlag::FailOnFieldLength => "FAIL_ON_FIELD_LENGTH",
        }
    }
}

/// Data handling rules sent alongside a marker
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataHandlingRules {
    pub validation_flags: Vec<ValidationFlag>,
}

impl DataHandlingRules {
    /// Rules used for every marker: fail on field-length violations
    pub fn strict() -> Self {
        Self {
            validation_flags: vec![ValidationFlag::FailOnFieldLength],
        }
    }
}

/// What the backend returned for an accepted marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReceipt {
    /// Entity the backend attached the marker to
    pub entity_guid: EntityGuid,
    pub deployment_id: Option<String>,
}

/// Marker submission errors. Scoped to a single marker; never fatal.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("marker transport failed: {0}")]
    Transport(String),

    #[error("marker rejected by backend: {0}")]
    Rejected(String),

    #[error("unexpected marker response: {0}")]
    InvalidResponse(String),
}

/// Abstract deployment marker service
pub trait MarkerGateway {
    fn create_deployment(
        &self,
        event: &DeploymentEvent,
        rules: &DataHandlingRules,
    ) -> Result<DeploymentReceipt, SubmitError>;
}
