//! Deployment marker gateway backed by the NerdGraph change-tracking API

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::client::{GraphQlExecutor, NerdGraphClient, NerdGraphError};
use crate::domain::entities::DeploymentEvent;
use crate::domain::ports::marker_gateway::{
    DataHandlingRules, DeploymentReceipt, MarkerGateway, SubmitError,
};
use crate::domain::value_objects::EntityGuid;

const CREATE_DEPLOYMENT_DOCUMENT: &str = "mutation($deployment: ChangeTrackingDeploymentInput!, $dataHandlingRules: ChangeTrackingDataHandlingRules) { changeTrackingCreateDeployment(deployment: $deployment, dataHandlingRules: $dataHandlingRules) { deploymentId entityGuid timestamp version } }";

impl From<NerdGraphError> for SubmitError {
    fn from(err: NerdGraphError) -> Self {
        match err {
            NerdGraphError::Transport(message) => SubmitError::Transport(message),
            NerdGraphError::Status { .. } | NerdGraphError::GraphQl(_) => {
                SubmitError::Rejected(err.to_string())
            }
            NerdGraphError::Decode(_) | NerdGraphError::MissingData => {
                SubmitError::InvalidResponse(err.to_string())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedDeployment {
    #[serde(default)]
    deployment_id: Option<String>,
    #[serde(default)]
    entity_guid: Option<String>,
}

/// Submits deployment markers
pub struct ChangeTrackingMarkerGateway<E: GraphQlExecutor = NerdGraphClient> {
    executor: E,
}

impl<E: GraphQlExecutor> ChangeTrackingMarkerGateway<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

fn deployment_input(event: &DeploymentEvent) -> Value {
    let mut input = Map::new();
    input.insert("version".into(), event.version.clone().into());
    input.insert("entityGuid".into(), event.entity_guid.as_str().into());
    input.insert("deploymentType".into(), event.deployment_type.as_str().into());
    input.insert("description".into(), event.description.clone().into());
    input.insert("user".into(), event.user.clone().into());
    input.insert("groupId".into(), event.group_id.clone().into());
    input.insert("timestamp".into(), event.timestamp.as_i64().into());
    if !event.custom_attributes.is_empty() {
        input.insert(
            "customAttributes".into(),
            Value::Object(event.custom_attributes.as_map().clone()),
        );
    }
    Value::Object(input)
}

fn rules_input(rules: &DataHandlingRules) -> Value {
    let flags: Vec<&str> = rules.validation_flags.iter().map(|f| f.as_str()).collect();
    json!({ "validationFlags": flags })
}

impl<E: GraphQlExecutor> MarkerGateway for ChangeTrackingMarkerGateway<E> {
    fn create_deployment(
        &self,
        event: &DeploymentEvent,
        rules: &DataHandlingRules,
    ) -> Result<DeploymentReceipt, SubmitError> {
        tracing::debug!(
            entity_guid = %event.entity_guid,
            version = %event.version,
            "creating deployment marker"
        );

        let data = self.executor.execute(
            CREATE_DEPLOYMENT_DOCUMENT,
            json!({
                "deployment": deployment_input(event),
                "dataHandlingRules": rules_input(rules),
            }),
        )?;

        let created = match data.get("changeTrackingCreateDeployment") {
            Some(Value::Null) | None => {
                return Err(SubmitError::InvalidResponse(
                    "missing changeTrackingCreateDeployment".to_string(),
                ))
            }
            Some(created) => CreatedDeployment::deserialize(created)
                .map_err(|e| SubmitError::InvalidResponse(e.to_string()))?,
        };

        Ok(DeploymentReceipt {
            entity_guid: created
                .entity_guid
                .map(EntityGuid::new)
                .unwrap_or_else(|| event.entity_guid.clone()),
            deployment_id: created.deployment_id,
        })
    }
}
