//! NerdGraph HTTP client
//!
//! Posts GraphQL documents to the regional NerdGraph endpoint and unwraps
//! the `{ data, errors }` envelope.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::value_objects::Region;

const USER_AGENT: &str = concat!("mobile-deploy-marker/", env!("CARGO_PKG_VERSION"));

/// Errors from a single GraphQL round trip
#[derive(Debug, thiserror::Error)]
pub enum NerdGraphError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("cannot decode response: {0}")]
    Decode(String),

    #[error("response carries no data")]
    MissingData,
}

/// Something that can execute a GraphQL document
pub trait GraphQlExecutor {
    /// Execute `document` with `variables`, returning the `data` member.
    fn execute(&self, document: &str, variables: Value) -> Result<Value, NerdGraphError>;
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    #[serde(default)]
    message: String,
}

/// Unwrap a GraphQL response body.
///
/// Any entry in `errors` fails the call, even when partial data is present.
pub fn parse_envelope(body: &str) -> Result<Value, NerdGraphError> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(|e| NerdGraphError::Decode(e.to_string()))?;

    if !response.errors.is_empty() {
        return Err(NerdGraphError::GraphQl(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    match response.data {
        Some(Value::Null) | None => Err(NerdGraphError::MissingData),
        Some(data) => Ok(data),
    }
}

/// Blocking NerdGraph client authenticated with a user API key
pub struct NerdGraphClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl NerdGraphClient {
    pub fn new(region: Region, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self::with_endpoint(region.graphql_endpoint(), api_key, timeout)
    }

    /// Point the client at an arbitrary endpoint
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for NerdGraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NerdGraphClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GraphQlExecutor for NerdGraphClient {
    fn execute(&self, document: &str, variables: Value) -> Result<Value, NerdGraphError> {
        let body = json!({ "query": document, "variables": variables });
        tracing::debug!(endpoint = %self.endpoint, "posting GraphQL request");

        let response = match self
            .agent
            .post(&self.endpoint)
            .set("API-Key", &self.api_key)
            .send_json(body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(NerdGraphError::Status { status, body });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(NerdGraphError::Transport(err.to_string()));
            }
        };

        let text = response
            .into_string()
            .map_err(|e| NerdGraphError::Transport(e.to_string()))?;
        parse_envelope(&text)
    }
}
