//! NerdGraph stand-in built on a mockito server.
//!
//! Mocks are routed on the GraphQL request body: application discovery,
//! version discovery for one entity GUID, or marker creation for one
//! version. Keep every returned `Mock` bound until the run under test has
//! finished.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};

/// API key every scenario authenticates with
pub const TEST_API_KEY: &str = "NRAK-TEST";

/// Handle to a running mock server
pub struct FakeNerdGraph {
    server: ServerGuard,
}

impl FakeNerdGraph {
    pub fn start() -> Self {
        Self {
            server: Server::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/graphql", self.server.url())
    }

    /// Application discovery answering with `guids`
    pub fn apps(&mut self, guids: &[&str]) -> Mock {
        let results = if guids.is_empty() {
            Vec::new()
        } else {
            vec![json!({ "uniques.entityGuid": guids })]
        };
        self.graphql(Matcher::Regex(r"uniques\(entityGuid\)".to_string()))
            .with_body(nrql_results(results))
    }

    /// Version discovery for `guid` answering with `rows`
    pub fn versions(&mut self, guid: &str, rows: Vec<Value>) -> Mock {
        self.graphql(Matcher::Regex(format!("entityGuid = '{}'", guid)))
            .with_body(nrql_results(rows))
    }

    /// Marker creation accepted for any deployment input containing `deployment`
    pub fn marker(&mut self, deployment: Value) -> Mock {
        let reply = json!({
            "data": { "changeTrackingCreateDeployment": {
                "deploymentId": format!("dep-{}", deployment["version"].as_str().unwrap_or_default()),
                "entityGuid": deployment["entityGuid"],
                "version": deployment["version"],
            } }
        });
        self.graphql(deployment_matcher(deployment))
            .with_body(reply.to_string())
    }

    /// Marker creation accepted for `version` of `guid`
    pub fn accept_marker(&mut self, guid: &str, version: &str) -> Mock {
        self.marker(json!({ "entityGuid": guid, "version": version }))
    }

    /// Marker creation for `version` of `guid` answered with a GraphQL error
    pub fn reject_marker(&mut self, guid: &str, version: &str) -> Mock {
        let reply = json!({
            "data": { "changeTrackingCreateDeployment": null },
            "errors": [{ "message": format!("version {} rejected", version) }]
        });
        self.graphql(deployment_matcher(json!({ "entityGuid": guid, "version": version })))
            .with_body(reply.to_string())
    }

    /// Any marker creation. Use with `expect(0)` when no marker may be sent.
    pub fn any_marker(&mut self) -> Mock {
        self.graphql(Matcher::Regex("changeTrackingCreateDeployment".to_string()))
            .with_body(json!({ "data": { "changeTrackingCreateDeployment": {} } }).to_string())
    }

    fn graphql(&mut self, body: Matcher) -> Mock {
        self.server
            .mock("POST", "/graphql")
            .match_header("API-Key", TEST_API_KEY)
            .match_body(body)
            .with_status(200)
            .with_header("content-type", "application/json")
    }
}

fn deployment_matcher(deployment: Value) -> Matcher {
    Matcher::PartialJson(json!({ "variables": { "deployment": deployment } }))
}

fn nrql_results(results: Vec<Value>) -> String {
    json!({ "data": { "actor": { "account": { "nrql": { "results": results } } } } }).to_string()
}

/// One version-discovery row as NRQL returns it
pub fn version_row(label: &str, timestamp: i64) -> Value {
    json!({
        "appVersion": label,
        "latest.appBuild": format!("{}.0", label),
        "latest.appName": "Shop",
        "latest.appId": 7,
        "latest.appVersionId": 70,
        "latest.timestamp": timestamp,
    })
}

/// Milliseconds since the epoch, one hour ago
pub fn an_hour_ago() -> i64 {
    chrono::Utc::now().timestamp_millis() - 60 * 60 * 1000
}
