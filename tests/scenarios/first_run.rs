//! First run: no state file yet.

use std::path::Path;
use std::time::Duration;

use mobile_deploy_marker::application::{MarkDeploymentsUseCase, MarkOptions};
use mobile_deploy_marker::domain::ports::CatalogueRepository;
use mobile_deploy_marker::domain::value_objects::{EntityGuid, SinceClause};
use mobile_deploy_marker::infrastructure::{
    ChangeTrackingMarkerGateway, JsonCatalogueRepository, NerdGraphClient, NrdbQueryGateway,
    SystemClock,
};
use serde_json::json;
use tempfile::tempdir;

use crate::common::{an_hour_ago, version_row, FakeNerdGraph, TEST_API_KEY};

fn run(server: &FakeNerdGraph, state_file: &Path, options: &MarkOptions) {
    let client =
        || NerdGraphClient::with_endpoint(server.endpoint(), TEST_API_KEY, Duration::from_secs(5));
    MarkDeploymentsUseCase::new(
        NrdbQueryGateway::new(client(), 1),
        ChangeTrackingMarkerGateway::new(client()),
        JsonCatalogueRepository::new(state_file),
        SystemClock,
    )
    .execute(options)
    .expect("run should succeed");
}

fn options() -> MarkOptions {
    MarkOptions::new(
        SinceClause::new("3 months ago").unwrap(),
        SinceClause::new("24 hours ago").unwrap(),
    )
}

#[test]
fn scenario_first_run_creates_state_file() {
    let mut server = FakeNerdGraph::start();
    let apps = server.apps(&["GUID-A"]).expect(1).create();
    let versions = server.versions("GUID-A", Vec::new()).expect(1).create();
    let markers = server.any_marker().expect(0).create();
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("apps.json");

    run(&server, &state_file, &options());

    apps.assert();
    versions.assert();
    markers.assert();
    let catalogue = JsonCatalogueRepository::new(&state_file)
        .load()
        .unwrap()
        .expect("state file should exist");
    assert_eq!(catalogue.len(), 1);
    assert!(catalogue.get(&EntityGuid::from("GUID-A")).unwrap().is_empty());
}

#[test]
fn scenario_first_run_marks_recent_versions() {
    let mut server = FakeNerdGraph::start();
    let _apps = server.apps(&["GUID-A"]).create();
    let _versions = server
        .versions("GUID-A", vec![version_row("1.0", an_hour_ago())])
        .create();
    let marker = server
        .marker(json!({
            "entityGuid": "GUID-A",
            "version": "1.0",
            "deploymentType": "BASIC",
            "user": "nri-mark-deployment",
            "customAttributes": { "AppBuild": "1.0.0" }
        }))
        .expect(1)
        .create();
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("apps.json");

    run(&server, &state_file, &options());

    marker.assert();
    let content = std::fs::read_to_string(&state_file).unwrap();
    assert!(content.contains("\"1.0\""));
}

#[test]
fn scenario_first_run_discover_only_sends_no_markers() {
    let mut server = FakeNerdGraph::start();
    let _apps = server.apps(&["GUID-A"]).create();
    let _versions = server
        .versions("GUID-A", vec![version_row("1.0", an_hour_ago())])
        .create();
    let markers = server.any_marker().expect(0).create();
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("apps.json");

    run(&server, &state_file, &options().with_discover_only(true));

    markers.assert();
    let catalogue = JsonCatalogueRepository::new(&state_file)
        .load()
        .unwrap()
        .unwrap();
    assert!(catalogue
        .get(&EntityGuid::from("GUID-A"))
        .unwrap()
        .contains_version("1.0"));
}
