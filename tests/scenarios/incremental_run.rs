//! Later runs against an existing state file.

use std::path::Path;
use std::time::Duration;

use mobile_deploy_marker::application::{MarkDeploymentsUseCase, MarkOptions, MarkReport};
use mobile_deploy_marker::domain::ports::CatalogueRepository;
use mobile_deploy_marker::domain::value_objects::{EntityGuid, SinceClause};
use mobile_deploy_marker::infrastructure::{
    ChangeTrackingMarkerGateway, JsonCatalogueRepository, NerdGraphClient, NrdbQueryGateway,
    SystemClock,
};
use tempfile::tempdir;

use crate::common::{an_hour_ago, version_row, FakeNerdGraph, EXISTING_STATE, TEST_API_KEY};

fn run(server: &FakeNerdGraph, state_file: &Path) -> MarkReport {
    let client =
        || NerdGraphClient::with_endpoint(server.endpoint(), TEST_API_KEY, Duration::from_secs(5));
    MarkDeploymentsUseCase::new(
        NrdbQueryGateway::new(client(), 1),
        ChangeTrackingMarkerGateway::new(client()),
        JsonCatalogueRepository::new(state_file),
        SystemClock,
    )
    .execute(&MarkOptions::new(
        SinceClause::new("3 months ago").unwrap(),
        SinceClause::new("24 hours ago").unwrap(),
    ))
    .expect("run should succeed")
}

fn versions_of(state_file: &Path, guid: &str) -> Vec<String> {
    JsonCatalogueRepository::new(state_file)
        .load()
        .unwrap()
        .unwrap()
        .get(&EntityGuid::from(guid))
        .unwrap()
        .labels()
        .map(String::from)
        .collect()
}

#[test]
fn scenario_only_new_version_is_marked() {
    let mut server = FakeNerdGraph::start();
    let _apps = server.apps(&["GUID-A"]).create();
    let _versions = server
        .versions(
            "GUID-A",
            vec![version_row("1.0", an_hour_ago()), version_row("1.1", an_hour_ago())],
        )
        .create();
    let marker = server.accept_marker("GUID-A", "1.1").expect(1).create();
    let known = server.accept_marker("GUID-A", "1.0").expect(0).create();
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("apps.json");
    std::fs::write(&state_file, EXISTING_STATE).unwrap();

    let report = run(&server, &state_file);

    marker.assert();
    known.assert();
    assert_eq!(report.markers_created, 1);
    assert_eq!(versions_of(&state_file, "GUID-A"), vec!["1.0", "1.1"]);
}

#[test]
fn scenario_rejected_marker_is_retried_next_run() {
    let mut server = FakeNerdGraph::start();
    let _apps = server.apps(&["GUID-A"]).create();
    let _versions = server
        .versions(
            "GUID-A",
            vec![version_row("2.0", an_hour_ago()), version_row("2.1", an_hour_ago())],
        )
        .create();
    let rejected = server.reject_marker("GUID-A", "2.0").expect(2).create();
    let accepted = server.accept_marker("GUID-A", "2.1").expect(1).create();
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("apps.json");
    std::fs::write(&state_file, EXISTING_STATE).unwrap();

    let first = run(&server, &state_file);

    assert_eq!(first.markers_created, 1);
    assert_eq!(first.markers_failed.len(), 1);
    assert_eq!(first.markers_failed[0].version, "2.0");
    assert_eq!(versions_of(&state_file, "GUID-A"), vec!["1.0", "2.1"]);

    let second = run(&server, &state_file);

    assert_eq!(second.new_versions, 1);
    assert_eq!(second.markers_created, 0);
    assert_eq!(second.markers_failed.len(), 1);
    rejected.assert();
    accepted.assert();
}

#[test]
fn scenario_repeated_run_is_idempotent() {
    let mut server = FakeNerdGraph::start();
    let apps = server.apps(&["GUID-A", "GUID-B"]).expect(2).create();
    let _versions_a = server.versions("GUID-A", Vec::new()).create();
    let _versions_b = server
        .versions("GUID-B", vec![version_row("5.0", an_hour_ago())])
        .create();
    let marker = server.accept_marker("GUID-B", "5.0").expect(1).create();
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("apps.json");
    std::fs::write(&state_file, EXISTING_STATE).unwrap();

    run(&server, &state_file);
    let after_first = std::fs::read_to_string(&state_file).unwrap();
    run(&server, &state_file);
    let after_second = std::fs::read_to_string(&state_file).unwrap();

    apps.assert();
    marker.assert();
    assert_eq!(after_first, after_second);
    assert_eq!(versions_of(&state_file, "GUID-B"), vec!["5.0"]);
}
