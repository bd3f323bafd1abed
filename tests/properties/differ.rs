//! Property tests for version deltas and merging.

use std::collections::BTreeSet;

use proptest::prelude::*;

use mobile_deploy_marker::domain::entities::{Application, VersionRecord};
use mobile_deploy_marker::domain::services::Differ;
use mobile_deploy_marker::domain::value_objects::{EntityGuid, EpochMillis};

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,2}\\.[0-9]{1,2}").unwrap()
}

fn record(label: &str, build: u32) -> VersionRecord {
    VersionRecord {
        app_version: label.to_string(),
        app_build: build.to_string(),
        app_id: 1,
        app_name: "Shop".to_string(),
        app_version_id: 2,
        entity_guid: EntityGuid::from("GUID-A"),
        timestamp: EpochMillis::new(1_700_000_000_000),
    }
}

fn application(labels: &BTreeSet<String>, build: u32) -> Application {
    Application::with_versions("GUID-A", labels.iter().map(|l| record(l, build)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the delta holds exactly the fresh labels the stored app lacks.
    #[test]
    fn property_diff_is_exact_set_difference(
        stored in proptest::collection::btree_set(label(), 0..12),
        fresh in proptest::collection::btree_set(label(), 0..12),
    ) {
        let delta = Differ::new().diff(&application(&stored, 1), &application(&fresh, 2));

        let got: BTreeSet<String> = delta.labels().map(String::from).collect();
        let expected: BTreeSet<String> = fresh.difference(&stored).cloned().collect();
        prop_assert_eq!(got, expected);
    }

    /// PROPERTY: merging the same delta twice changes nothing the second time.
    #[test]
    fn property_merge_is_idempotent(
        stored in proptest::collection::btree_set(label(), 0..12),
        fresh in proptest::collection::btree_set(label(), 0..12),
    ) {
        let mut app = application(&stored, 1);
        let delta = Differ::new().diff(&app, &application(&fresh, 2));

        app.merge(&delta);
        let once = app.clone();
        app.merge(&delta);

        prop_assert_eq!(app, once);
    }

    /// PROPERTY: after merging its delta, diffing again yields nothing.
    #[test]
    fn property_merged_delta_leaves_nothing_new(
        stored in proptest::collection::btree_set(label(), 0..12),
        fresh in proptest::collection::btree_set(label(), 0..12),
    ) {
        let fresh_app = application(&fresh, 2);
        let mut app = application(&stored, 1);
        let delta = Differ::new().diff(&app, &fresh_app);
        app.merge(&delta);

        prop_assert!(Differ::new().diff(&app, &fresh_app).is_empty());
    }
}
