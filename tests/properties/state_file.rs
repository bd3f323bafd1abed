//! Property tests for the JSON state file.

use proptest::prelude::*;
use tempfile::tempdir;

use mobile_deploy_marker::domain::entities::{Application, Catalogue, VersionRecord};
use mobile_deploy_marker::domain::ports::CatalogueRepository;
use mobile_deploy_marker::domain::value_objects::{EntityGuid, EpochMillis};
use mobile_deploy_marker::infrastructure::JsonCatalogueRepository;

fn guid() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9+/=]{4,24}").unwrap()
}

fn version() -> impl Strategy<Value = (String, String, i64, String, i64, i64)> {
    (
        proptest::string::string_regex("[0-9]{1,3}(\\.[0-9]{1,3}){0,2}").unwrap(),
        proptest::string::string_regex("[A-Za-z0-9 ._-]{0,12}").unwrap(),
        any::<i64>(),
        "\\PC{0,16}",
        any::<i64>(),
        0i64..=4_102_444_800_000,
    )
}

fn catalogue() -> impl Strategy<Value = Catalogue> {
    proptest::collection::btree_map(guid(), proptest::collection::vec(version(), 0..5), 0..5)
        .prop_map(|apps| {
            apps.into_iter()
                .map(|(guid, versions)| {
                    let records = versions.into_iter().map(
                        |(label, build, app_id, name, version_id, timestamp)| VersionRecord {
                            app_version: label,
                            app_build: build,
                            app_id,
                            app_name: name,
                            app_version_id: version_id,
                            entity_guid: EntityGuid::from(guid.as_str()),
                            timestamp: EpochMillis::new(timestamp),
                        },
                    );
                    Application::with_versions(guid.as_str(), records)
                })
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `save(load(save(C)))` reproduces C and the same bytes.
    #[test]
    fn property_state_file_round_trips(catalogue in catalogue()) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("apps.json");
        let repo = JsonCatalogueRepository::new(&path);

        repo.save(&catalogue).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        let loaded = repo.load().unwrap().unwrap();
        repo.save(&loaded).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        prop_assert_eq!(loaded, catalogue);
        prop_assert_eq!(first, second);
    }
}
