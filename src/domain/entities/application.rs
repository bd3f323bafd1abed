//! Application entity - a mobile app and the versions known for it

use std::collections::BTreeMap;

use crate::domain::value_objects::EntityGuid;

use super::VersionRecord;

/// A mobile application entity and its known versions, keyed by label.
///
/// The same shape is used for three things: the stored state of an app, a
/// fresh version-discovery result, and the delta between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    entity_guid: EntityGuid,
    versions: BTreeMap<String, VersionRecord>,
}

impl Application {
    /// Create an application with no known versions
    pub fn new(entity_guid: impl Into<EntityGuid>) -> Self {
        Self {
            entity_guid: entity_guid.into(),
            versions: BTreeMap::new(),
        }
    }

    /// Create an application pre-populated with versions
    pub fn with_versions(
        entity_guid: impl Into<EntityGuid>,
        versions: impl IntoIterator<Item = VersionRecord>,
    ) -> Self {
        let mut app = Self::new(entity_guid);
        app.merge_versions(versions);
        app
    }

    pub fn entity_guid(&self) -> &EntityGuid {
        &self.entity_guid
    }

    pub fn versions(&self) -> &BTreeMap<String, VersionRecord> {
        &self.versions
    }

    pub fn version(&self, label: &str) -> Option<&VersionRecord> {
        self.versions.get(label)
    }

    pub fn contains_version(&self, label: &str) -> bool {
        self.versions.contains_key(label)
    }

    /// Version labels in sorted order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Insert or replace a version, keyed by its label.
    pub fn insert_version(&mut self, record: VersionRecord) -> Option<VersionRecord> {
        self.versions.insert(record.app_version.clone(), record)
    }

    /// Fold versions into this application, overwriting same-label records.
    pub fn merge_versions(&mut self, versions: impl IntoIterator<Item = VersionRecord>) {
        for record in versions {
            self.insert_version(record);
        }
    }

    /// Fold another application's versions into this one.
    pub fn merge(&mut self, delta: &Application) {
        self.merge_versions(delta.versions.values().cloned());
    }
}
