//! Catalogue entity - every known application, keyed by entity GUID
//!
//! The catalogue is the single unit of persisted state. It is a pure data
//! structure; loading and saving go through `CatalogueRepository`.

use std::collections::BTreeMap;

use crate::domain::value_objects::EntityGuid;

use super::Application;

/// All known applications, ordered by entity GUID.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalogue {
    apps: BTreeMap<EntityGuid, Application>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn get(&self, guid: &EntityGuid) -> Option<&Application> {
        self.apps.get(guid)
    }

    pub fn get_mut(&mut self, guid: &EntityGuid) -> Option<&mut Application> {
        self.apps.get_mut(guid)
    }

    pub fn contains(&self, guid: &EntityGuid) -> bool {
        self.apps.contains_key(guid)
    }

    /// Insert or replace an application
    pub fn insert(&mut self, app: Application) -> Option<Application> {
        self.apps.insert(app.entity_guid().clone(), app)
    }

    /// Insert an application only if its GUID is not known yet.
    ///
    /// Returns true if the application was added.
    pub fn add_if_absent(&mut self, app: Application) -> bool {
        if self.contains(app.entity_guid()) {
            return false;
        }
        self.insert(app);
        true
    }

    /// Add discovered applications that are not in the catalogue yet.
    ///
    /// Existing entries (and their versions) are never overwritten. Returns
    /// the GUIDs that were added, in sorted order.
    pub fn merge_discovered(&mut self, discovered: Catalogue) -> Vec<EntityGuid> {
        let mut added = Vec::new();
        for (guid, app) in discovered.apps {
            if self.add_if_absent(app) {
                added.push(guid);
            }
        }
        added
    }

    /// Drop applications that are not present in `discovered`.
    ///
    /// Returns the GUIDs that were removed, in sorted order.
    pub fn retain_discovered(&mut self, discovered: &Catalogue) -> Vec<EntityGuid> {
        let removed: Vec<EntityGuid> = self
            .apps
            .keys()
            .filter(|guid| !discovered.contains(guid))
            .cloned()
            .collect();
        for guid in &removed {
            self.apps.remove(guid);
        }
        removed
    }

    /// Entity GUIDs in sorted order
    pub fn guids(&self) -> Vec<EntityGuid> {
        self.apps.keys().cloned().collect()
    }

    pub fn applications(&self) -> impl Iterator<Item = &Application> {
        self.apps.values()
    }
}

impl FromIterator<Application> for Catalogue {
    fn from_iter<I: IntoIterator<Item = Application>>(iter: I) -> Self {
        let mut catalogue = Catalogue::new();
        for app in iter {
            catalogue.insert(app);
        }
        catalogue
    }
}
