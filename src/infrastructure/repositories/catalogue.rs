//! JSON Catalogue Repository
//!
//! Implements the CatalogueRepository port with a pretty-printed JSON file
//! (`apps.json` by default). The whole file is read on load and rewritten on
//! save.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Application, Catalogue, VersionRecord};
use crate::domain::ports::catalogue_repository::{CatalogueRepository, StateError, StateResult};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::value_objects::{EntityGuid, EpochMillis};
use crate::infrastructure::fs::LocalFs;

/// JSON-file catalogue repository
pub struct JsonCatalogueRepository<FS: FileSystem = LocalFs> {
    fs: FS,
    path: PathBuf,
}

impl JsonCatalogueRepository<LocalFs> {
    /// Create a repository for `path` on the local file system
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(LocalFs::new(), path)
    }
}

impl<FS: FileSystem> JsonCatalogueRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

/// JSON representation of the state file
#[derive(Debug, Serialize, Deserialize)]
struct JsonState {
    #[serde(default)]
    apps: Option<BTreeMap<String, JsonApp>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonApp {
    #[serde(default)]
    entity_guid: String,
    #[serde(default)]
    versions: Option<BTreeMap<String, JsonVersion>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonVersion {
    #[serde(default)]
    app_build: String,
    #[serde(default)]
    app_id: i64,
    #[serde(default)]
    app_name: String,
    #[serde(default)]
    app_version: String,
    #[serde(default)]
    app_version_id: i64,
    #[serde(default)]
    entity_guid: String,
    #[serde(default)]
    timestamp: i64,
}

impl<FS: FileSystem> CatalogueRepository for JsonCatalogueRepository<FS> {
    fn load(&self) -> StateResult<Option<Catalogue>> {
        let content = match self.fs.read(&self.path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => {
                return Err(StateError::Io {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
        };

        let state: JsonState =
            serde_json::from_str(&content).map_err(|e| StateError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        // Map keys are authoritative; the redundant inner fields only fill gaps.
        let mut catalogue = Catalogue::new();
        for (guid, app) in state.apps.unwrap_or_default() {
            let guid = EntityGuid::new(guid);
            let versions = app.versions.unwrap_or_default().into_iter().map(|(label, v)| {
                VersionRecord {
                    app_version: label,
                    app_build: v.app_build,
                    app_id: v.app_id,
                    app_name: v.app_name,
                    app_version_id: v.app_version_id,
                    entity_guid: guid.clone(),
                    timestamp: EpochMillis::new(v.timestamp),
                }
            });
            catalogue.insert(Application::with_versions(guid.clone(), versions));
        }

        Ok(Some(catalogue))
    }

    fn save(&self, catalogue: &Catalogue) -> StateResult<()> {
        let mut apps = BTreeMap::new();
        for app in catalogue.applications() {
            let versions = app
                .versions()
                .iter()
                .map(|(label, record)| {
                    (
                        label.clone(),
                        JsonVersion {
                            app_build: record.app_build.clone(),
                            app_id: record.app_id,
                            app_name: record.app_name.clone(),
                            app_version: record.app_version.clone(),
                            app_version_id: record.app_version_id,
                            entity_guid: record.entity_guid.to_string(),
                            timestamp: record.timestamp.as_i64(),
                        },
                    )
                })
                .collect();
            apps.insert(
                app.entity_guid().to_string(),
                JsonApp {
                    entity_guid: app.entity_guid().to_string(),
                    versions: Some(versions),
                },
            );
        }

        let state = JsonState { apps: Some(apps) };
        let mut content = serde_json::to_string_pretty(&state)
            .map_err(|e| StateError::Serialize(e.to_string()))?;
        content.push('\n');

        self.fs
            .write(&self.path, &content)
            .map_err(|e| StateError::Io {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }
}
