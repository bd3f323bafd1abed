//! Discovery Domain Service
//!
//! Builds the two NRQL queries (applications, versions per application) and
//! decodes their rows into typed domain entities. Row decoding never uses
//! unchecked casts: a row with an unexpected shape becomes a [`DecodeError`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::{Application, Catalogue, VersionRecord};
use crate::domain::ports::{QueryError, QueryGateway, Row};
use crate::domain::value_objects::{EntityGuid, EpochMillis, SinceClause};

/// A result row did not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {index}: {message}")]
pub struct DecodeError {
    pub index: usize,
    pub message: String,
}

/// Errors from discovery queries
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("unexpected app discovery result: {0}")]
    Decode(#[from] DecodeError),
}

/// Result of a version discovery query
#[derive(Debug, Clone)]
pub struct DiscoveredVersions {
    /// Decoded versions, scoped to the queried entity
    pub application: Application,
    /// Rows that could not be decoded and were left out
    pub skipped: Vec<DecodeError>,
}

/// NRQL for every application entity reporting since `since`
pub fn apps_query(since: &SinceClause) -> String {
    format!("SELECT uniques(entityGuid) FROM Mobile SINCE {since}")
}

/// NRQL for the latest observation of every version of one application
pub fn versions_query(guid: &EntityGuid, since: &SinceClause) -> String {
    format!(
        "SELECT latest(timestamp), latest(appName), latest(appBuild), latest(appId), \
         latest(appVersionId) FROM Mobile WHERE entityGuid = {} SINCE {since} \
         FACET appVersion LIMIT MAX",
        guid.to_nrql_literal()
    )
}

/// Discovers applications and their versions through a [`QueryGateway`].
pub struct Discovery<'a, Q: QueryGateway + ?Sized> {
    gateway: &'a Q,
}

impl<'a, Q: QueryGateway + ?Sized> Discovery<'a, Q> {
    pub fn new(gateway: &'a Q) -> Self {
        Self { gateway }
    }

    /// Every application seen since `since`, each with an empty version map.
    ///
    /// An empty result yields an empty catalogue. A row without the GUID
    /// column is an error.
    pub fn discover_apps(&self, since: &SinceClause) -> Result<Catalogue, DiscoveryError> {
        let rows = self.gateway.run_query(&apps_query(since))?;
        Ok(decode_apps(rows)?)
    }

    /// The versions of one application seen since `since`.
    ///
    /// Rows that fail to decode are reported in `skipped`; the rest are kept.
    pub fn discover_versions(
        &self,
        guid: &EntityGuid,
        since: &SinceClause,
    ) -> Result<DiscoveredVersions, DiscoveryError> {
        let rows = self.gateway.run_query(&versions_query(guid, since))?;
        Ok(decode_versions(guid, rows))
    }
}

#[derive(Deserialize)]
struct UniqueGuidsRow {
    #[serde(rename = "uniques.entityGuid")]
    guids: Vec<String>,
}

#[derive(Deserialize)]
struct LatestVersionRow {
    #[serde(rename = "appVersion")]
    app_version: String,
    #[serde(rename = "latest.appBuild")]
    app_build: String,
    #[serde(rename = "latest.appName")]
    app_name: String,
    #[serde(rename = "latest.appId", deserialize_with = "integral")]
    app_id: i64,
    #[serde(rename = "latest.appVersionId", deserialize_with = "integral")]
    app_version_id: i64,
    #[serde(rename = "latest.timestamp", deserialize_with = "integral")]
    timestamp: i64,
}

/// Accept integer or float JSON numbers, as long as the value is integral.
fn integral<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let n = serde_json::Number::deserialize(deserializer)?;
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    match n.as_f64() {
        Some(f) if is_integral(f) => Ok(f as i64),
        _ => Err(serde::de::Error::custom(format!(
            "expected an integer, got {n}"
        ))),
    }
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

fn decode_apps(rows: Vec<Row>) -> Result<Catalogue, DecodeError> {
    let mut catalogue = Catalogue::new();
    for (index, row) in rows.into_iter().enumerate() {
        let decoded: UniqueGuidsRow =
            serde_json::from_value(Value::Object(row)).map_err(|e| DecodeError {
                index,
                message: e.to_string(),
            })?;
        for guid in decoded.guids {
            catalogue.add_if_absent(Application::new(guid));
        }
    }
    Ok(catalogue)
}

fn decode_versions(guid: &EntityGuid, rows: Vec<Row>) -> DiscoveredVersions {
    let mut application = Application::new(guid.clone());
    let mut skipped = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<LatestVersionRow>(Value::Object(row)) {
            Ok(row) => {
                application.insert_version(VersionRecord {
                    app_version: row.app_version,
                    app_build: row.app_build,
                    app_id: row.app_id,
                    app_name: row.app_name,
                    app_version_id: row.app_version_id,
                    entity_guid: guid.clone(),
                    timestamp: EpochMillis::new(row.timestamp),
                });
            }
            Err(e) => skipped.push(DecodeError {
                index,
                message: e.to_string(),
            }),
        }
    }

    DiscoveredVersions {
        application,
        skipped,
    }
}
