//! Mark Deployments Use Case
//!
//! Orchestrates one run:
//! 1. Load the saved catalogue (or discover applications when none exists)
//! 2. Refresh application discovery and merge new applications
//! 3. Optionally prune applications that stopped reporting
//! 4. For each application: discover versions, diff, submit markers
//! 5. Merge marked versions and save the catalogue
//!
//! Business rules live in domain services; this is orchestration only.

use crate::domain::entities::{Application, Catalogue};
use crate::domain::ports::{
    CatalogueRepository, Clock, DataHandlingRules, MarkerGateway, QueryGateway,
};
use crate::domain::services::{Differ, Discovery, MarkerBuilder};
use crate::domain::value_objects::NormalizedTimestamp;
use crate::error::DeployMarkerResult;

use super::options::MarkOptions;
use super::result::{MarkFailure, MarkReport};

/// Mark use case - discovers new releases and records deployment markers
///
/// Parameterized by its ports so tests can run it against in-memory fakes.
pub struct MarkDeploymentsUseCase<QG, MG, CR, C>
where
    QG: QueryGateway,
    MG: MarkerGateway,
    CR: CatalogueRepository,
    C: Clock,
{
    query_gateway: QG,
    marker_gateway: MG,
    repository: CR,
    clock: C,
    differ: Differ,
}

impl<QG, MG, CR, C> MarkDeploymentsUseCase<QG, MG, CR, C>
where
    QG: QueryGateway,
    MG: MarkerGateway,
    CR: CatalogueRepository,
    C: Clock,
{
    pub fn new(query_gateway: QG, marker_gateway: MG, repository: CR, clock: C) -> Self {
        Self {
            query_gateway,
            marker_gateway,
            repository,
            clock,
            differ: Differ::new(),
        }
    }

    /// Execute one run. Marker failures are reported, not returned.
    pub fn execute(&self, options: &MarkOptions) -> DeployMarkerResult<MarkReport> {
        let discovery = Discovery::new(&self.query_gateway);
        let mut report = MarkReport::new(options.discover_only);

        let mut catalogue = match self.repository.load()? {
            Some(mut catalogue) => {
                tracing::debug!(applications = catalogue.len(), "loaded saved catalogue");
                let discovered = discovery.discover_apps(&options.discover_apps_since)?;
                if options.prune_inactive_apps {
                    report.pruned_applications = self.prune(&mut catalogue, &discovered);
                }
                let added = catalogue.merge_discovered(discovered);
                report.new_applications = added.iter().map(ToString::to_string).collect();
                catalogue
            }
            None => {
                tracing::warn!("no saved catalogue found, discovering applications");
                let discovered = discovery.discover_apps(&options.discover_apps_since)?;
                report.new_applications =
                    discovered.guids().iter().map(ToString::to_string).collect();
                discovered
            }
        };

        for guid in &report.new_applications {
            tracing::info!(entity_guid = %guid, "discovered new application");
        }

        for guid in catalogue.guids() {
            let found = discovery.discover_versions(&guid, &options.discover_versions_since)?;
            for skipped in &found.skipped {
                tracing::warn!(
                    entity_guid = %guid,
                    row = skipped.index,
                    error = %skipped.message,
                    "skipping malformed version row"
                );
            }
            report.versions_discovered += found.application.len();

            let Some(stored) = catalogue.get(&guid) else {
                continue;
            };
            let delta = self.differ.diff(stored, &found.application);
            if delta.is_empty() {
                tracing::info!(entity_guid = %guid, "no new versions");
                continue;
            }
            report.new_versions += delta.len();

            let marked = if options.discover_only {
                for record in delta.versions().values() {
                    tracing::info!(
                        application = %record.app_name,
                        version = %record.app_version,
                        entity_guid = %guid,
                        "new version recorded without marker"
                    );
                }
                delta
            } else {
                self.submit_markers(&delta, options, &mut report)
            };

            if let Some(app) = catalogue.get_mut(&guid) {
                app.merge(&marked);
            }
        }

        self.repository.save(&catalogue)?;
        report.applications = catalogue.len();

        tracing::info!(
            applications = report.applications,
            new_versions = report.new_versions,
            markers_created = report.markers_created,
            markers_failed = report.markers_failed.len(),
            discover_only = report.discover_only,
            "run complete"
        );

        Ok(report)
    }

    /// Remove applications absent from `discovered`.
    ///
    /// An empty discovery result never prunes.
    fn prune(&self, catalogue: &mut Catalogue, discovered: &Catalogue) -> Vec<String> {
        if discovered.is_empty() {
            tracing::warn!("application discovery returned nothing, skipping prune");
            return Vec::new();
        }
        let removed = catalogue.retain_discovered(discovered);
        for guid in &removed {
            tracing::info!(entity_guid = %guid, "pruned inactive application");
        }
        removed.iter().map(ToString::to_string).collect()
    }

    /// Submit one marker per version in `delta`, in label order.
    ///
    /// Returns the versions whose marker was accepted.
    fn submit_markers(
        &self,
        delta: &Application,
        options: &MarkOptions,
        report: &mut MarkReport,
    ) -> Application {
        let builder = MarkerBuilder::new(&options.custom_attributes);
        let rules = DataHandlingRules::strict();
        let mut marked = Application::new(delta.entity_guid().clone());

        for record in delta.versions().values() {
            let prepared = builder.build(record, self.clock.now());
            if let NormalizedTimestamp::Replaced { observed, now } = prepared.timestamp {
                tracing::warn!(
                    entity_guid = %record.entity_guid,
                    version = %record.app_version,
                    observed = %observed,
                    now = %now,
                    "version timestamp older than 24h, using current time"
                );
            }

            match self
                .marker_gateway
                .create_deployment(&prepared.event, &rules)
            {
                Ok(receipt) => {
                    tracing::info!(
                        application = %record.app_name,
                        version = %record.app_version,
                        entity_guid = %receipt.entity_guid,
                        "created deployment marker"
                    );
                    report.markers_created += 1;
                    marked.insert_version(record.clone());
                }
                Err(err) => {
                    tracing::error!(
                        application = %record.app_name,
                        version = %record.app_version,
                        entity_guid = %record.entity_guid,
                        error = %err,
                        "failed to create deployment marker"
                    );
                    report.markers_failed.push(MarkFailure {
                        entity_guid: record.entity_guid.to_string(),
                        version: record.app_version.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        marked
    }
}
