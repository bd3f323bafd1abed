//! Use Case Factory
//!
//! Creates the mark use case with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::MarkDeploymentsUseCase;
use crate::config::Config;
use crate::infrastructure::{
    ChangeTrackingMarkerGateway, JsonCatalogueRepository, NerdGraphClient, NrdbQueryGateway,
    SystemClock,
};

/// Type alias for the concrete MarkDeploymentsUseCase with all dependencies
pub type ConcreteMarkUseCase = MarkDeploymentsUseCase<
    NrdbQueryGateway,
    ChangeTrackingMarkerGateway,
    JsonCatalogueRepository,
    SystemClock,
>;

fn client(config: &Config) -> NerdGraphClient {
    let api_key = config.api_key.expose();
    match &config.graphql_endpoint {
        Some(endpoint) => {
            NerdGraphClient::with_endpoint(endpoint.as_str(), api_key, config.request_timeout)
        }
        None => NerdGraphClient::new(config.region, api_key, config.request_timeout),
    }
}

/// Create a mark use case talking to New Relic and the local state file
pub fn create_mark_use_case(config: &Config) -> ConcreteMarkUseCase {
    MarkDeploymentsUseCase::new(
        NrdbQueryGateway::new(client(config), config.account_id),
        ChangeTrackingMarkerGateway::new(client(config)),
        JsonCatalogueRepository::new(&config.state_file),
        SystemClock,
    )
}
