//! NerdGraph adapters
//!
//! - `client` - HTTP transport and GraphQL envelope handling
//! - `nrdb` - NRQL queries (QueryGateway)
//! - `change_tracking` - deployment markers (MarkerGateway)

mod change_tracking;
mod client;
mod nrdb;

pub use change_tracking::ChangeTrackingMarkerGateway;
pub use client::{parse_envelope, GraphQlExecutor, NerdGraphClient, NerdGraphError};
pub use nrdb::NrdbQueryGateway;
