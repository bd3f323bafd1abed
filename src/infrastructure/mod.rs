//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `repositories/` - JSON state file
//! - `nerdgraph/` - New Relic GraphQL gateways
//! - `clock` - System clock

pub mod clock;
pub mod fs;
pub mod nerdgraph;
pub mod repositories;

// Re-export for convenience
pub use clock::SystemClock;
pub use fs::LocalFs;
pub use nerdgraph::{ChangeTrackingMarkerGateway, NerdGraphClient, NrdbQueryGateway};
pub use repositories::JsonCatalogueRepository;
