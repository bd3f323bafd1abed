//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalogue_repository;
pub mod clock;
pub mod file_system;
pub mod marker_gateway;
pub mod query_gateway;

pub use catalogue_repository::{CatalogueRepository, StateError, StateResult};
pub use clock::Clock;
pub use file_system::{FileSystem, FsError, FsResult};
pub use marker_gateway::{
    DataHandlingRules, DeploymentReceipt, MarkerGateway, SubmitError, ValidationFlag,
};
pub use query_gateway::{QueryError, QueryGateway, Row};
