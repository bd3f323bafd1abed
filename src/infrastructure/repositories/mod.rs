//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod catalogue;

pub use catalogue::JsonCatalogueRepository;
