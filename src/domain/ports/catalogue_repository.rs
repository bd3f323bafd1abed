//! CatalogueRepository port - abstraction for state persistence
//!
//! This trait allows the domain layer to load/save the catalogue
//! without knowing about JSON serialization details.

use std::path::PathBuf;

use crate::domain::entities::Catalogue;

/// Result type for state operations
pub type StateResult<T> = Result<T, StateError>;

/// State persistence errors. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The state file exists but cannot be parsed
    #[error("malformed state file {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    /// The state could not be serialized
    #[error("failed to serialize state: {0}")]
    Serialize(String),

    /// Reading or writing the state file failed
    #[error("state file I/O error on {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
}

/// Abstract repository for the persisted catalogue
pub trait CatalogueRepository {
    /// Load the saved catalogue; `Ok(None)` when no state has been saved yet
    fn load(&self) -> StateResult<Option<Catalogue>>;

    /// Overwrite the saved state with `catalogue`
    fn save(&self, catalogue: &Catalogue) -> StateResult<()>;
}
