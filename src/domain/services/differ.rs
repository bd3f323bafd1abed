//! Differ Domain Service
//!
//! Computes which versions of an application have never been marked.
//! Label presence alone gates marking: a stored label is never marked
//! again, even if its attributes changed.

use crate::domain::entities::Application;

/// Differ service for computing version deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct Differ;

impl Differ {
    /// Create a new Differ instance
    pub fn new() -> Self {
        Self
    }

    /// Versions present in `fresh` whose label is absent from `stored`.
    ///
    /// The result is scoped to the stored application's entity GUID.
    pub fn diff(&self, stored: &Application, fresh: &Application) -> Application {
        Application::with_versions(
            stored.entity_guid().clone(),
            fresh
                .versions()
                .values()
                .filter(|record| self.is_new(stored, record.label()))
                .cloned(),
        )
    }

    /// Check if a version label has never been recorded for `stored`
    pub fn is_new(&self, stored: &Application, label: &str) -> bool {
        !stored.contains_version(label)
    }
}
