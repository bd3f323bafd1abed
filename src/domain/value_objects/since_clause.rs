//! NRQL `SINCE` window value object

use std::fmt;

/// The body of an NRQL `SINCE` clause, e.g. `3 months ago`.
///
/// Passed through to the query verbatim; only emptiness is rejected here,
/// the backend validates the syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinceClause(String);

/// Error returned for an empty since clause
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("since clause must not be empty")]
pub struct EmptySinceClause;

impl SinceClause {
    pub fn new(clause: impl Into<String>) -> Result<Self, EmptySinceClause> {
        let clause = clause.into().trim().to_string();
        if clause.is_empty() {
            return Err(EmptySinceClause);
        }
        Ok(Self(clause))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SinceClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
