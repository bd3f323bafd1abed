//! Entity GUID value object
//!
//! The backend-assigned identifier of one mobile application entity.

use std::fmt;

/// Opaque, stable identifier of a mobile application entity.
///
/// The value is never parsed; it is compared, ordered, and echoed back to the
/// backend verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityGuid(String);

impl EntityGuid {
    pub fn new(guid: impl Into<String>) -> Self {
        Self(guid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render as a single-quoted NRQL string literal.
    pub fn to_nrql_literal(&self) -> String {
        format!("'{}'", self.0.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

impl fmt::Display for EntityGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityGuid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityGuid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EntityGuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
