//! Clock port - where "now" comes from

use chrono::{DateTime, Utc};

/// Source of wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
