//! Epoch-millisecond timestamps and stale-timestamp normalization
//!
//! Deployment markers are most useful when their timestamp lines up with the
//! moment the release was detected. Observations older than
//! [`EpochMillis::STALE_AFTER_MS`] are replaced with "now" at submission.

use std::fmt;

use chrono::{DateTime, Utc};

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochMillis(i64);

impl EpochMillis {
    /// Age after which an observed timestamp is considered stale (24 hours).
    pub const STALE_AFTER_MS: i64 = 24 * 60 * 60 * 1000;

    pub const fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Returns true if this timestamp is more than 24 hours older than `now`.
    ///
    /// Exactly 24 hours old is still fresh; future timestamps are fresh.
    pub fn is_stale(self, now: DateTime<Utc>) -> bool {
        let cutoff = now.timestamp_millis().saturating_sub(Self::STALE_AFTER_MS);
        self.0 < cutoff
    }

    /// Keep the timestamp if fresh, otherwise substitute `now`.
    pub fn normalize(self, now: DateTime<Utc>) -> NormalizedTimestamp {
        if self.is_stale(now) {
            NormalizedTimestamp::Replaced {
                observed: self,
                now: Self::from_datetime(now),
            }
        } else {
            NormalizedTimestamp::Kept(self)
        }
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EpochMillis {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

/// Outcome of [`EpochMillis::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedTimestamp {
    /// Observation was recent enough to use as-is
    Kept(EpochMillis),
    /// Observation was stale and "now" is used instead
    Replaced { observed: EpochMillis, now: EpochMillis },
}

impl NormalizedTimestamp {
    /// The timestamp to submit.
    pub fn value(self) -> EpochMillis {
        match self {
            NormalizedTimestamp::Kept(ts) => ts,
            NormalizedTimestamp::Replaced { now, .. } => now,
        }
    }

    pub fn was_replaced(self) -> bool {
        matches!(self, NormalizedTimestamp::Replaced { .. })
    }
}
