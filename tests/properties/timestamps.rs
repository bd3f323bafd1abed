//! Property tests for stale-timestamp normalization.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use mobile_deploy_marker::domain::value_objects::EpochMillis;

const DAY_MS: i64 = EpochMillis::STALE_AFTER_MS;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: timestamps within the last 24 hours (or in the future) are kept.
    #[test]
    fn property_fresh_timestamps_are_kept(
        now_ms in 1_000_000_000_000i64..4_000_000_000_000,
        age in -DAY_MS..=DAY_MS,
    ) {
        let now = Utc.timestamp_millis_opt(now_ms).unwrap();
        let observed = EpochMillis::new(now_ms - age);

        let normalized = observed.normalize(now);

        prop_assert!(!normalized.was_replaced());
        prop_assert_eq!(normalized.value(), observed);
    }

    /// PROPERTY: timestamps older than 24 hours become "now".
    #[test]
    fn property_stale_timestamps_become_now(
        now_ms in 1_000_000_000_000i64..4_000_000_000_000,
        extra in 1i64..=10 * DAY_MS,
    ) {
        let now = Utc.timestamp_millis_opt(now_ms).unwrap();
        let observed = EpochMillis::new(now_ms - DAY_MS - extra);

        let normalized = observed.normalize(now);

        prop_assert!(normalized.was_replaced());
        prop_assert_eq!(normalized.value(), EpochMillis::new(now_ms));
    }
}
