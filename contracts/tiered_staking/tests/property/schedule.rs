#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the unlock schedule.
//!
//! Invariants tested:
//! - Every elapsed time inside the first two days is locked
//! - `releasable_now` never decreases as time moves forward
//! - Releasable never exceeds the principal still locked
//! - The fraction is always the tier index in quarters

use proptest::prelude::*;
use tiered_staking::schedule::{releasable_now, unlock_fraction, DAY, TIER_LENGTH};
use tiered_staking::{StakeRecord, UnlockTier};

fn fresh(amount: i128) -> StakeRecord {
    StakeRecord {
        principal_locked: amount,
        stake_start_time: 0,
        released_so_far: 0,
    }
}

proptest! {
    #[test]
    fn prop_first_two_days_are_locked(elapsed in 0u64..TIER_LENGTH) {
        let f = unlock_fraction(elapsed);
        prop_assert_eq!(f.tier, UnlockTier::Locked);
        prop_assert_eq!(f.numerator, 0);
        prop_assert_eq!(releasable_now(&fresh(1_000_000), elapsed).unwrap(), 0);
    }

    #[test]
    fn prop_releasable_monotonic_in_time(
        amount in 1i128..1_000_000_000_000_000_000_000i128,
        t1 in 0u64..20 * DAY,
        dt in 0u64..20 * DAY,
    ) {
        let record = fresh(amount);
        let early = releasable_now(&record, t1).unwrap();
        let late = releasable_now(&record, t1 + dt).unwrap();
        prop_assert!(late >= early, "releasable fell from {} to {}", early, late);
    }

    #[test]
    fn prop_releasable_bounded_by_principal(
        principal in 0i128..1_000_000_000_000i128,
        released in 0i128..1_000_000_000_000i128,
        elapsed in 0u64..20 * DAY,
    ) {
        let record = StakeRecord {
            principal_locked: principal,
            stake_start_time: 0,
            released_so_far: released,
        };
        let r = releasable_now(&record, elapsed).unwrap();
        prop_assert!(r >= 0);
        prop_assert!(r <= principal);
    }

    #[test]
    fn prop_fraction_is_tier_index_in_quarters(elapsed in any::<u64>()) {
        let f = unlock_fraction(elapsed);
        prop_assert_eq!(f.denominator, 4);
        prop_assert_eq!(f.numerator, f.tier.index());
        prop_assert!(f.numerator <= f.denominator);
    }
}
