//! Time-tiered unlock schedule.
//!
//! | elapsed since lock start | tier            | unlocked |
//! |--------------------------|-----------------|----------|
//! | `[0, 2d)`                | `Locked`        | 0/4      |
//! | `[2d, 4d)`               | `Quarter`       | 1/4      |
//! | `[4d, 6d)`               | `Half`          | 2/4      |
//! | `[6d, 8d)`               | `ThreeQuarters` | 3/4      |
//! | `[8d, ∞)`                | `Full`          | 4/4      |
//!
//! Every function here is pure: the caller supplies the elapsed time read
//! from the ledger clock.

use crate::fixed_point;
use crate::types::{StakeRecord, UnlockTier};
use crate::ContractError;

pub const DAY: u64 = 86_400;

/// Width of every tier but the last, which is unbounded.
pub const TIER_LENGTH: u64 = 2 * DAY;

/// Fractions are expressed in quarters of the original lock.
pub const UNLOCK_DENOMINATOR: u32 = 4;

/// Cumulative unlocked fraction for a point in the schedule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnlockFraction {
    pub numerator: u32,
    pub denominator: u32,
    pub tier: UnlockTier,
}

impl UnlockTier {
    /// Tier containing `elapsed` seconds. Intervals are closed at the start
    /// and open at the end, so exactly two days is already `Quarter`.
    pub fn for_elapsed(elapsed: u64) -> Self {
        match elapsed / TIER_LENGTH {
            0 => UnlockTier::Locked,
            1 => UnlockTier::Quarter,
            2 => UnlockTier::Half,
            3 => UnlockTier::ThreeQuarters,
            _ => UnlockTier::Full,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Quarters of the original lock released once this tier is reached.
    pub fn unlocked_quarters(self) -> u32 {
        self.index()
    }

    pub fn is_locked(self) -> bool {
        self == UnlockTier::Locked
    }
}

/// Map elapsed lock time to its cumulative unlock fraction.
pub fn unlock_fraction(elapsed: u64) -> UnlockFraction {
    let tier = UnlockTier::for_elapsed(elapsed);
    UnlockFraction {
        numerator: tier.unlocked_quarters(),
        denominator: UNLOCK_DENOMINATOR,
        tier,
    }
}

/// Amount `record` may withdraw after `elapsed` seconds.
///
/// ```text
/// releasable = max(0, ⌊original × num / den⌋ − released_so_far)
/// ```
///
/// Only the delta over what was already released is returned, so a second
/// call inside the same tier yields zero.
pub fn releasable_now(record: &StakeRecord, elapsed: u64) -> Result<i128, ContractError> {
    let fraction = unlock_fraction(elapsed);
    let entitled = fixed_point::mul_div_floor(
        record.original_locked(),
        i128::from(fraction.numerator),
        i128::from(fraction.denominator),
    )
    .ok_or(ContractError::ArithmeticOverflow)?;

    Ok(entitled.saturating_sub(record.released_so_far).max(0))
}

/// Timestamp at which the tier after `tier` begins for a lock opened at
/// `start`. `None` once the schedule is complete.
pub fn next_unlock_at(start: u64, tier: UnlockTier) -> Option<u64> {
    if tier == UnlockTier::Full {
        return None;
    }
    let next = u64::from(tier.index().saturating_add(1));
    Some(start.saturating_add(next.saturating_mul(TIER_LENGTH)))
}
