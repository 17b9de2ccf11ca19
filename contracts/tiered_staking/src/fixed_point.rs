use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned intermediate for products of two `i128` operands.
    struct U256(4);
}

/// Fixed-point scaling factor for the reward-per-share accumulator.
///
/// Per-share truncation strands at most `total_locked / PRECISION` units of
/// an injection in the carry, so any ledger with fewer than 10^24 units
/// locked (a million tokens at 18 decimals) loses under one unit overall.
pub const PRECISION: i128 = 1_000_000_000_000_000_000_000_000;

// ── Core arithmetic ─────────────────────────────────────────────────────────

fn widen(x: i128) -> Option<U256> {
    u128::try_from(x).ok().map(U256::from)
}

fn narrow(x: U256) -> Option<i128> {
    if x.bits() > 127 {
        return None;
    }
    i128::try_from(x.low_u128()).ok()
}

/// Compute `(a × b + c) / d` and its remainder for non-negative operands.
///
/// The numerator is formed at 256 bits, so the quotient is exact whenever it
/// fits in `i128`. Returns `None` for negative operands, a non-positive
/// divisor, or an unrepresentable quotient.
pub fn mul_add_div_rem(a: i128, b: i128, c: i128, d: i128) -> Option<(i128, i128)> {
    if d <= 0 {
        return None;
    }
    let numerator = widen(a)?.checked_mul(widen(b)?)?.checked_add(widen(c)?)?;
    let (quotient, remainder) = numerator.div_mod(widen(d)?);
    Some((narrow(quotient)?, narrow(remainder)?))
}

/// Compute `floor(a × b / d)` for non-negative operands.
pub fn mul_div_floor(a: i128, b: i128, d: i128) -> Option<i128> {
    mul_add_div_rem(a, b, 0, d).map(|(quotient, _)| quotient)
}

/// Convert an accumulator delta back into token units for `amount` shares.
///
/// ```text
/// scale(amount, Δacc) = ⌊amount × Δacc / PRECISION⌋
/// ```
///
/// Truncation always rounds down, so an account is underpaid by strictly
/// less than one unit each time it settles after an injection. That dust
/// stays in the contract and is never redistributed.
pub fn scale(amount: i128, acc_delta: i128) -> Option<i128> {
    mul_div_floor(amount, acc_delta, PRECISION)
}

/// Accumulator increment for distributing `reward` over `total_locked`
/// shares, together with the undistributed remainder.
///
/// ```text
/// n      = reward × PRECISION + carry
/// Δacc   = ⌊n / total_locked⌋
/// carry' = n mod total_locked
/// ```
///
/// `carry` is the remainder returned by the previous call. Feeding it back
/// keeps per-share truncation from compounding across injections.
pub fn per_share(reward: i128, total_locked: i128, carry: i128) -> Option<(i128, i128)> {
    mul_add_div_rem(reward, PRECISION, carry, total_locked)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure integer math, no Soroban environment required.
