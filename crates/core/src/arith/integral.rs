//! Rounding to integral values.
//!
//! All functions share [`round_to_integral`]: the fraction bits below the binary point are
//! split off and the integer part is bumped according to a rounding direction. A result of
//! zero keeps the sign of the input (`ceil(−0.5) = −0`). Values with an exponent of 10 or
//! more are already integers and pass through unchanged.

use crate::codec::{compose, decompose};
use crate::common::constants::{FRAC_BITS, IMPLICIT_SHIFT};
use crate::engine::rounding_modes::RoundingMode;
use crate::engine::{nan_handling, round_wide};
use crate::half::Half;

use super::{copysign, sub};

/// Rounds `a` to an integer in the direction given by `mode`.
///
/// # Arguments
///
/// * `a` - The value to round.
/// * `mode` - Direction used for the fraction bits.
///
/// # Returns
///
/// The integral result; ±0 and ±∞ are returned unchanged and NaN propagates.
pub fn round_to_integral(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_handling::propagate_one(&x) {
        return compose(nan);
    }
    if x.is_infinity() || x.is_zero() || x.exp >= FRAC_BITS as i32 {
        return a;
    }

    let shift = (IMPLICIT_SHIFT as i32 - x.exp) as u32;
    let mant = u64::from(x.mant as u32);
    let integer = mant >> shift;
    let discarded = mant & ((1 << shift) - 1);
    let half = 1 << (shift - 1);
    let bump = mode.rounds_away(x.is_negative(), discarded, half, integer & 1 != 0);

    let value = integer + u64::from(bump);
    compose(round_wide(x.sign, IMPLICIT_SHIFT as i32, value, mode))
}

/// Rounds toward zero.
pub fn trunc(a: Half) -> Half {
    round_to_integral(a, RoundingMode::TowardZero)
}

/// Integer part; identical to [`trunc`].
pub fn int(a: Half) -> Half {
    trunc(a)
}

/// Rounds toward −∞.
pub fn floor(a: Half) -> Half {
    round_to_integral(a, RoundingMode::TowardNegative)
}

/// Rounds toward +∞.
pub fn ceil(a: Half) -> Half {
    round_to_integral(a, RoundingMode::TowardPositive)
}

/// Rounds to nearest, ties away from zero (C `round`).
pub fn round(a: Half) -> Half {
    round_to_integral(a, RoundingMode::NearestAway)
}

/// Rounds to an integer using the caller's rounding mode (C `rint`).
pub fn rint(a: Half, mode: RoundingMode) -> Half {
    round_to_integral(a, mode)
}

/// Splits `a` into fractional and integral parts, both carrying the sign of `a`.
///
/// # Returns
///
/// `(fraction, integer)`. Infinity gives `(±0, ±∞)`; NaN gives NaN for both.
pub fn modf(a: Half) -> (Half, Half) {
    let x = decompose(a);
    if let Some(nan) = nan_handling::propagate_one(&x) {
        let nan = compose(nan);
        return (nan, nan);
    }
    if x.is_infinity() {
        return (copysign(Half::ZERO, a), a);
    }

    let integer = trunc(a);
    let fraction = sub(a, integer, RoundingMode::NearestEven);
    (copysign(fraction, a), integer)
}
