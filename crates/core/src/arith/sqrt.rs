//! Square root and reciprocal square root.
//!
//! Both reduce the input to an even exponent and a 32-bit radicand, then take an integer
//! square root with [`square_root`], a non-restoring digit-by-digit algorithm that runs a
//! fixed 16 iterations.

use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::IMPLICIT_SHIFT;
use crate::engine::rounding_modes::RoundingMode;
use crate::engine::{nan_handling, normalize_denormalized_mantissa, round_wide};
use crate::half::Half;

/// Number of root digits (one per radicand bit pair).
const ROOT_ITERATIONS: u32 = 16;

/// Numerator shift of the fixed-point reciprocal in [`rsqrt`].
const RECIP_SHIFT: u32 = 47;

/// Integer square root of a 32-bit value.
///
/// Consumes the radicand two bits at a time from the top, so the iteration count is fixed.
///
/// # Returns
///
/// `(root, remainder)` with `root = ⌊√value⌋` and `remainder = value − root²`.
pub const fn square_root(value: u32) -> (u32, u32) {
    let mut value = value;
    let mut root: u32 = 0;
    let mut rest: u32 = 0;

    let mut i = 0;
    while i < ROOT_ITERATIONS {
        value = value.rotate_left(2);
        rest = (rest << 2) + (value & 3);
        let trial = (root << 2) + 1;
        let fits = rest >= trial;
        if fits {
            rest -= trial;
        }
        root = (root << 1) + fits as u32;
        i += 1;
    }

    (root, rest)
}

/// Splits a positive finite record into an even exponent and a radicand in `[2^30, 2^32)`.
const fn radicand(record: Decomposed) -> (u32, i32) {
    let normal = normalize_denormalized_mantissa(record);
    let mut mant = normal.mant as u32;
    let mut exp = normal.exp;
    if exp & 1 != 0 {
        mant <<= 1;
        exp -= 1;
    }
    (mant << IMPLICIT_SHIFT, exp)
}

/// Returns `√a` rounded with `mode`.
///
/// `√±0 = ±0`, `√+∞ = +∞`; negative nonzero inputs give the default NaN.
pub fn sqrt(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_handling::propagate_one(&x) {
        return compose(nan);
    }
    if x.is_zero() {
        return a;
    }
    if x.is_negative() {
        return compose(nan_handling::invalid());
    }
    if x.is_infinity() {
        return a;
    }

    // √(m × 2^(e−15)) = √(m × 2^15) × 2^(e/2 − 15) for even e
    let (value, exp) = radicand(x);
    let (root, rest) = square_root(value);
    let sticky = u64::from(rest != 0);
    compose(round_wide(0, exp / 2, u64::from(root) | sticky, mode))
}

/// Returns `1 / √a` rounded with `mode`.
///
/// `rsqrt(±0) = ±∞`, `rsqrt(+∞) = +0`; negative nonzero inputs give the default NaN.
pub fn rsqrt(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_handling::propagate_one(&x) {
        return compose(nan);
    }
    if x.is_zero() {
        return compose(Decomposed::infinity(x.sign));
    }
    if x.is_negative() {
        return compose(nan_handling::invalid());
    }
    if x.is_infinity() {
        return Half::ZERO;
    }

    let (value, exp) = radicand(x);
    let (root, _) = square_root(value);
    let numerator = 1_u64 << RECIP_SHIFT;
    let divisor = u64::from(root);
    let quotient = numerator / divisor;
    let sticky = u64::from(numerator % divisor != 0);

    // 1 / (root × 2^(e/2 − 15)) = quotient × 2^(−47 + 15 − e/2)
    let exp = -(exp / 2) - (RECIP_SHIFT as i32 - 2 * IMPLICIT_SHIFT as i32);
    compose(round_wide(0, exp, quotient | sticky, mode))
}
