//! Exponent extraction, scaling and neighbouring values.
//!
//! These operate on the record directly and are exact apart from [`ldexp`], which rounds
//! once when the scaled value leaves the normal range.

use std::cmp::Ordering;

use crate::classify::compare;
use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::{EXP_BIAS, IMPLICIT_SHIFT, SIGN_MASK};
use crate::engine::rounding_modes::RoundingMode;
use crate::engine::{nan_handling, normalize_denormalized_mantissa, round_wide};
use crate::half::Half;

/// Scale factors beyond this cannot change the outcome; clamping keeps exponents in range.
const SCALE_CLAMP: i32 = 4 * EXP_BIAS;

/// Splits `a` into a fraction in `[0.5, 1)` and a power of two.
///
/// # Returns
///
/// `(fraction, exponent)` with `a = fraction × 2^exponent` and the fraction carrying the
/// sign of `a`. Zero, Infinity and NaN return `(a, 0)`.
pub fn frexp(a: Half) -> (Half, i32) {
    let x = decompose(a);
    if !x.is_finite() || x.is_zero() {
        return (a, 0);
    }
    let normal = normalize_denormalized_mantissa(x);
    let fraction = Decomposed::new(normal.sign, -1, normal.mant);
    (compose(fraction), normal.exp + 1)
}

/// Returns `a × 2^n`, rounded with `mode` if the result is subnormal or overflows.
pub fn ldexp(a: Half, n: i32, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_handling::propagate_one(&x) {
        return compose(nan);
    }
    if x.is_infinity() || x.is_zero() {
        return a;
    }
    let exp = x.exp + n.clamp(-SCALE_CLAMP, SCALE_CLAMP);
    compose(round_wide(x.sign, exp, u64::from(x.mant as u32), mode))
}

/// Returns `a × 2^n`; identical to [`ldexp`] for a binary radix.
pub fn scalbn(a: Half, n: i32, mode: RoundingMode) -> Half {
    ldexp(a, n, mode)
}

/// Unbiased exponent of `a` as a half value.
///
/// `logb(±0) = −∞`, `logb(±∞) = +∞`; subnormals report their true exponent.
pub fn logb(a: Half) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_handling::propagate_one(&x) {
        return compose(nan);
    }
    if x.is_zero() {
        return Half::NEG_INFINITY;
    }
    if x.is_infinity() {
        return Half::INFINITY;
    }
    let exp = normalize_denormalized_mantissa(x).exp;
    let sign = if exp < 0 { SIGN_MASK } else { 0 };
    compose(round_wide(
        sign,
        IMPLICIT_SHIFT as i32,
        u64::from(exp.unsigned_abs()),
        RoundingMode::NearestEven,
    ))
}

/// Unbiased exponent of `a` as an integer.
///
/// Returns `i32::MIN` for zero and `i32::MAX` for Infinity or NaN.
pub fn ilogb(a: Half) -> i32 {
    let x = decompose(a);
    if !x.is_finite() {
        return i32::MAX;
    }
    if x.is_zero() {
        return i32::MIN;
    }
    normalize_denormalized_mantissa(x).exp
}

/// Returns the representable value adjacent to `from` in the direction of `to`.
///
/// NaN operands propagate; equal operands return `to` (so `nextafter(−0, +0) = +0`).
pub fn nextafter(from: Half, to: Half) -> Half {
    let (x, y) = (decompose(from), decompose(to));
    if let Some(nan) = nan_handling::propagate(&x, &y) {
        return compose(nan);
    }

    let direction = match compare(from, to) {
        Some(Ordering::Equal) | None => return to,
        Some(ordering) => ordering,
    };

    if x.is_zero() {
        let sign = if direction == Ordering::Greater {
            SIGN_MASK
        } else {
            0
        };
        return Half::from_bits(sign | Half::MIN_POSITIVE_SUBNORMAL.to_bits());
    }

    // Moving away from zero increments the magnitude bits, toward zero decrements them.
    let away = (direction == Ordering::Less) != x.is_negative();
    let bits = from.to_bits();
    Half::from_bits(if away { bits + 1 } else { bits - 1 })
}
