//! Hyperbolic functions and their inverses.
//!
//! `sinh`, `cosh` and `tanh` are built from `e^|x|` and its reciprocal, both held on one
//! 32-bit fixed-point scale so their sum and difference round once. The inverses evaluate
//! their logarithm forms in fixed point:
//!
//! - `asinh(x) = ln(x + √(x² + 1))`
//! - `acosh(x) = ln(x + √(x² − 1))`
//! - `atanh(x) = ½ ln((1 + x) / (1 − x))`
//!
//! with `ln(2|x|)` taking over for `|x| ≥ 256`.

use crate::classify::nan_result;
use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::{LN2_Q15, Q15_ONE, Q15_SHIFT, SIGN_MASK};
use crate::engine::rounding_modes::RoundingMode;
use crate::engine::{nan_handling, overflow, round_wide};
use crate::half::Half;

use super::exp_log::{ln_q15, ln_wide};
use super::{LINEAR_CUTOFF_SIXTH, LINEAR_CUTOFF_THIRD, exp_fixed, from_q15, magnitude_q15};

/// `|x|` at which `sinh` and `cosh` overflow and `tanh` saturates, in Q15.
const SATURATION_Q15: u64 = 12 << Q15_SHIFT;

/// `|x|` from which `√(x² ± 1)` is replaced by `|x|`, in Q15.
const LARGE_ARGUMENT_Q15: u64 = 256 << Q15_SHIFT;

/// `e^q` and `e^−q` on a shared scale.
///
/// # Returns
///
/// `(positive, negative, k)` with `e^±q ≈ value × 2^(k − 31)`.
fn exp_pair(q: u64) -> (u64, u64, i32) {
    let (positive, k) = exp_fixed(q as i64);
    let reciprocal_shift = 46 - 2 * k;
    let negative = if reciprocal_shift < 0 {
        0
    } else {
        (1u64 << reciprocal_shift) / positive
    };
    (positive << 16, negative, k)
}

/// Hyperbolic sine. `|x| ≥ 12` overflows; `|x| < 2^-5` returns `x`.
pub fn sinh(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_infinity() {
        return a;
    }
    if x.exp < LINEAR_CUTOFF_SIXTH {
        return a;
    }
    let q = magnitude_q15(&x);
    if q >= SATURATION_Q15 {
        return compose(overflow(x.sign, mode));
    }
    let (positive, negative, k) = exp_pair(q);
    compose(round_wide(x.sign, k - 17, positive - negative, mode))
}

/// Hyperbolic cosine; always positive. `|x| ≥ 12` overflows; `|x| < 2^-5` returns `1`.
pub fn cosh(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_infinity() {
        return Half::INFINITY;
    }
    if x.exp < LINEAR_CUTOFF_SIXTH {
        return Half::ONE;
    }
    let q = magnitude_q15(&x);
    if q >= SATURATION_Q15 {
        return compose(overflow(0, mode));
    }
    let (positive, negative, k) = exp_pair(q);
    compose(round_wide(0, k - 17, positive + negative, mode))
}

/// Hyperbolic tangent. Saturates to `±1` for `|x| ≥ 12`; `|x| < 2^-6` returns `x`.
pub fn tanh(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.exp < LINEAR_CUTOFF_THIRD {
        return a;
    }
    let q = if x.is_infinity() {
        SATURATION_Q15
    } else {
        magnitude_q15(&x)
    };
    if q >= SATURATION_Q15 {
        return Half::ONE.copysign(a);
    }
    let (positive, negative, _) = exp_pair(q);
    let ratio = ((positive - negative) << Q15_SHIFT) / (positive + negative);
    compose(round_wide(x.sign, 0, ratio, mode))
}

/// `ln(2q)` in Q15 for a large Q15 magnitude.
fn ln_twice(x: Decomposed) -> i64 {
    ln_q15(x.with_sign(0)) + i64::from(LN2_Q15)
}

/// `ln(q + √(q² ± 1))` in Q15 for a Q15 magnitude `q`.
fn ln_plus_root(q: u64, subtract_one: bool) -> i64 {
    let one_q30 = 1u64 << (2 * Q15_SHIFT);
    let square = q * q;
    let radicand = if subtract_one {
        square - one_q30
    } else {
        square + one_q30
    };
    ln_wide(0, q + radicand.isqrt())
}

/// Inverse hyperbolic sine. `|x| < 2^-5` returns `x`.
pub fn asinh(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_infinity() || x.exp < LINEAR_CUTOFF_SIXTH {
        return a;
    }
    let q = magnitude_q15(&x);
    let value = if q >= LARGE_ARGUMENT_Q15 {
        ln_twice(x)
    } else {
        ln_plus_root(q, false)
    };
    let signed = if x.is_negative() { -value } else { value };
    compose(from_q15(signed, mode))
}

/// Inverse hyperbolic cosine, defined for `x ≥ 1`; `acosh(1) = +0`.
pub fn acosh(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_negative() {
        return compose(nan_handling::invalid());
    }
    if x.is_infinity() {
        return a;
    }
    let q = magnitude_q15(&x);
    if q < Q15_ONE as u64 {
        return compose(nan_handling::invalid());
    }
    let value = if q >= LARGE_ARGUMENT_Q15 {
        ln_twice(x)
    } else {
        ln_plus_root(q, true)
    };
    compose(from_q15(value, mode))
}

/// Inverse hyperbolic tangent.
///
/// `atanh(±1) = ±∞`; arguments outside `[−1, 1]`, Infinity included, give the default NaN.
/// `|x| < 2^-6` returns `x`.
pub fn atanh(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_infinity() {
        return compose(nan_handling::invalid());
    }
    if x.exp < LINEAR_CUTOFF_THIRD {
        return a;
    }
    let q = magnitude_q15(&x);
    let one = Q15_ONE as u64;
    if q == one {
        return compose(Decomposed::infinity(x.sign));
    }
    if q > one {
        return compose(nan_handling::invalid());
    }

    // (1 + q) / (1 − q) carried with 15 extra fraction bits.
    let ratio = ((one + q) << (2 * Q15_SHIFT)) / (one - q);
    let value = ln_wide(-(Q15_SHIFT as i32), ratio) >> 1;
    let sign = if x.is_negative() { SIGN_MASK } else { 0 };
    compose(round_wide(sign, 0, value.unsigned_abs(), mode))
}
