//! Logarithms, exponential and power.
//!
//! `ln` reads the natural-log table at the 10 fraction bits of the normalized mantissa and
//! adds `exponent × ln 2`. `exp` splits its argument into `k·ln 2 + r` and interpolates
//! `e^r`. `pow` resolves the C99 special-case matrix and otherwise evaluates
//! `exp(y · ln|x|)` entirely in fixed point.

use crate::classify::{check_int, compare};
use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::{
    IMPLICIT_BIT, IMPLICIT_SHIFT, INV_LN2_Q15, INV_LN10_Q15, LN2_Q15, PRECISION_SHIFT, Q15_ONE,
    Q15_SHIFT, SIGN_MASK,
};
use crate::engine::rounding_modes::RoundingMode;
use crate::engine::{nan_handling, normalize_denormalized_mantissa, overflow, round_wide, underflow};
use crate::half::Half;

use super::tables::tables;
use super::{exp_fixed, from_q15, magnitude_q15, table_interpolate};

/// `exp(x)` overflows for `x ≥ 12`.
const EXP_OVERFLOW_Q15: i64 = 12 * Q15_ONE as i64;

/// `exp(x)` underflows past the smallest subnormal for `x ≤ −18`.
const EXP_UNDERFLOW_Q15: i64 = -18 * Q15_ONE as i64;

/// Natural log of a positive, finite, nonzero record, in Q15.
pub(crate) fn ln_q15(record: Decomposed) -> i64 {
    let (exp, fraction) = log_parts(record);
    i64::from(exp) * i64::from(LN2_Q15) + fraction
}

/// Natural log of the positive magnitude `mant × 2^(exp − 15)`, in Q15.
///
/// Bits below the 15 fraction bits the table can resolve are truncated.
pub(crate) fn ln_wide(exp: i32, mant: u64) -> i64 {
    let msb = (u64::BITS - 1 - mant.leading_zeros()) as i32;
    let target = IMPLICIT_SHIFT as i32;
    let normal = if msb > target {
        mant >> (msb - target)
    } else {
        mant << (target - msb)
    };
    let index = (normal - IMPLICIT_BIT as u64) as u32;
    let fraction = table_interpolate(&tables().ln, index, PRECISION_SHIFT);
    i64::from(exp + msb - target) * i64::from(LN2_Q15) + i64::from(fraction)
}

/// Splits a positive record into its binary exponent and `ln(1.f)` in Q15.
fn log_parts(record: Decomposed) -> (i32, i64) {
    let normal = normalize_denormalized_mantissa(record);
    let index = (normal.mant - IMPLICIT_BIT) as u32;
    let fraction = table_interpolate(&tables().ln, index, PRECISION_SHIFT);
    (normal.exp, i64::from(fraction))
}

/// Resolves the special cases shared by every logarithm.
///
/// Returns `Err(result)` when the special case decides the answer.
fn log_domain(x: &Decomposed) -> Result<(), Half> {
    if let Some(nan) = nan_handling::propagate_one(x) {
        return Err(compose(nan));
    }
    if x.is_zero() {
        return Err(Half::NEG_INFINITY);
    }
    if x.is_negative() {
        return Err(compose(nan_handling::invalid()));
    }
    if x.is_infinity() {
        return Err(Half::INFINITY);
    }
    Ok(())
}

/// Natural logarithm.
///
/// `ln(±0) = −∞`, `ln(+∞) = +∞`, negative inputs give the default NaN, `ln(1) = +0`.
pub fn ln(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Err(special) = log_domain(&x) {
        return special;
    }
    compose(from_q15(ln_q15(x), mode))
}

/// Base-2 logarithm; exact for powers of two.
pub fn log2(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Err(special) = log_domain(&x) {
        return special;
    }
    let (exp, fraction) = log_parts(x);
    let value = (i64::from(exp) << Q15_SHIFT) + ((fraction * i64::from(INV_LN2_Q15)) >> Q15_SHIFT);
    compose(from_q15(value, mode))
}

/// Base-10 logarithm.
pub fn log10(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Err(special) = log_domain(&x) {
        return special;
    }
    let value = (ln_q15(x) * i64::from(INV_LN10_Q15)) >> Q15_SHIFT;
    compose(from_q15(value, mode))
}

/// Evaluates `e^t` for a Q15 argument, saturating outside the representable range.
pub(crate) fn exp_q15(sign: u16, t: i64, mode: RoundingMode) -> Decomposed {
    if t >= EXP_OVERFLOW_Q15 {
        return overflow(sign, mode);
    }
    if t <= EXP_UNDERFLOW_Q15 {
        return underflow(sign, mode);
    }
    let (mant, k) = exp_fixed(t);
    round_wide(sign, k, mant, mode)
}

/// Exponential function.
///
/// `exp(+∞) = +∞`, `exp(−∞) = +0`. Arguments of 12 or more overflow; arguments of −18 or
/// less underflow; the range in between produces subnormals.
pub fn exp(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_handling::propagate_one(&x) {
        return compose(nan);
    }
    if x.is_infinity() {
        return if x.is_negative() { Half::ZERO } else { Half::INFINITY };
    }

    let magnitude = magnitude_q15(&x).min(EXP_UNDERFLOW_Q15.unsigned_abs()) as i64;
    let t = if x.is_negative() { -magnitude } else { magnitude };
    compose(exp_q15(0, t, mode))
}

/// Power function `base^exponent`.
///
/// Special cases are resolved in this order:
/// 1. `x^±0 = 1` for every `x`, NaN included.
/// 2. `(±1)^y`: `1` for any `y` including NaN and ±∞; `(−1)^y` is `±1` by parity for
///    integer `y` and NaN otherwise.
/// 3. NaN operands propagate.
/// 4. `(±0)^y`: `+∞`/`+0` for negative/positive `y`, with a negative sign when the base is
///    `−0` and `y` is an odd integer.
/// 5. `(±∞)^y`: `+0`/`+∞` for negative/positive `y`, signed likewise.
/// 6. `x^±∞`: `+∞` or `+0` depending on whether `|x| > 1`.
/// 7. `x^1 = x`.
/// 8. Negative finite base with a non-integer exponent gives the default NaN.
///
/// Otherwise the result is `exp(y · ln|x|)`, negated for a negative base raised to an odd
/// integer.
pub fn pow(base: Half, exponent: Half, mode: RoundingMode) -> Half {
    let (x, y) = (decompose(base), decompose(exponent));

    if y.is_zero() {
        return Half::ONE;
    }
    if base.abs() == Half::ONE {
        if !y.is_finite() || !x.is_negative() {
            return Half::ONE;
        }
        return match check_int(&y) {
            Some(n) if n & 1 != 0 => Half::NEG_ONE,
            Some(_) => Half::ONE,
            None => compose(nan_handling::invalid()),
        };
    }
    if let Some(nan) = nan_handling::propagate(&x, &y) {
        return compose(nan);
    }

    let integer = check_int(&y);
    let sign = match integer {
        Some(n) if n & 1 != 0 && x.is_negative() => SIGN_MASK,
        _ => 0,
    };

    if x.is_zero() {
        return compose(if y.is_negative() {
            Decomposed::infinity(sign)
        } else {
            Decomposed::zero(sign)
        });
    }
    if x.is_infinity() {
        return compose(if y.is_negative() {
            Decomposed::zero(sign)
        } else {
            Decomposed::infinity(sign)
        });
    }
    if y.is_infinity() {
        let above_one = compare(base.abs(), Half::ONE) == Some(std::cmp::Ordering::Greater);
        return if above_one == y.is_negative() {
            Half::ZERO
        } else {
            Half::INFINITY
        };
    }
    if exponent == Half::ONE {
        return base;
    }
    if x.is_negative() && integer.is_none() {
        return compose(nan_handling::invalid());
    }

    let ln = ln_q15(x.with_sign(0));
    let scale = magnitude_q15(&y) as i64;
    let product = (ln * scale) >> Q15_SHIFT;
    let t = if y.is_negative() { -product } else { product };
    compose(exp_q15(sign, t, mode))
}

