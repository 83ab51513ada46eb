//! Inverse trigonometric functions.
//!
//! `asin` and `acos` read the inverse-sine table over `[0, 1]`. `atan` reads the arctangent
//! table over `[0, 1]` and uses `atan(x) = π/2 − atan(1/x)` above one; `atan2` applies the
//! same complement to the smaller-over-larger operand ratio and then places the result in
//! its quadrant. A first-quadrant ratio below `2^-6` is its own arctangent and is rounded
//! from the full mantissa quotient, so `atan2(y, 1)` agrees with `atan(y)`.

use crate::classify::nan_result;
use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::{
    IMPLICIT_SHIFT, PI_1_2_Q15, PI_1_4_Q15, PI_3_4_Q15, PI_Q15, Q15_ONE, Q15_SHIFT,
};
use crate::engine::rounding_modes::RoundingMode;
use crate::engine::{nan_handling, normalize_denormalized_mantissa, round_wide};
use crate::half::Half;

use super::tables::tables;
use super::{
    LINEAR_CUTOFF_SIXTH, LINEAR_CUTOFF_THIRD, Q15_INDEX_FRAC_BITS, magnitude_q15,
    table_interpolate,
};

/// `1.0` in Q30, the dividend of the reciprocal ratio.
const ONE_Q30: u64 = 1 << (2 * Q15_SHIFT);

/// Extra quotient bits of a small `atan2` ratio.
const RATIO_SHIFT: u32 = 32;

fn signed_q15(sign: u16, value: u64, mode: RoundingMode) -> Half {
    compose(round_wide(sign, 0, value, mode))
}

/// `asin(q)` in Q15 for a Q15 magnitude in `[0, 1]`.
fn asin_q15(q: u64) -> u64 {
    u64::from(table_interpolate(&tables().asin, q as u32, Q15_INDEX_FRAC_BITS))
}

/// `atan(q)` in Q15 for a Q15 magnitude in `[0, 1]`.
fn atan_q15(q: u64) -> u64 {
    u64::from(table_interpolate(&tables().atan, q as u32, Q15_INDEX_FRAC_BITS))
}

/// Q15 magnitude of an `asin`/`acos` argument, or `None` outside `[−1, 1]`.
fn unit_magnitude(x: &Decomposed) -> Option<u64> {
    if x.is_infinity() {
        return None;
    }
    let q = magnitude_q15(x);
    (q <= Q15_ONE as u64).then_some(q)
}

/// Inverse sine; arguments outside `[−1, 1]` give the default NaN.
pub fn asin(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    let Some(q) = unit_magnitude(&x) else {
        return compose(nan_handling::invalid());
    };
    if x.exp < LINEAR_CUTOFF_SIXTH {
        return a;
    }
    signed_q15(x.sign, asin_q15(q), mode)
}

/// Inverse cosine, in `[0, π]`; arguments outside `[−1, 1]` give the default NaN.
pub fn acos(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    let Some(q) = unit_magnitude(&x) else {
        return compose(nan_handling::invalid());
    };
    let half_pi = PI_1_2_Q15 as u64;
    let v = asin_q15(q);
    let value = if x.is_negative() {
        half_pi + v
    } else {
        half_pi.saturating_sub(v)
    };
    signed_q15(0, value, mode)
}

/// Arctangent of a nonnegative Q15 magnitude.
fn atan_magnitude(q: u64) -> u64 {
    if q <= Q15_ONE as u64 {
        atan_q15(q)
    } else {
        let ratio = (ONE_Q30 / q).min(Q15_ONE as u64);
        PI_1_2_Q15 as u64 - atan_q15(ratio)
    }
}

/// Inverse tangent, in `[−π/2, π/2]`.
///
/// `atan(±∞) = ±π/2`; `|x| < 2^-6` returns `x`.
pub fn atan(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_infinity() {
        return signed_q15(x.sign, PI_1_2_Q15 as u64, mode);
    }
    if x.exp < LINEAR_CUTOFF_THIRD {
        return a;
    }
    signed_q15(x.sign, atan_magnitude(magnitude_q15(&x)), mode)
}

/// Two-argument arctangent: the angle of the point `(x, y)`, in `[−π, π]`.
///
/// The result carries the sign of `y`. Special cases:
///
/// | `y`      | `x`        | Result        |
/// |----------|------------|---------------|
/// | ±∞       | +∞         | ±π/4          |
/// | ±∞       | −∞         | ±3π/4         |
/// | ±∞       | finite     | ±π/2          |
/// | finite   | +∞         | ±0            |
/// | finite   | −∞         | ±π            |
/// | ±0       | `+0`, > 0  | ±0            |
/// | ±0       | `−0`, < 0  | ±π            |
/// | nonzero  | ±0         | ±π/2          |
pub fn atan2(y: Half, x: Half, mode: RoundingMode) -> Half {
    let (dy, dx) = (decompose(y), decompose(x));
    if let Some(nan) = nan_handling::propagate(&dy, &dx) {
        return compose(nan);
    }
    let sign = dy.sign;

    if dy.is_infinity() {
        let angle = match (dx.is_infinity(), dx.is_negative()) {
            (true, true) => PI_3_4_Q15,
            (true, false) => PI_1_4_Q15,
            (false, _) => PI_1_2_Q15,
        };
        return signed_q15(sign, angle as u64, mode);
    }
    if dx.is_infinity() || dy.is_zero() {
        return if dx.is_negative() {
            signed_q15(sign, PI_Q15 as u64, mode)
        } else {
            compose(Decomposed::zero(sign))
        };
    }
    if dx.is_zero() {
        return signed_q15(sign, PI_1_2_Q15 as u64, mode);
    }

    let ny = normalize_denormalized_mantissa(dy);
    let nx = normalize_denormalized_mantissa(dx);
    let complement = (ny.exp, ny.mant) > (nx.exp, nx.mant);
    let (num, den) = if complement { (nx, ny) } else { (ny, nx) };

    let ratio_exp = num.exp - den.exp - i32::from(num.mant < den.mant);
    if !complement && !dx.is_negative() && ratio_exp < LINEAR_CUTOFF_THIRD {
        return small_ratio(sign, &num, &den, mode);
    }

    let quotient = (u64::from(num.mant as u32) << Q15_SHIFT) / u64::from(den.mant as u32);
    let ratio = quotient
        .checked_shr((den.exp - num.exp) as u32)
        .unwrap_or(0)
        .min(Q15_ONE as u64);

    let mut angle = atan_q15(ratio);
    if complement {
        angle = PI_1_2_Q15 as u64 - angle;
    }
    if dx.is_negative() {
        angle = PI_Q15 as u64 - angle;
    }
    if angle == 0 {
        return compose(Decomposed::zero(sign));
    }
    signed_q15(sign, angle, mode)
}

/// Rounds `num / den` directly; `atan(r) = r` to within half an ULP when `r < 2^-6`.
fn small_ratio(sign: u16, num: &Decomposed, den: &Decomposed, mode: RoundingMode) -> Half {
    let dividend = u64::from(num.mant as u32) << RATIO_SHIFT;
    let divisor = u64::from(den.mant as u32);
    let sticky = u64::from(dividend % divisor != 0);
    let exp = num.exp - den.exp - (RATIO_SHIFT - IMPLICIT_SHIFT) as i32;
    compose(round_wide(sign, exp, (dividend / divisor) | sticky, mode))
}
