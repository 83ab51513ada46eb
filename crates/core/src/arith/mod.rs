//! Core arithmetic.
//!
//! Each operation resolves the IEEE special cases (NaN, Infinity, zero) from an explicit
//! case table first, then computes the general case in integers and rounds once through
//! the [`engine`](crate::engine):
//!
//! | Op  | Special cases                                   | General path                    |
//! |-----|-------------------------------------------------|---------------------------------|
//! | add | `∞ − ∞` → NaN; one ∞ → that ∞; `0 + 0` signed   | align, signed sum, round        |
//! | mul | `0 × ∞` → NaN; ∞ → signed ∞; 0 → signed 0       | 16×16-bit product, round        |
//! | div | `∞/∞`, `0/0` → NaN; `x/0` → ∞; `x/∞`, `0/x` → 0 | shifted dividend ÷ divisor, sticky remainder, round |
//!
//! Submodules:
//! - [`sqrt`]: Square root and reciprocal square root.
//! - [`integral`]: trunc/floor/ceil/round/rint and `modf`.
//! - [`manipulation`]: Exponent and neighbour operations (`frexp`, `ldexp`, `nextafter`, ...).

/// Integer rounding.
pub mod integral;
/// Exponent extraction, scaling and neighbouring values.
pub mod manipulation;
/// Square root and reciprocal square root.
pub mod sqrt;

pub use self::integral::{ceil, floor, int, modf, rint, round, round_to_integral, trunc};
pub use self::manipulation::{frexp, ilogb, ldexp, logb, nextafter, scalbn};
pub use self::sqrt::{rsqrt, sqrt, square_root};

use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::{IMPLICIT_SHIFT, SIGN_MASK};
use crate::engine::nan_handling;
use crate::engine::rounding_modes::RoundingMode;
use crate::engine::{align_mantissas, normalize_and_round, normalize_denormalized_mantissa, round_wide};
use crate::half::Half;

/// Extra quotient bits produced by the division general path.
const DIV_SHIFT: u32 = 32;

/// Clears the sign bit. NaN payloads are kept.
#[inline]
pub const fn abs(a: Half) -> Half {
    Half::from_bits(a.to_bits() & !SIGN_MASK)
}

/// Flips the sign bit. NaN payloads are kept.
#[inline]
pub const fn neg(a: Half) -> Half {
    Half::from_bits(a.to_bits() ^ SIGN_MASK)
}

/// Magnitude of `magnitude` with the sign bit of `sign`.
#[inline]
pub const fn copysign(magnitude: Half, sign: Half) -> Half {
    Half::from_bits((magnitude.to_bits() & !SIGN_MASK) | (sign.to_bits() & SIGN_MASK))
}

/// Sign applied to an exact zero sum of operands with different signs.
const fn cancellation_sign(mode: RoundingMode) -> u16 {
    match mode {
        RoundingMode::TowardNegative => SIGN_MASK,
        _ => 0,
    }
}

/// Returns `a + b` rounded with `mode`.
pub fn add(a: Half, b: Half, mode: RoundingMode) -> Half {
    let (x, y) = (decompose(a), decompose(b));
    if let Some(nan) = nan_handling::propagate(&x, &y) {
        return compose(nan);
    }

    match (x.is_infinity(), y.is_infinity()) {
        (true, true) if x.sign != y.sign => return compose(nan_handling::invalid()),
        (true, _) => return a,
        (false, true) => return b,
        (false, false) => {}
    }

    if x.is_zero() && y.is_zero() {
        let sign = if x.sign == y.sign {
            x.sign
        } else {
            cancellation_sign(mode)
        };
        return compose(Decomposed::zero(sign));
    }

    let (x, y) = align_mantissas(x, y);
    let signed = |r: &Decomposed| if r.is_negative() { -r.mant } else { r.mant };
    let sum = signed(&x) + signed(&y);
    if sum == 0 {
        return compose(Decomposed::zero(cancellation_sign(mode)));
    }

    compose(normalize_and_round(Decomposed::new(0, x.exp, sum), mode))
}

/// Returns `a − b` rounded with `mode`; defined as `a + (−b)`.
///
/// NaN operands propagate before the negation, so a NaN `b` keeps its sign.
pub fn sub(a: Half, b: Half, mode: RoundingMode) -> Half {
    let (x, y) = (decompose(a), decompose(b));
    if let Some(nan) = nan_handling::propagate(&x, &y) {
        return compose(nan);
    }
    add(a, neg(b), mode)
}

/// Returns `a × b` rounded with `mode`.
pub fn mul(a: Half, b: Half, mode: RoundingMode) -> Half {
    let (x, y) = (decompose(a), decompose(b));
    if let Some(nan) = nan_handling::propagate(&x, &y) {
        return compose(nan);
    }

    let sign = x.sign ^ y.sign;
    if (x.is_infinity() && y.is_zero()) || (x.is_zero() && y.is_infinity()) {
        return compose(nan_handling::invalid());
    }
    if x.is_infinity() || y.is_infinity() {
        return compose(Decomposed::infinity(sign));
    }
    if x.is_zero() || y.is_zero() {
        return compose(Decomposed::zero(sign));
    }

    // (mx × 2^(ex−15)) × (my × 2^(ey−15)) = product × 2^((ex + ey − 15) − 15)
    let product = u64::from(x.mant as u32) * u64::from(y.mant as u32);
    let exp = x.exp + y.exp - IMPLICIT_SHIFT as i32;
    compose(round_wide(sign, exp, product, mode))
}

/// Returns `a ÷ b` rounded with `mode`.
pub fn div(a: Half, b: Half, mode: RoundingMode) -> Half {
    let (x, y) = (decompose(a), decompose(b));
    if let Some(nan) = nan_handling::propagate(&x, &y) {
        return compose(nan);
    }

    let sign = x.sign ^ y.sign;
    if (x.is_infinity() && y.is_infinity()) || (x.is_zero() && y.is_zero()) {
        return compose(nan_handling::invalid());
    }
    if x.is_infinity() || y.is_zero() {
        return compose(Decomposed::infinity(sign));
    }
    if y.is_infinity() || x.is_zero() {
        return compose(Decomposed::zero(sign));
    }

    let (x, y) = (
        normalize_denormalized_mantissa(x),
        normalize_denormalized_mantissa(y),
    );
    let dividend = u64::from(x.mant as u32) << DIV_SHIFT;
    let divisor = u64::from(y.mant as u32);
    let quotient = dividend / divisor;
    let sticky = u64::from(dividend % divisor != 0);

    // mx / my × 2^(ex − ey) = quotient × 2^(ex − ey − 32)
    let exp = x.exp - y.exp - (DIV_SHIFT - IMPLICIT_SHIFT) as i32;
    compose(round_wide(sign, exp, quotient | sticky, mode))
}

/// Returns `1 ÷ a` rounded with `mode`.
///
/// `inv(±∞) = ±0`, `inv(±0) = ±∞`.
pub fn inv(a: Half, mode: RoundingMode) -> Half {
    div(Half::ONE, a, mode)
}
