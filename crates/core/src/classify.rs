//! Classification and comparison.
//!
//! This module provides:
//! 1. **Predicates:** NaN, Infinity, zero and subnormal tests on [`Decomposed`] records.
//! 2. **Comparison:** IEEE ordering with `+0 == −0` and NaN unordered ([`compare`]).
//! 3. **Integer detection:** [`check_int`], which drives the parity decisions of `pow`.
//! 4. **Selection:** [`min`] and [`max`], which prefer a number over a NaN.

use std::cmp::Ordering;

use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::{EXP_MIN, EXP_SENTINEL, IMPLICIT_BIT, IMPLICIT_SHIFT};
use crate::engine::nan_handling;
use crate::half::Half;

impl Decomposed {
    /// Sentinel exponent with a nonzero mantissa.
    #[inline]
    pub const fn is_nan(&self) -> bool {
        self.exp == EXP_SENTINEL && self.mant != 0
    }

    /// Sentinel exponent with a zero mantissa.
    #[inline]
    pub const fn is_infinity(&self) -> bool {
        self.exp == EXP_SENTINEL && self.mant == 0
    }

    /// Minimum exponent with a zero mantissa.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.exp == EXP_MIN && self.mant == 0
    }

    /// Minimum exponent with a nonzero mantissa below the implicit bit.
    #[inline]
    pub const fn is_subnormal(&self) -> bool {
        self.exp == EXP_MIN && self.mant != 0 && self.mant < IMPLICIT_BIT
    }

    /// Neither Infinity nor NaN.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        self.exp != EXP_SENTINEL
    }
}

/// Compares two values under IEEE 754 ordering.
///
/// # Returns
///
/// `None` (unordered) iff either operand is NaN. Otherwise the values are ordered by sign,
/// then exponent, then mantissa, with the relation reversed for negative operands and
/// `+0 == −0`.
pub fn compare(a: Half, b: Half) -> Option<Ordering> {
    let (x, y) = (decompose(a), decompose(b));
    if x.is_nan() || y.is_nan() {
        return None;
    }
    if x.is_zero() && y.is_zero() {
        return Some(Ordering::Equal);
    }
    if x.sign != y.sign {
        return Some(if x.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        });
    }

    let magnitude = (x.exp, x.mant).cmp(&(y.exp, y.mant));
    Some(if x.is_negative() {
        magnitude.reverse()
    } else {
        magnitude
    })
}

/// Returns the exact integer value of a record, if it has one.
///
/// Zero yields `Some(0)`. NaN, Infinity, subnormals and any value with nonzero fraction
/// bits yield `None`. Every finite binary16 integer fits in an `i32`.
pub const fn check_int(record: &Decomposed) -> Option<i32> {
    if !record.is_finite() {
        return None;
    }
    if record.is_zero() {
        return Some(0);
    }
    if record.mant < IMPLICIT_BIT || record.exp < 0 {
        return None;
    }

    let shift = IMPLICIT_SHIFT as i32 - record.exp;
    if (record.mant >> shift) << shift != record.mant {
        return None;
    }
    let magnitude = record.mant >> shift;
    Some(if record.is_negative() {
        -magnitude
    } else {
        magnitude
    })
}

/// Returns the smaller operand.
///
/// A single NaN operand is ignored; two NaNs give a quiet NaN with the sign of `a`.
/// `min(+0, −0)` is `−0`.
pub fn min(a: Half, b: Half) -> Half {
    select(a, b, Ordering::Less)
}

/// Returns the larger operand.
///
/// A single NaN operand is ignored; two NaNs give a quiet NaN with the sign of `a`.
/// `max(+0, −0)` is `+0`.
pub fn max(a: Half, b: Half) -> Half {
    select(a, b, Ordering::Greater)
}

fn select(a: Half, b: Half, wanted: Ordering) -> Half {
    let (x, y) = (decompose(a), decompose(b));
    match (x.is_nan(), y.is_nan()) {
        (true, true) => return compose(Decomposed::nan(x.sign)),
        (true, false) => return b,
        (false, true) => return a,
        (false, false) => {}
    }

    if x.is_zero() && y.is_zero() {
        let prefer_negative = wanted == Ordering::Less;
        return if x.is_negative() == prefer_negative {
            a
        } else {
            b
        };
    }

    match compare(a, b) {
        Some(ordering) if ordering == wanted.reverse() => b,
        _ => a,
    }
}

/// Propagates a NaN operand of a unary operation, if any, as an encoded word.
pub(crate) const fn nan_result(record: &Decomposed) -> Option<Half> {
    match nan_handling::propagate_one(record) {
        Some(nan) => Some(compose(nan)),
        None => None,
    }
}
