//! Table-driven transcendental functions.
//!
//! All functions work in Q15 fixed point (`value × 2^15`). Each one resolves its special
//! cases from an explicit table, reduces the argument into the domain of one of the
//! [`tables`], looks it up through [`table_interpolate`], and rounds the fixed-point result
//! once through the engine.
//!
//! Submodules:
//! - [`tables`]: Lookup-table contract and lazy generation.
//! - [`exp_log`]: `ln`, `log2`, `log10`, `exp`, `pow`.
//! - [`trig`]: `sin`, `cos`, `tan` and the angle reduction they share.
//! - [`inverse_trig`]: `asin`, `acos`, `atan`, `atan2`.
//! - [`hyperbolic`]: `sinh`, `cosh`, `tanh`, `asinh`, `acosh`, `atanh`.

/// `ln`, `log2`, `log10`, `exp` and `pow`.
pub mod exp_log;
/// Hyperbolic functions and their inverses.
pub mod hyperbolic;
/// Inverse trigonometric functions.
pub mod inverse_trig;
/// Lookup tables.
pub mod tables;
/// Sine, cosine and tangent.
pub mod trig;

pub use self::exp_log::{exp, ln, log2, log10, pow};
pub use self::hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use self::inverse_trig::{acos, asin, atan, atan2};
pub use self::trig::{cos, reduce_radian_uword, sin, tan};

use crate::codec::Decomposed;
use crate::common::constants::{LN2_Q15, Q15_SHIFT, SIGN_MASK};
use crate::engine::round_wide;
use crate::engine::rounding_modes::RoundingMode;

use self::tables::{EXP_TABLE_BITS, LN_TABLE_SIZE, tables};

/// Fractional index bits when a Q15 value in `[0, 1]` addresses a 1024-interval table.
pub(crate) const Q15_INDEX_FRAC_BITS: u32 = Q15_SHIFT - LN_TABLE_SIZE.trailing_zeros();

/// Fractional bits of the interpolated index into the exponential table.
const EXP_INTERP_BITS: u32 = 8;

/// Below `2^-5` the cubic term of `x ± x³/6` is under half an ULP.
pub(crate) const LINEAR_CUTOFF_SIXTH: i32 = -5;

/// Below `2^-6` the cubic term of `x ± x³/3` is under half an ULP.
pub(crate) const LINEAR_CUTOFF_THIRD: i32 = -6;

/// Linearly interpolates a lookup table at a fixed-point index.
///
/// # Arguments
///
/// * `table` - Table with a trailing guard entry.
/// * `index` - Fixed-point position: integer part selects the entry, the low `frac_bits`
///   blend toward the next one.
/// * `frac_bits` - Number of fractional bits in `index`.
///
/// # Returns
///
/// The interpolated entry, rounded to nearest. Positions past the end clamp to the last
/// entry.
pub fn table_interpolate(table: &[u16], index: u32, frac_bits: u32) -> u16 {
    let last = table.len().saturating_sub(1);
    let lower = ((index >> frac_bits) as usize).min(last);
    let upper = (lower + 1).min(last);
    let frac = i64::from(index & ((1 << frac_bits) - 1));
    let rounding = if frac_bits == 0 { 0 } else { 1 << (frac_bits - 1) };

    let v0 = i64::from(table[lower]);
    let v1 = i64::from(table[upper]);
    (v0 + (((v1 - v0) * frac + rounding) >> frac_bits)) as u16
}

/// `|x| × 2^15`, truncated. The record must be finite.
pub(crate) const fn magnitude_q15(record: &Decomposed) -> u64 {
    let mant = record.mant as u64;
    if record.exp >= 0 {
        mant << record.exp
    } else if record.exp > -(u64::BITS as i32) {
        mant >> -record.exp
    } else {
        0
    }
}

/// Rounds a signed Q15 value.
pub(crate) fn from_q15(value: i64, mode: RoundingMode) -> Decomposed {
    let sign = if value < 0 { SIGN_MASK } else { 0 };
    round_wide(sign, 0, value.unsigned_abs(), mode)
}

/// Computes `e^x` for a Q15 argument.
///
/// Splits `x = k·ln 2 + r` with `0 ≤ r < ln 2` and interpolates `e^r` from the exponential
/// table.
///
/// # Returns
///
/// `(mant, k)` with `e^x ≈ mant × 2^(k − 15)` and `mant` in `[2^15, 2^16)`.
pub(crate) fn exp_fixed(x: i64) -> (u64, i32) {
    let ln2 = i64::from(LN2_Q15);
    let k = x.div_euclid(ln2);
    let r = x.rem_euclid(ln2);
    let index = (r << (EXP_TABLE_BITS + EXP_INTERP_BITS)) / ln2;
    let mant = table_interpolate(&tables().exp, index as u32, EXP_INTERP_BITS);
    (u64::from(mant), k as i32)
}
