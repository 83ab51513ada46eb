//! `f32` boundary conversion.
//!
//! Binary32 values only cross into the engine here; no operation uses host floating point
//! internally.
//!
//! - **Narrowing** ([`from_f32`]): Infinity and NaN map to their binary16 counterparts (NaN
//!   keeps the top ten payload bits, or becomes quiet if those are all zero). Finite values
//!   are rounded once by the engine, which produces Infinity on overflow, subnormals below
//!   the normal range and signed zero past the subnormal range.
//! - **Widening** ([`to_f32`]): Exact. Subnormals are renormalized since every binary16
//!   value is a normal `f32`.

use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::{
    EXP_MASK, EXP_SENTINEL, FRAC_BITS, IMPLICIT_BIT, IMPLICIT_SHIFT, PRECISION_SHIFT, QUIET_BIT,
};
use crate::engine::rounding_modes::RoundingMode;
use crate::engine::{normalize_denormalized_mantissa, round_wide};
use crate::half::Half;

/// Bit mask for the sign bit of a binary32 value.
const F32_SIGN_BIT: u32 = 0x8000_0000;

/// Bit mask for the exponent field of a binary32 value.
const F32_EXP_MASK: u32 = 0x7F80_0000;

/// Bit mask for the fraction field of a binary32 value.
const F32_FRAC_MASK: u32 = 0x007F_FFFF;

/// Width of the binary32 fraction field.
const F32_FRAC_BITS: u32 = 23;

/// Exponent bias of binary32.
const F32_EXP_BIAS: i32 = 127;

/// Distance between the binary32 and binary16 fraction fields.
const PAYLOAD_SHIFT: u32 = F32_FRAC_BITS - FRAC_BITS;

/// Converts a binary32 value to binary16, rounding with `mode`.
///
/// # Arguments
///
/// * `value` - The `f32` to narrow.
/// * `mode` - Rounding direction for inexact results.
///
/// # Returns
///
/// The nearest binary16 value in the direction selected by `mode`.
pub fn from_f32(value: f32, mode: RoundingMode) -> Half {
    let bits = value.to_bits();
    let sign = ((bits & F32_SIGN_BIT) >> 16) as u16;
    let field = ((bits & F32_EXP_MASK) >> F32_FRAC_BITS) as i32;
    let fraction = bits & F32_FRAC_MASK;

    if field == 0xFF {
        if fraction == 0 {
            return compose(Decomposed::infinity(sign));
        }
        let payload = (fraction >> PAYLOAD_SHIFT) as u16;
        let payload = if payload == 0 { QUIET_BIT } else { payload };
        return Half::from_bits(sign | EXP_MASK | payload);
    }

    if field == 0 && fraction == 0 {
        return compose(Decomposed::zero(sign));
    }

    let (exp, mant) = if field == 0 {
        (1 - F32_EXP_BIAS, fraction)
    } else {
        (field - F32_EXP_BIAS, fraction | (1 << F32_FRAC_BITS))
    };

    // mant × 2^(exp − 23) re-expressed against the record's implicit bit at position 15.
    let exp = exp - (F32_FRAC_BITS - IMPLICIT_SHIFT) as i32;
    compose(round_wide(sign, exp, u64::from(mant), mode))
}

/// Converts a binary16 value to binary32. Always exact.
pub fn to_f32(value: Half) -> f32 {
    let record = decompose(value);
    let sign = u32::from(record.sign) << 16;

    let bits = if record.exp == EXP_SENTINEL {
        F32_EXP_MASK | (((record.mant >> PRECISION_SHIFT) as u32) << PAYLOAD_SHIFT)
    } else if record.mant == 0 {
        0
    } else {
        let normal = normalize_denormalized_mantissa(record);
        let field = (normal.exp + F32_EXP_BIAS) as u32;
        let fraction = ((normal.mant - IMPLICIT_BIT) as u32) << (F32_FRAC_BITS - IMPLICIT_SHIFT);
        (field << F32_FRAC_BITS) | fraction
    };

    f32::from_bits(sign | bits)
}
