//! Normalization and rounding engine.
//!
//! Every arithmetic and transcendental result funnels through this module before it is
//! packed. Operations hand over an exact (or sticky-jammed) intermediate `mant × 2^(exp −
//! 15)` and the engine:
//! 1. **Normalizes:** Moves the leading one to the implicit-bit position, never letting the
//!    exponent fall below [`EXP_MIN`]; values that would need to are shifted right instead,
//!    which produces subnormals.
//! 2. **Rounds:** Applies the requested [`RoundingMode`] to the five working bits below the
//!    retained fraction; a carry out of the mantissa renormalizes by one bit.
//! 3. **Clamps:** Exponents past [`EXP_MAX`] become Infinity or the largest finite value,
//!    depending on the mode.
//!
//! Submodules:
//! - [`rounding_modes`]: The five IEEE rounding directions.
//! - [`nan_handling`]: NaN propagation and the default NaN.

/// NaN propagation and default NaN generation.
pub mod nan_handling;

/// Rounding mode definitions.
pub mod rounding_modes;

use std::cmp::Ordering;

use crate::codec::Decomposed;
use crate::common::constants::{
    EXP_MAX, EXP_MIN, GUARD_MASK, IMPLICIT_BIT, IMPLICIT_SHIFT, MANT_MAX, PRECISION_SHIFT,
    SIGN_MASK,
};

use self::rounding_modes::RoundingMode;

/// Largest alignment shift; anything further collapses to the sticky bit.
const ALIGN_SHIFT_CAP: i32 = 31;

/// Shifts `value` right by `shift`, OR-ing every discarded bit into bit 0.
#[inline]
pub(crate) const fn shift_right_sticky(value: u64, shift: u32) -> u64 {
    if shift == 0 {
        value
    } else if shift >= u64::BITS {
        (value != 0) as u64
    } else {
        let lost = value & ((1 << shift) - 1);
        (value >> shift) | (lost != 0) as u64
    }
}

/// Rounds the magnitude `mant × 2^(exp − 15)` to a canonical record.
///
/// Core of [`normalize_and_round`], taking a wide unsigned magnitude so products and
/// quotients can be rounded once without pre-truncation.
pub(crate) fn round_wide(sign: u16, exp: i32, mant: u64, mode: RoundingMode) -> Decomposed {
    if mant == 0 {
        return Decomposed::zero(sign);
    }

    let msb = (u64::BITS - 1 - mant.leading_zeros()) as i32;
    let target = IMPLICIT_SHIFT as i32;
    let mut exp = exp + (msb - target);
    let mut mant = if msb > target {
        shift_right_sticky(mant, (msb - target) as u32)
    } else {
        mant << (target - msb)
    };

    if exp < EXP_MIN {
        let shift = (EXP_MIN - exp).min(u64::BITS as i32) as u32;
        mant = shift_right_sticky(mant, shift);
        exp = EXP_MIN;
    }

    let discarded = mant & GUARD_MASK as u64;
    let half = 1 << (PRECISION_SHIFT - 1);
    let odd = mant & (1 << PRECISION_SHIFT) != 0;
    if mode.rounds_away(sign != 0, discarded, half, odd) {
        mant += 1 << PRECISION_SHIFT;
    }
    mant &= !(GUARD_MASK as u64);

    if mant > MANT_MAX as u64 {
        mant >>= 1;
        exp += 1;
    }

    if exp > EXP_MAX {
        return overflow(sign, mode);
    }

    Decomposed::new(sign, exp, mant as i32)
}

/// Result of a magnitude too large for binary16.
pub(crate) const fn overflow(sign: u16, mode: RoundingMode) -> Decomposed {
    if mode.overflows_to_infinity(sign != 0) {
        Decomposed::infinity(sign)
    } else {
        Decomposed::new(sign, EXP_MAX, MANT_MAX)
    }
}

/// Result of a nonzero magnitude too small to reach the smallest subnormal.
pub(crate) fn underflow(sign: u16, mode: RoundingMode) -> Decomposed {
    round_wide(sign, EXP_MIN - 2 * IMPLICIT_SHIFT as i32, 1, mode)
}

/// Renormalizes and rounds a working record.
///
/// `result.mant` may be negative, in which case the sign is flipped and its magnitude
/// rounded. Sentinel records are not accepted; callers resolve Infinity and NaN before
/// reaching the general path.
///
/// # Arguments
///
/// * `result` - Intermediate value `mant × 2^(exp − 15)`.
/// * `mode` - Rounding direction.
///
/// # Returns
///
/// A canonical record ready for [`compose`](crate::codec::compose).
pub fn normalize_and_round(result: Decomposed, mode: RoundingMode) -> Decomposed {
    let (sign, magnitude) = if result.mant < 0 {
        (result.sign ^ SIGN_MASK, result.mant.unsigned_abs())
    } else {
        (result.sign, result.mant as u32)
    };
    round_wide(sign, result.exp, u64::from(magnitude), mode)
}

/// Aligns two finite records to the larger exponent.
///
/// The operand with the smaller exponent is shifted right by the exponent difference
/// (capped at 31), OR-reducing the shifted-out bits into its least-significant bit. The
/// other operand is returned untouched.
pub fn align_mantissas(a: Decomposed, b: Decomposed) -> (Decomposed, Decomposed) {
    match a.exp.cmp(&b.exp) {
        Ordering::Equal => (a, b),
        Ordering::Greater => (a, shift_to_exponent(b, a.exp)),
        Ordering::Less => (shift_to_exponent(a, b.exp), b),
    }
}

fn shift_to_exponent(record: Decomposed, exp: i32) -> Decomposed {
    let shift = (exp - record.exp).min(ALIGN_SHIFT_CAP) as u32;
    let mant = shift_right_sticky(u64::from(record.mant as u32), shift);
    Decomposed::new(record.sign, exp, mant as i32)
}

/// Moves the leading one of a subnormal record to the implicit-bit position.
///
/// The exponent drops below [`EXP_MIN`] by the shift amount, so the value is unchanged.
/// Normalized records, zero and sentinels are returned as-is.
pub const fn normalize_denormalized_mantissa(record: Decomposed) -> Decomposed {
    if record.exp != EXP_MIN || record.mant == 0 || record.mant >= IMPLICIT_BIT {
        return record;
    }
    let shift = record.mant.leading_zeros() as i32 - (i32::BITS - 1 - IMPLICIT_SHIFT) as i32;
    Decomposed::new(record.sign, record.exp - shift, record.mant << shift)
}
