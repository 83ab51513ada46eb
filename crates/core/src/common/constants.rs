//! Format Constants.
//!
//! This module defines the constants that tie the encoded word to the working record. It
//! includes:
//! 1. **Field Constants:** Masks and shifts of the sign, exponent and fraction fields.
//! 2. **Record Constants:** Precision extension, implicit-bit position and exponent range
//!    of the decomposed record.
//! 3. **Fixed-Point Constants:** Q15 scale and the Q15 values of `ln 2`, `π` and friends.

/// Sign bit of an encoded word.
pub const SIGN_MASK: u16 = 0x8000;

/// Exponent field of an encoded word (bits 14–10).
pub const EXP_MASK: u16 = 0x7C00;

/// Fraction field of an encoded word (bits 9–0).
pub const FRAC_MASK: u16 = 0x03FF;

/// Width of the fraction field in bits.
pub const FRAC_BITS: u32 = 10;

/// Exponent bias of binary16.
pub const EXP_BIAS: i32 = 15;

/// Raw exponent field value reserved for Infinity and NaN.
pub const EXP_FIELD_SPECIAL: i32 = 0x1F;

/// Most significant fraction bit; set in every quiet NaN.
pub const QUIET_BIT: u16 = 0x0200;

/// Low working bits appended below the fraction for guard/round/sticky information.
pub const PRECISION_SHIFT: u32 = 5;

/// Position of the implicit leading bit inside a record mantissa.
pub const IMPLICIT_SHIFT: u32 = FRAC_BITS + PRECISION_SHIFT;

/// Implicit leading bit of a normalized record mantissa.
pub const IMPLICIT_BIT: i32 = 1 << IMPLICIT_SHIFT;

/// Mask of the working bits below the retained fraction.
pub const GUARD_MASK: i32 = (1 << PRECISION_SHIFT) - 1;

/// Largest record mantissa a finite value can carry (all fraction bits set).
pub const MANT_MAX: i32 = (IMPLICIT_BIT << 1) - (1 << PRECISION_SHIFT);

/// Exponent of zero, subnormals and the smallest normal binade.
pub const EXP_MIN: i32 = 1 - EXP_BIAS;

/// Exponent of the largest finite binade.
pub const EXP_MAX: i32 = EXP_BIAS;

/// Sentinel exponent of Infinity and NaN records.
pub const EXP_SENTINEL: i32 = EXP_BIAS + 1;

/// Number of fractional bits of the Q15 fixed-point format.
pub const Q15_SHIFT: u32 = 15;

/// 1.0 in Q15.
pub const Q15_ONE: i32 = 1 << Q15_SHIFT;

/// `ln 2` in Q15.
pub const LN2_Q15: i32 = 22713;

/// `1 / ln 2` in Q15.
pub const INV_LN2_Q15: i32 = 47274;

/// `1 / ln 10` in Q15.
pub const INV_LN10_Q15: i32 = 14231;

/// `π` in Q15.
pub const PI_Q15: i32 = 102944;

/// `π / 2` in Q15; also the phase offset of `acos`.
pub const PI_1_2_Q15: i32 = 51472;

/// `π / 4` in Q15.
pub const PI_1_4_Q15: i32 = 25736;

/// `3π / 4` in Q15.
pub const PI_3_4_Q15: i32 = 77208;
