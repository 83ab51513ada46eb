//! Bit codec.
//!
//! Converts between the packed 16-bit encoding and the [`Decomposed`] working record that
//! every operation computes on:
//!
//! | Exponent field | Record exponent  | Record mantissa                          |
//! |----------------|------------------|------------------------------------------|
//! | 0              | [`EXP_MIN`]      | fraction << 5 (no implicit bit)          |
//! | 1–30           | field − 15       | (fraction << 5) \| implicit bit (bit 15) |
//! | 31             | [`EXP_SENTINEL`] | fraction << 5 (zero = Inf, else NaN)     |
//!
//! Subnormals share the exponent of the smallest normal binade, so every finite record
//! has the value `mant × 2^(exp − 15)`.
//!
//! The `float32` submodule holds the `f32` boundary conversion.

/// `f32` ↔ binary16 boundary conversion.
pub mod float32;

use crate::common::constants::{
    EXP_BIAS, EXP_FIELD_SPECIAL, EXP_MASK, EXP_MIN, EXP_SENTINEL, FRAC_BITS, FRAC_MASK,
    IMPLICIT_BIT, PRECISION_SHIFT, QUIET_BIT, SIGN_MASK,
};
use crate::half::Half;

/// Unpacked binary16 value.
///
/// `sign` is either `0` or [`SIGN_MASK`]. `mant` holds the fraction shifted left by
/// [`PRECISION_SHIFT`] so the low bits are free for guard/round/sticky information, with
/// the implicit leading bit materialized at bit 15 for normalized values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decomposed {
    /// Sign bit, `0` or `0x8000`.
    pub sign: u16,
    /// Unbiased exponent.
    pub exp: i32,
    /// Extended-precision mantissa.
    pub mant: i32,
}

impl Decomposed {
    /// Builds a record from its parts.
    #[inline]
    pub const fn new(sign: u16, exp: i32, mant: i32) -> Self {
        Self { sign, exp, mant }
    }

    /// Signed zero.
    #[inline]
    pub const fn zero(sign: u16) -> Self {
        Self::new(sign, EXP_MIN, 0)
    }

    /// Signed Infinity.
    #[inline]
    pub const fn infinity(sign: u16) -> Self {
        Self::new(sign, EXP_SENTINEL, 0)
    }

    /// Internally generated NaN: sentinel exponent, mantissa 1.
    ///
    /// The payload does not survive the precision shift, so it composes to the quiet
    /// pattern `sign | 0x7E00`.
    #[inline]
    pub const fn nan(sign: u16) -> Self {
        Self::new(sign, EXP_SENTINEL, 1)
    }

    /// Returns `true` when the sign bit is set.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.sign != 0
    }

    /// Returns the same record with the sign replaced.
    #[inline]
    #[must_use]
    pub const fn with_sign(self, sign: u16) -> Self {
        Self::new(sign, self.exp, self.mant)
    }
}

/// Unpacks an encoded word into a working record.
///
/// Total over all 65536 patterns.
///
/// # Examples
///
/// ```
/// use halfsoft_core::Half;
/// use halfsoft_core::codec::decompose;
///
/// let one = decompose(Half::ONE);
/// assert_eq!((one.sign, one.exp, one.mant), (0, 0, 1 << 15));
/// ```
pub const fn decompose(value: Half) -> Decomposed {
    let bits = value.to_bits();
    let sign = bits & SIGN_MASK;
    let field = ((bits & EXP_MASK) >> FRAC_BITS) as i32;
    let mant = ((bits & FRAC_MASK) as i32) << PRECISION_SHIFT;

    match field {
        0 => Decomposed::new(sign, EXP_MIN, mant),
        EXP_FIELD_SPECIAL => Decomposed::new(sign, EXP_SENTINEL, mant),
        _ => Decomposed::new(sign, field - EXP_BIAS, mant | IMPLICIT_BIT),
    }
}

/// Packs a working record back into an encoded word.
///
/// The record must be canonical, as returned by [`decompose`] or by
/// [`normalize_and_round`](crate::engine::normalize_and_round): a sentinel, a value at
/// [`EXP_MIN`] without the implicit bit (zero or subnormal), or a normalized value.
pub const fn compose(record: Decomposed) -> Half {
    let fraction = ((record.mant >> PRECISION_SHIFT) as u16) & FRAC_MASK;

    let bits = if record.exp >= EXP_SENTINEL {
        if record.mant == 0 {
            EXP_MASK
        } else if fraction == 0 {
            EXP_MASK | QUIET_BIT
        } else {
            EXP_MASK | fraction
        }
    } else if record.mant < IMPLICIT_BIT {
        fraction
    } else {
        (((record.exp + EXP_BIAS) as u16) << FRAC_BITS) | fraction
    };

    Half::from_bits(record.sign | bits)
}
