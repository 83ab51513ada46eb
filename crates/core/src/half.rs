//! The binary16 value type.
//!
//! [`Half`] wraps the encoded 16-bit word. Equality and hashing are bitwise, so
//! `Half::NAN == Half::NAN` and `Half::ZERO != Half::NEG_ZERO`; IEEE ordering is available
//! through [`Half::compare`]. Operator overloads (`+ - * /` and unary `-`) round to
//! nearest-even; use [`HalfFpu`](crate::HalfFpu) or the free functions for other modes.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::arith;
use crate::classify;
use crate::codec::{decompose, float32};
use crate::common::constants::{EXP_MASK, FRAC_MASK, SIGN_MASK};
use crate::common::error::ParseError;
use crate::engine::nan_handling::{DEFAULT_NAN_BITS, QUIET_NAN_BITS};
use crate::engine::rounding_modes::RoundingMode;

/// IEEE 754 binary16 value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    /// `+0.0`.
    pub const ZERO: Self = Self(0x0000);
    /// `−0.0`.
    pub const NEG_ZERO: Self = Self(0x8000);
    /// `1.0`.
    pub const ONE: Self = Self(0x3C00);
    /// `−1.0`.
    pub const NEG_ONE: Self = Self(0xBC00);
    /// `2.0`.
    pub const TWO: Self = Self(0x4000);
    /// `0.5`.
    pub const HALF: Self = Self(0x3800);
    /// `+∞`.
    pub const INFINITY: Self = Self(0x7C00);
    /// `−∞`.
    pub const NEG_INFINITY: Self = Self(0xFC00);
    /// Positive quiet NaN.
    pub const NAN: Self = Self(QUIET_NAN_BITS);
    /// Default NaN returned by invalid operations (sign bit set).
    pub const DEFAULT_NAN: Self = Self(DEFAULT_NAN_BITS);
    /// Largest finite value, 65504.
    pub const MAX: Self = Self(0x7BFF);
    /// Most negative finite value, −65504.
    pub const MIN: Self = Self(0xFBFF);
    /// Smallest positive normal value, 2⁻¹⁴.
    pub const MIN_POSITIVE: Self = Self(0x0400);
    /// Smallest positive subnormal value, 2⁻²⁴.
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);
    /// Difference between 1.0 and the next larger value, 2⁻¹⁰.
    pub const EPSILON: Self = Self(0x1400);

    /// Wraps an encoded word.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the encoded word.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Narrows an `f32`, rounding to nearest-even.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        float32::from_f32(value, RoundingMode::NearestEven)
    }

    /// Widens to `f32` exactly.
    #[inline]
    pub fn to_f32(self) -> f32 {
        float32::to_f32(self)
    }

    /// Widens to `f64` exactly.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.to_f32())
    }

    /// Returns `true` for any NaN pattern.
    #[inline]
    pub const fn is_nan(self) -> bool {
        decompose(self).is_nan()
    }

    /// Returns `true` for `±∞`.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        decompose(self).is_infinity()
    }

    /// Returns `true` unless the value is Infinity or NaN.
    #[inline]
    pub const fn is_finite(self) -> bool {
        decompose(self).is_finite()
    }

    /// Returns `true` for `±0`.
    #[inline]
    pub const fn is_zero(self) -> bool {
        decompose(self).is_zero()
    }

    /// Returns `true` for nonzero values below the normal range.
    #[inline]
    pub const fn is_subnormal(self) -> bool {
        decompose(self).is_subnormal()
    }

    /// Returns `true` for finite, nonzero, non-subnormal values.
    #[inline]
    pub const fn is_normal(self) -> bool {
        let exp = self.0 & EXP_MASK;
        exp != 0 && exp != EXP_MASK
    }

    /// Returns `true` when the sign bit is set, including `−0` and negative NaNs.
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Returns `true` when the sign bit is clear.
    #[inline]
    pub const fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }

    /// Fraction field of the encoding.
    #[inline]
    pub const fn fraction_bits(self) -> u16 {
        self.0 & FRAC_MASK
    }

    /// Clears the sign bit.
    #[inline]
    #[must_use]
    pub const fn abs(self) -> Self {
        arith::abs(self)
    }

    /// Flips the sign bit.
    #[inline]
    #[must_use]
    pub const fn negate(self) -> Self {
        arith::neg(self)
    }

    /// Magnitude of `self` with the sign of `sign`.
    #[inline]
    #[must_use]
    pub const fn copysign(self, sign: Self) -> Self {
        arith::copysign(self, sign)
    }

    /// IEEE comparison; `None` when either operand is NaN.
    #[inline]
    pub fn compare(self, other: Self) -> Option<Ordering> {
        classify::compare(self, other)
    }

    /// Smaller of two values, ignoring a single NaN.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        classify::min(self, other)
    }

    /// Larger of two values, ignoring a single NaN.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        classify::max(self, other)
    }
}

impl From<Half> for f32 {
    fn from(value: Half) -> Self {
        value.to_f32()
    }
}

impl From<Half> for f64 {
    fn from(value: Half) -> Self {
        value.to_f64()
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Half({:#06x} = {})", self.0, self.to_f32())
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::LowerHex for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for Half {
    type Err = ParseError;

    /// Parses a decimal number (`1.5`, `-inf`, `nan`) rounded to nearest-even, or an exact
    /// bit pattern written as `0x3c00`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if let Some(hex) = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            return u16::from_str_radix(hex, 16)
                .map(Self::from_bits)
                .map_err(|_| ParseError::InvalidHalf(s.to_owned()));
        }
        text.parse::<f32>()
            .map(Self::from_f32)
            .map_err(|_| ParseError::InvalidHalf(s.to_owned()))
    }
}

impl Add for Half {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        arith::add(self, rhs, RoundingMode::NearestEven)
    }
}

impl Sub for Half {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        arith::sub(self, rhs, RoundingMode::NearestEven)
    }
}

impl Mul for Half {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        arith::mul(self, rhs, RoundingMode::NearestEven)
    }
}

impl Div for Half {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        arith::div(self, rhs, RoundingMode::NearestEven)
    }
}

impl Neg for Half {
    type Output = Self;

    fn neg(self) -> Self {
        arith::neg(self)
    }
}
