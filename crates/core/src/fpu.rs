//! Half-precision floating-point unit.
//!
//! [`HalfFpu`] is the rounding-mode context. It replaces a process-wide "current rounding
//! mode" with a value owned by the caller: every method reads the mode from `self`, and
//! [`HalfFpu::set_rounding_mode`] only affects that context. Each method forwards to the
//! free function of the same name in [`arith`], [`classify`] or [`transcendental`].

use std::cmp::Ordering;

use tracing::trace;

use crate::arith;
use crate::classify;
use crate::codec::float32;
use crate::config::Config;
use crate::engine::rounding_modes::RoundingMode;
use crate::half::Half;
use crate::op::Op;
use crate::transcendental;

/// Generates context methods for unary operations that round with the context mode.
macro_rules! rounded_unary {
    ($($(#[$doc:meta])* $name:ident => $path:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(&self, a: Half) -> Half {
                $path(a, self.rounding)
            }
        )*
    };
}

/// Generates context methods for binary operations that round with the context mode.
macro_rules! rounded_binary {
    ($($(#[$doc:meta])* $name:ident => $path:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(&self, a: Half, b: Half) -> Half {
                $path(a, b, self.rounding)
            }
        )*
    };
}

/// Rounding-mode context for binary16 operations.
///
/// # Examples
///
/// ```
/// use halfsoft_core::{Half, HalfFpu, RoundingMode};
///
/// let mut fpu = HalfFpu::default();
/// let third = fpu.div(Half::ONE, Half::from_f32(3.0));
/// assert_eq!(third.to_bits(), 0x3555);
///
/// fpu.set_rounding_mode(RoundingMode::TowardPositive);
/// assert_eq!(fpu.div(Half::ONE, Half::from_f32(3.0)).to_bits(), 0x3556);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HalfFpu {
    rounding: RoundingMode,
}

impl HalfFpu {
    /// Creates a context from a configuration.
    pub const fn new(config: &Config) -> Self {
        Self {
            rounding: config.rounding.mode,
        }
    }

    /// Creates a context with an explicit rounding mode.
    pub const fn with_rounding_mode(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    /// Returns the current rounding mode.
    #[inline]
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// Replaces the rounding mode used by subsequent operations on this context.
    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        trace!(from = %self.rounding, to = %mode, "rounding mode changed");
        self.rounding = mode;
    }

    /// Narrows an `f32` with the context rounding mode.
    #[inline]
    pub fn from_f32(&self, value: f32) -> Half {
        float32::from_f32(value, self.rounding)
    }

    rounded_binary! {
        /// `a + b`.
        add => arith::add;
        /// `a − b`.
        sub => arith::sub;
        /// `a × b`.
        mul => arith::mul;
        /// `a ÷ b`.
        div => arith::div;
        /// `a^b`.
        pow => transcendental::pow;
        /// Angle of the point `(x, y)`; `y` comes first.
        atan2 => transcendental::atan2;
    }

    rounded_unary! {
        /// `1 ÷ a`.
        inv => arith::inv;
        /// Square root.
        sqrt => arith::sqrt;
        /// Reciprocal square root.
        rsqrt => arith::rsqrt;
        /// Rounds to an integer in the context mode.
        rint => arith::rint;
        /// Natural logarithm.
        ln => transcendental::ln;
        /// Base-2 logarithm.
        log2 => transcendental::log2;
        /// Base-10 logarithm.
        log10 => transcendental::log10;
        /// Exponential.
        exp => transcendental::exp;
        /// Sine.
        sin => transcendental::sin;
        /// Cosine.
        cos => transcendental::cos;
        /// Tangent.
        tan => transcendental::tan;
        /// Inverse sine.
        asin => transcendental::asin;
        /// Inverse cosine.
        acos => transcendental::acos;
        /// Inverse tangent.
        atan => transcendental::atan;
        /// Hyperbolic sine.
        sinh => transcendental::sinh;
        /// Hyperbolic cosine.
        cosh => transcendental::cosh;
        /// Hyperbolic tangent.
        tanh => transcendental::tanh;
        /// Inverse hyperbolic sine.
        asinh => transcendental::asinh;
        /// Inverse hyperbolic cosine.
        acosh => transcendental::acosh;
        /// Inverse hyperbolic tangent.
        atanh => transcendental::atanh;
    }

    /// `a × 2^n`.
    pub fn ldexp(&self, a: Half, n: i32) -> Half {
        arith::ldexp(a, n, self.rounding)
    }

    /// `a × 2^n`.
    pub fn scalbn(&self, a: Half, n: i32) -> Half {
        arith::scalbn(a, n, self.rounding)
    }

    /// Clears the sign bit.
    pub const fn abs(&self, a: Half) -> Half {
        arith::abs(a)
    }

    /// Flips the sign bit.
    pub const fn neg(&self, a: Half) -> Half {
        arith::neg(a)
    }

    /// Magnitude of `magnitude` with the sign of `sign`.
    pub const fn copysign(&self, magnitude: Half, sign: Half) -> Half {
        arith::copysign(magnitude, sign)
    }

    /// Integer part.
    pub fn int(&self, a: Half) -> Half {
        arith::int(a)
    }

    /// Rounds toward zero.
    pub fn trunc(&self, a: Half) -> Half {
        arith::trunc(a)
    }

    /// Rounds toward −∞.
    pub fn floor(&self, a: Half) -> Half {
        arith::floor(a)
    }

    /// Rounds toward +∞.
    pub fn ceil(&self, a: Half) -> Half {
        arith::ceil(a)
    }

    /// Rounds to nearest, ties away from zero.
    pub fn round(&self, a: Half) -> Half {
        arith::round(a)
    }

    /// Fractional and integral parts.
    pub fn modf(&self, a: Half) -> (Half, Half) {
        arith::modf(a)
    }

    /// Fraction in `[0.5, 1)` and power of two.
    pub fn frexp(&self, a: Half) -> (Half, i32) {
        arith::frexp(a)
    }

    /// Unbiased exponent as a half value.
    pub fn logb(&self, a: Half) -> Half {
        arith::logb(a)
    }

    /// Unbiased exponent as an integer.
    pub fn ilogb(&self, a: Half) -> i32 {
        arith::ilogb(a)
    }

    /// Next representable value after `from` toward `to`.
    pub fn nextafter(&self, from: Half, to: Half) -> Half {
        arith::nextafter(from, to)
    }

    /// IEEE comparison; `None` when unordered.
    pub fn compare(&self, a: Half, b: Half) -> Option<Ordering> {
        classify::compare(a, b)
    }

    /// Smaller operand, ignoring a single NaN.
    pub fn min(&self, a: Half, b: Half) -> Half {
        classify::min(a, b)
    }

    /// Larger operand, ignoring a single NaN.
    pub fn max(&self, a: Half, b: Half) -> Half {
        classify::max(a, b)
    }

    /// Runs `op` on its operands.
    ///
    /// Unary operations ignore `b`. For [`Op::Atan2`] `a` is `y` and `b` is `x`.
    pub fn execute(&self, op: Op, a: Half, b: Half) -> Half {
        match op {
            Op::Add => self.add(a, b),
            Op::Sub => self.sub(a, b),
            Op::Mul => self.mul(a, b),
            Op::Div => self.div(a, b),
            Op::Inv => self.inv(a),
            Op::Sqrt => self.sqrt(a),
            Op::Rsqrt => self.rsqrt(a),
            Op::Abs => self.abs(a),
            Op::Neg => self.neg(a),
            Op::Int => self.int(a),
            Op::Trunc => self.trunc(a),
            Op::Floor => self.floor(a),
            Op::Ceil => self.ceil(a),
            Op::Round => self.round(a),
            Op::Rint => self.rint(a),
            Op::Min => self.min(a, b),
            Op::Max => self.max(a, b),
            Op::Copysign => self.copysign(a, b),
            Op::Nextafter => self.nextafter(a, b),
            Op::Logb => self.logb(a),
            Op::Ln => self.ln(a),
            Op::Log2 => self.log2(a),
            Op::Log10 => self.log10(a),
            Op::Exp => self.exp(a),
            Op::Pow => self.pow(a, b),
            Op::Sin => self.sin(a),
            Op::Cos => self.cos(a),
            Op::Tan => self.tan(a),
            Op::Asin => self.asin(a),
            Op::Acos => self.acos(a),
            Op::Atan => self.atan(a),
            Op::Atan2 => self.atan2(a, b),
            Op::Sinh => self.sinh(a),
            Op::Cosh => self.cosh(a),
            Op::Tanh => self.tanh(a),
            Op::Asinh => self.asinh(a),
            Op::Acosh => self.acosh(a),
            Op::Atanh => self.atanh(a),
        }
    }
}
