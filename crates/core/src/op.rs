//! Operation identifiers.
//!
//! [`Op`] names every operation that maps one or two encoded words to one encoded word, so
//! callers such as the CLI can pick an operation at run time and dispatch it through
//! [`HalfFpu::execute`](crate::HalfFpu::execute).

use std::fmt;
use std::str::FromStr;

use crate::common::error::ParseError;

/// Word-in, word-out operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// `a + b`
    Add,
    /// `a − b`
    Sub,
    /// `a × b`
    Mul,
    /// `a ÷ b`
    Div,
    /// `1 ÷ a`
    Inv,
    /// `√a`
    Sqrt,
    /// `1 ÷ √a`
    Rsqrt,
    /// `|a|`
    Abs,
    /// `−a`
    Neg,
    /// Integer part (truncation).
    Int,
    /// Round toward zero.
    Trunc,
    /// Round toward −∞.
    Floor,
    /// Round toward +∞.
    Ceil,
    /// Round to nearest, ties away.
    Round,
    /// Round to integer in the context mode.
    Rint,
    /// Smaller operand, ignoring a single NaN.
    Min,
    /// Larger operand, ignoring a single NaN.
    Max,
    /// Magnitude of `a`, sign of `b`.
    Copysign,
    /// Next value after `a` toward `b`.
    Nextafter,
    /// Unbiased exponent as a half value.
    Logb,
    /// Natural logarithm.
    Ln,
    /// Base-2 logarithm.
    Log2,
    /// Base-10 logarithm.
    Log10,
    /// `e^a`
    Exp,
    /// `a^b`
    Pow,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Angle of the point `(b, a)`.
    Atan2,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Inverse hyperbolic sine.
    Asinh,
    /// Inverse hyperbolic cosine.
    Acosh,
    /// Inverse hyperbolic tangent.
    Atanh,
}

impl Op {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 38] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Inv,
        Self::Sqrt,
        Self::Rsqrt,
        Self::Abs,
        Self::Neg,
        Self::Int,
        Self::Trunc,
        Self::Floor,
        Self::Ceil,
        Self::Round,
        Self::Rint,
        Self::Min,
        Self::Max,
        Self::Copysign,
        Self::Nextafter,
        Self::Logb,
        Self::Ln,
        Self::Log2,
        Self::Log10,
        Self::Exp,
        Self::Pow,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Atan2,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Asinh,
        Self::Acosh,
        Self::Atanh,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Inv => "inv",
            Self::Sqrt => "sqrt",
            Self::Rsqrt => "rsqrt",
            Self::Abs => "abs",
            Self::Neg => "neg",
            Self::Int => "int",
            Self::Trunc => "trunc",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Rint => "rint",
            Self::Min => "min",
            Self::Max => "max",
            Self::Copysign => "copysign",
            Self::Nextafter => "nextafter",
            Self::Logb => "logb",
            Self::Ln => "ln",
            Self::Log2 => "log2",
            Self::Log10 => "log10",
            Self::Exp => "exp",
            Self::Pow => "pow",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Atan2 => "atan2",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
        }
    }

    /// Number of operands, 1 or 2.
    pub const fn arity(self) -> usize {
        match self {
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Min
            | Self::Max
            | Self::Copysign
            | Self::Nextafter
            | Self::Pow
            | Self::Atan2 => 2,
            _ => 1,
        }
    }

    /// Checks a supplied operand count against [`Op::arity`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::OperandCount`] when `given` differs from the arity.
    pub fn check_operands(self, given: usize) -> Result<(), ParseError> {
        let expected = self.arity();
        if given == expected {
            Ok(())
        } else {
            Err(ParseError::OperandCount {
                op: self.name().to_owned(),
                expected,
                given,
            })
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Op {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownOperation(s.to_string()))
    }
}
