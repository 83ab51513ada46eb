//! NaN propagation and default NaN generation.
//!
//! Two rules cover every operation:
//!
//! - **Propagation** ([`propagate`], [`propagate_one`]): When any operand is NaN, the
//!   result is the quiet NaN `sign | 0x7E00` carrying the sign of the first NaN operand.
//!   Payload bits are not carried through.
//! - **Invalid operation** ([`invalid`]): When an operation has no meaningful result for
//!   non-NaN operands (`∞ − ∞`, `0 × ∞`, `0 / 0`, `√−1`, `asin 2`, ...) the result is the
//!   default NaN `0xFE00`, which has its sign bit set.

use crate::codec::Decomposed;
use crate::common::constants::SIGN_MASK;

/// Encoded default NaN produced by invalid operations.
pub const DEFAULT_NAN_BITS: u16 = 0xFE00;

/// Encoded positive quiet NaN.
pub const QUIET_NAN_BITS: u16 = 0x7E00;

/// Record for the default NaN.
#[inline]
pub const fn invalid() -> Decomposed {
    Decomposed::nan(SIGN_MASK)
}

/// Propagates a single NaN operand.
///
/// # Returns
///
/// `Some` quiet NaN with the operand's sign when `a` is NaN, otherwise `None`.
#[inline]
pub const fn propagate_one(a: &Decomposed) -> Option<Decomposed> {
    if a.is_nan() {
        Some(Decomposed::nan(a.sign))
    } else {
        None
    }
}

/// Propagates the first NaN of two operands.
///
/// # Returns
///
/// `Some` quiet NaN with the sign of `a` if `a` is NaN, else with the sign of `b` if `b`
/// is NaN, otherwise `None`.
#[inline]
pub const fn propagate(a: &Decomposed, b: &Decomposed) -> Option<Decomposed> {
    if a.is_nan() {
        Some(Decomposed::nan(a.sign))
    } else if b.is_nan() {
        Some(Decomposed::nan(b.sign))
    } else {
        None
    }
}
