//! Sine, cosine and tangent.
//!
//! Angles are reduced to a 16-bit fraction of a period by [`reduce_radian_uword`]: `0x4000`
//! is a quarter turn for sine and cosine, `0x8000` is a right angle for tangent. Sine and
//! cosine fold the turn onto the first quadrant of the sine table; tangent uses a Q13 table
//! up to 75° and a coarser Q6 table from 75° to the pole.

use crate::classify::nan_result;
use crate::codec::{Decomposed, compose, decompose};
use crate::common::constants::{Q15_SHIFT, SIGN_MASK};
use crate::engine::nan_handling;
use crate::engine::round_wide;
use crate::engine::rounding_modes::RoundingMode;
use crate::half::Half;

use super::tables::{TAN_HIGH_FRAC_BITS, TAN_LOW_FRAC_BITS, tables};
use super::{LINEAR_CUTOFF_SIXTH, LINEAR_CUTOFF_THIRD, magnitude_q15};

/// `2π × 2^32`.
const TWO_PI_Q32: u64 = 26_986_075_409;

/// `2^32 / 2π`.
const INV_TWO_PI_Q32: u64 = 683_565_276;

/// Shift taking a Q15 angle to the Q32 scale of [`TWO_PI_Q32`].
const ANGLE_SHIFT: u32 = 32 - Q15_SHIFT;

/// Shift taking the reduced product back to a 16-bit turn.
const TURN_SHIFT: u32 = 48;

/// A quarter of a full turn.
const QUARTER_TURN: u16 = 0x4000;

/// Half of a full turn; also the right angle of a half-period turn.
const HALF_TURN: u16 = 0x8000;

/// Fractional bits of a quarter-turn offset as an index into the 1024-interval sine table.
const SIN_INDEX_FRAC_BITS: u32 = 4;

/// Fractional bits of the tangent table index.
const TAN_INDEX_FRAC_BITS: u32 = 7;

/// Right angle × 3, so the 75° switch point lands on an integer.
const TAN_RIGHT_ANGLE_X3: u32 = 3 * HALF_TURN as u32;

/// 75° on the same ×3 scale.
const TAN_SWITCH_X3: u32 = TAN_RIGHT_ANGLE_X3 * 5 / 6;

/// Saturated entry of the high tangent table.
const TAN_SATURATED: u16 = u16::MAX;

/// Reduces a non-negative Q15 angle to a fraction of a period.
///
/// # Arguments
///
/// * `angle_q15` - Angle in radians, scaled by `2^15`.
/// * `fact` - Period selector: `0` reduces modulo 2π, `1` modulo π.
///
/// # Returns
///
/// The angle's position within the period, scaled so the full period is `0x10000`.
pub fn reduce_radian_uword(angle_q15: u32, fact: u32) -> u16 {
    let period = TWO_PI_Q32 >> fact;
    let inverse = u128::from(INV_TWO_PI_Q32 << fact);
    let reduced = (u64::from(angle_q15) << ANGLE_SHIFT) % period;
    ((u128::from(reduced) * inverse) >> TURN_SHIFT) as u16
}

/// Signed turn of a finite angle: the reduction of `|x|`, negated for negative `x`.
fn signed_turn(a: Half, fact: u32) -> u16 {
    let x = decompose(a);
    let turn = reduce_radian_uword(magnitude_q15(&x) as u32, fact);
    if x.is_negative() {
        turn.wrapping_neg()
    } else {
        turn
    }
}

/// Sine table lookup at a full-turn position offset by `phase`.
fn sinus_shiftable(a: Half, phase: u16, mode: RoundingMode) -> Half {
    let turn = signed_turn(a, 0).wrapping_add(phase);
    let offset = u32::from(turn & (QUARTER_TURN - 1));
    let index = if turn & QUARTER_TURN != 0 {
        u32::from(QUARTER_TURN) - offset
    } else {
        offset
    };
    let value = super::table_interpolate(&tables().sin, index, SIN_INDEX_FRAC_BITS);
    let sign = if turn & HALF_TURN != 0 { SIGN_MASK } else { 0 };
    compose(round_wide(sign, 0, u64::from(value), mode))
}

/// Sine of an angle in radians.
///
/// `sin(±∞)` is invalid. For `|x| < 2^-5` the result is `x`, which keeps `sin(−0) = −0`.
pub fn sin(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_infinity() {
        return compose(nan_handling::invalid());
    }
    if x.exp < LINEAR_CUTOFF_SIXTH {
        return a;
    }
    sinus_shiftable(a, 0, mode)
}

/// Cosine of an angle in radians.
///
/// `cos(±∞)` is invalid; for `|x| < 2^-6` the result is `1`.
pub fn cos(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_infinity() {
        return compose(nan_handling::invalid());
    }
    if x.exp < LINEAR_CUTOFF_THIRD {
        return Half::ONE;
    }
    sinus_shiftable(a, QUARTER_TURN, mode)
}

/// Tangent of an angle in radians.
///
/// `tan(±∞)` is invalid and `|x| < 2^-6` returns `x`. Angles whose lookup lands on the
/// saturated end of the high table return a signed Infinity.
pub fn tan(a: Half, mode: RoundingMode) -> Half {
    let x = decompose(a);
    if let Some(nan) = nan_result(&x) {
        return nan;
    }
    if x.is_infinity() {
        return compose(nan_handling::invalid());
    }
    if x.exp < LINEAR_CUTOFF_THIRD {
        return a;
    }

    let turn = signed_turn(a, 1);
    let negative = turn > HALF_TURN;
    let folded = if negative {
        0x1_0000 - u32::from(turn)
    } else {
        u32::from(turn)
    };
    let sign = if negative { SIGN_MASK } else { 0 };

    let scaled = folded * 3;
    let value = if scaled <= TAN_SWITCH_X3 {
        let index = scaled * 2 / 5;
        let low = super::table_interpolate(&tables().tan_low, index, TAN_INDEX_FRAC_BITS);
        u64::from(low) << (Q15_SHIFT - TAN_LOW_FRAC_BITS)
    } else {
        let index = (scaled - TAN_SWITCH_X3) * 2;
        let high = super::table_interpolate(&tables().tan_high, index, TAN_INDEX_FRAC_BITS);
        if high == TAN_SATURATED {
            return compose(Decomposed::infinity(sign));
        }
        u64::from(high) << (Q15_SHIFT - TAN_HIGH_FRAC_BITS)
    };
    compose(round_wide(sign, 0, value, mode))
}
