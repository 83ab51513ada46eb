//! # Integral Rounding Tests
//!
//! Every finite word is checked against the exact `f32` equivalents, sign of zero included.

use halfsoft_core::arith::{ceil, floor, int, modf, rint, round, round_to_integral, trunc};
use halfsoft_core::RoundingMode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{all_words, assert_bits, bits, h};

#[test]
fn test_every_finite_word_matches_widened_rounding() {
    for word in all_words().filter(|w| w.is_finite()) {
        let value = word.to_f32();
        assert_bits(trunc(word), h(value.trunc()).to_bits());
        assert_bits(int(word), h(value.trunc()).to_bits());
        assert_bits(floor(word), h(value.floor()).to_bits());
        assert_bits(ceil(word), h(value.ceil()).to_bits());
        assert_bits(round(word), h(value.round()).to_bits());
        assert_bits(
            rint(word, RoundingMode::NearestEven),
            h(value.round_ties_even()).to_bits(),
        );
    }
}

#[rstest]
#[case::two_and_a_half(2.5, [2.0, 2.0, 3.0, 3.0])]
#[case::minus_two_and_a_half(-2.5, [-2.0, -3.0, -2.0, -3.0])]
#[case::half(0.5, [0.0, 0.0, 1.0, 1.0])]
#[case::minus_half(-0.5, [-0.0, -1.0, -0.0, -1.0])]
#[case::minus_quarter(-0.25, [-0.0, -1.0, -0.0, -0.0])]
#[case::large(1023.5, [1023.0, 1023.0, 1024.0, 1024.0])]
fn test_integral_table(#[case] value: f32, #[case] expected: [f32; 4]) {
    let a = h(value);
    let actual = [trunc(a), floor(a), ceil(a), round(a)].map(|r| r.to_bits());
    assert_eq!(actual, expected.map(|e| h(e).to_bits()));
}

#[rstest]
#[case::nearest_even(RoundingMode::NearestEven, [2.0, 4.0, -2.0])]
#[case::toward_zero(RoundingMode::TowardZero, [2.0, 3.0, -2.0])]
#[case::toward_negative(RoundingMode::TowardNegative, [2.0, 3.0, -3.0])]
#[case::toward_positive(RoundingMode::TowardPositive, [3.0, 4.0, -2.0])]
#[case::nearest_away(RoundingMode::NearestAway, [3.0, 4.0, -3.0])]
fn test_rint_follows_mode(#[case] mode: RoundingMode, #[case] expected: [f32; 3]) {
    let actual = [2.5, 3.5, -2.5].map(|v| rint(h(v), mode).to_bits());
    assert_eq!(actual, expected.map(|e| h(e).to_bits()));
}

#[rstest]
#[case::smallest_subnormal_up(0x0001, RoundingMode::TowardPositive, 0x3C00)]
#[case::smallest_subnormal_down(0x0001, RoundingMode::TowardNegative, 0x0000)]
#[case::negative_subnormal_down(0x8001, RoundingMode::TowardNegative, 0xBC00)]
#[case::infinity(0x7C00, RoundingMode::TowardZero, 0x7C00)]
#[case::negative_zero(0x8000, RoundingMode::TowardPositive, 0x8000)]
#[case::nan(0xFD00, RoundingMode::NearestEven, 0xFE00)]
#[case::already_integral(0x7BFF, RoundingMode::TowardZero, 0x7BFF)]
fn test_round_to_integral_edges(#[case] a: u16, #[case] mode: RoundingMode, #[case] expected: u16) {
    assert_bits(round_to_integral(bits(a), mode), expected);
}

#[test]
fn test_modf_splits_every_finite_word() {
    for word in all_words().filter(|w| w.is_finite()) {
        let value = word.to_f32();
        let (fraction, integer) = modf(word);
        assert_bits(integer, h(value.trunc()).to_bits());
        assert_bits(fraction, h(value.fract().copysign(value)).to_bits());
    }
}

#[rstest]
#[case::four(0x4400, 0x0000)]
#[case::minus_four(0xC400, 0x8000)]
#[case::infinity(0x7C00, 0x0000)]
#[case::negative_infinity(0xFC00, 0x8000)]
fn test_modf_integral_inputs(#[case] a: u16, #[case] fraction: u16) {
    let (f, i) = modf(bits(a));
    assert_bits(f, fraction);
    assert_bits(i, a);
}

#[test]
fn test_modf_nan() {
    let (f, i) = modf(bits(0x7C01));
    assert_bits(f, 0x7E00);
    assert_bits(i, 0x7E00);
}
