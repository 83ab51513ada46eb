//! # Exponent and Neighbour Tests

use halfsoft_core::arith::{abs, copysign, frexp, ilogb, ldexp, logb, neg, nextafter, scalbn};
use halfsoft_core::{Half, RoundingMode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::{all_words, assert_bits, bits, h};

const RNE: RoundingMode = RoundingMode::NearestEven;

// ══════════════════════════════════════════════════════════
// 1. Sign helpers
// ══════════════════════════════════════════════════════════

#[test]
fn test_sign_helpers_touch_only_the_sign_bit() {
    for word in all_words() {
        let raw = word.to_bits();
        assert_eq!(abs(word).to_bits(), raw & 0x7FFF);
        assert_eq!(neg(word).to_bits(), raw ^ 0x8000);
        assert_eq!(copysign(word, Half::NEG_ONE).to_bits(), raw | 0x8000);
        assert_eq!(copysign(word, Half::ZERO).to_bits(), raw & 0x7FFF);
    }
}

// ══════════════════════════════════════════════════════════
// 2. frexp / ldexp
// ══════════════════════════════════════════════════════════

#[test]
fn test_frexp_reconstructs_every_finite_word() {
    for word in all_words().filter(|w| w.is_finite() && !w.is_zero()) {
        let (fraction, exponent) = frexp(word);
        let magnitude = fraction.to_f64().abs();
        assert!((0.5..1.0).contains(&magnitude), "{word:?} -> {fraction:?}");
        assert_eq!(fraction.to_f64() * 2f64.powi(exponent), word.to_f64());
    }
}

#[rstest]
#[case::eight(0x4800, 0x3800, 4)]
#[case::minus_three(0xC200, 0xBA00, 2)]
#[case::smallest_subnormal(0x0001, 0x3800, -23)]
#[case::zero(0x8000, 0x8000, 0)]
#[case::infinity(0x7C00, 0x7C00, 0)]
fn test_frexp_cases(#[case] a: u16, #[case] fraction: u16, #[case] exponent: i32) {
    let (f, e) = frexp(bits(a));
    assert_bits(f, fraction);
    assert_eq!(e, exponent);
}

#[rstest]
#[case::identity(0x3C00, 0, RNE, 0x3C00)]
#[case::up(0x3C00, 4, RNE, 0x4C00)]
#[case::to_subnormal(0x3C00, -24, RNE, 0x0001)]
#[case::below_subnormal_tie(0x3C00, -25, RNE, 0x0000)]
#[case::below_subnormal_up(0x3C00, -25, RoundingMode::TowardPositive, 0x0001)]
#[case::overflow(0x3C00, 16, RNE, 0x7C00)]
#[case::overflow_saturates(0x3C00, 16, RoundingMode::TowardZero, 0x7BFF)]
#[case::huge_scale(0x3C00, i32::MAX, RNE, 0x7C00)]
#[case::tiny_scale(0xBC00, i32::MIN, RNE, 0x8000)]
#[case::subnormal_up(0x0001, 24, RNE, 0x3C00)]
#[case::infinity(0xFC00, -3, RNE, 0xFC00)]
#[case::zero(0x8000, 7, RNE, 0x8000)]
fn test_ldexp(#[case] a: u16, #[case] n: i32, #[case] mode: RoundingMode, #[case] expected: u16) {
    assert_bits(ldexp(bits(a), n, mode), expected);
    assert_bits(scalbn(bits(a), n, mode), expected);
}

proptest! {
    #[test]
    fn test_ldexp_inverts_frexp(word in 0u16..0x7C00) {
        let a = bits(word);
        let (fraction, exponent) = frexp(a);
        prop_assert_eq!(ldexp(fraction, exponent, RNE), a);
    }
}

// ══════════════════════════════════════════════════════════
// 3. logb / ilogb
// ══════════════════════════════════════════════════════════

#[test]
fn test_ilogb_matches_binary_exponent() {
    for word in all_words().filter(|w| w.is_finite() && !w.is_zero()) {
        let expected = word.to_f64().abs().log2().floor() as i32;
        assert_eq!(ilogb(word), expected, "{word:?}");
        assert_bits(logb(word), h(expected as f32).to_bits());
    }
}

#[rstest]
#[case::zero(0x0000, 0xFC00, i32::MIN)]
#[case::negative_zero(0x8000, 0xFC00, i32::MIN)]
#[case::infinity(0xFC00, 0x7C00, i32::MAX)]
#[case::nan(0x7E00, 0x7E00, i32::MAX)]
#[case::smallest_subnormal(0x0001, 0xCE00, -24)]
#[case::max(0x7BFF, 0x4B80, 15)]
fn test_logb_special(#[case] a: u16, #[case] logb_bits: u16, #[case] ilogb_value: i32) {
    assert_bits(logb(bits(a)), logb_bits);
    assert_eq!(ilogb(bits(a)), ilogb_value);
}

// ══════════════════════════════════════════════════════════
// 4. nextafter
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::up_from_one(0x3C00, 0x4000, 0x3C01)]
#[case::down_from_one(0x3C00, 0x0000, 0x3BFF)]
#[case::below_zero(0x0000, 0xBC00, 0x8001)]
#[case::above_negative_zero(0x8000, 0x3C00, 0x0001)]
#[case::signed_zeros(0x8000, 0x0000, 0x0000)]
#[case::max_to_infinity(0x7BFF, 0x7C00, 0x7C00)]
#[case::infinity_down(0x7C00, 0x0000, 0x7BFF)]
#[case::more_negative(0xBC00, 0xC000, 0xBC01)]
#[case::toward_zero_from_negative(0x8001, 0x0000, 0x8000)]
#[case::equal(0x4200, 0x4200, 0x4200)]
#[case::nan_from(0xFE00, 0x3C00, 0xFE00)]
#[case::nan_to(0x3C00, 0x7D00, 0x7E00)]
fn test_nextafter(#[case] from: u16, #[case] to: u16, #[case] expected: u16) {
    assert_bits(nextafter(bits(from), bits(to)), expected);
}

proptest! {
    #[test]
    fn test_nextafter_steps_one_word(word in 1u16..0x7BFF) {
        let a = bits(word);
        prop_assert_eq!(nextafter(a, Half::INFINITY).to_bits(), word + 1);
        prop_assert_eq!(nextafter(a, Half::NEG_INFINITY).to_bits(), word - 1);
        prop_assert_eq!(nextafter(neg(a), Half::NEG_INFINITY).to_bits(), (word + 1) | 0x8000);
    }
}
