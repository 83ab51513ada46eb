//! # Classification and Comparison Tests
//!
//! Verifies IEEE ordering (signed zeros equal, NaN unordered), integer detection and the
//! NaN-avoiding `min`/`max`.

use std::cmp::Ordering;

use halfsoft_core::Half;
use halfsoft_core::classify::{check_int, compare, max, min};
use halfsoft_core::codec::decompose;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::{all_words, assert_bits, bits, h};

// ══════════════════════════════════════════════════════════
// 1. Predicates
// ══════════════════════════════════════════════════════════

#[test]
fn test_predicates_agree_with_widened_value() {
    for word in all_words() {
        let value = word.to_f32();
        assert_eq!(word.is_nan(), value.is_nan(), "{word:?}");
        assert_eq!(word.is_infinite(), value.is_infinite(), "{word:?}");
        assert_eq!(word.is_zero(), value == 0.0, "{word:?}");
        assert_eq!(word.is_finite(), value.is_finite(), "{word:?}");
        assert_eq!(word.is_subnormal(), decompose(word).is_subnormal(), "{word:?}");
    }
}

#[test]
fn test_subnormal_range() {
    assert!(bits(0x0001).is_subnormal());
    assert!(bits(0x83FF).is_subnormal());
    assert!(!Half::MIN_POSITIVE.is_subnormal());
    assert!(!Half::ZERO.is_subnormal());
}

// ══════════════════════════════════════════════════════════
// 2. Comparison
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::signed_zeros(0x0000, 0x8000, Some(Ordering::Equal))]
#[case::ones(0x3C00, 0xBC00, Some(Ordering::Greater))]
#[case::subnormal_below_normal(0x03FF, 0x0400, Some(Ordering::Less))]
#[case::negatives_reverse(0xFBFF, 0xBC00, Some(Ordering::Less))]
#[case::infinities(0xFC00, 0x7C00, Some(Ordering::Less))]
#[case::nan_left(0x7E00, 0x3C00, None)]
#[case::nan_right(0x3C00, 0xFE00, None)]
#[case::nan_both(0x7E00, 0x7E00, None)]
fn test_compare_cases(#[case] a: u16, #[case] b: u16, #[case] expected: Option<Ordering>) {
    assert_eq!(compare(bits(a), bits(b)), expected);
}

proptest! {
    #[test]
    fn test_compare_matches_widened_order(a in any::<u16>(), b in any::<u16>()) {
        let (x, y) = (bits(a), bits(b));
        prop_assert_eq!(compare(x, y), x.to_f32().partial_cmp(&y.to_f32()));
    }

    #[test]
    fn test_min_max_bound_both_operands(a in 0u16..0x7C00, b in 0x8000u16..0xFC00) {
        let (x, y) = (bits(a), bits(b));
        let low = min(x, y);
        let high = max(x, y);
        prop_assert_ne!(compare(low, x), Some(Ordering::Greater));
        prop_assert_ne!(compare(low, y), Some(Ordering::Greater));
        prop_assert_ne!(compare(high, x), Some(Ordering::Less));
        prop_assert_ne!(compare(high, y), Some(Ordering::Less));
    }
}

// ══════════════════════════════════════════════════════════
// 3. min / max
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::ordinary(0x3C00, 0x4000, 0x3C00, 0x4000)]
#[case::signed_zeros(0x0000, 0x8000, 0x8000, 0x0000)]
#[case::signed_zeros_swapped(0x8000, 0x0000, 0x8000, 0x0000)]
#[case::nan_left(0x7E00, 0xBC00, 0xBC00, 0xBC00)]
#[case::nan_right(0x3C00, 0xFE00, 0x3C00, 0x3C00)]
#[case::two_nans(0xFC01, 0x7E00, 0xFE00, 0xFE00)]
#[case::infinity(0x7C00, 0xFC00, 0xFC00, 0x7C00)]
fn test_min_max(#[case] a: u16, #[case] b: u16, #[case] low: u16, #[case] high: u16) {
    assert_bits(min(bits(a), bits(b)), low);
    assert_bits(max(bits(a), bits(b)), high);
}

// ══════════════════════════════════════════════════════════
// 4. Integer detection
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::zero(0.0, Some(0))]
#[case::three(3.0, Some(3))]
#[case::minus_four(-4.0, Some(-4))]
#[case::large(1024.0, Some(1024))]
#[case::max(65504.0, Some(65504))]
#[case::fraction(2.5, None)]
#[case::below_one(0.5, None)]
#[case::infinity(f32::INFINITY, None)]
#[case::nan(f32::NAN, None)]
fn test_check_int(#[case] value: f32, #[case] expected: Option<i32>) {
    assert_eq!(check_int(&decompose(h(value))), expected);
}

#[test]
fn test_check_int_agrees_with_widened_value() {
    for word in all_words().filter(|w| w.is_finite()) {
        let value = word.to_f32();
        let expected = (value.fract() == 0.0).then_some(value as i32);
        assert_eq!(check_int(&decompose(word)), expected, "{word:?}");
    }
}
