//! # Value Type Tests
//!
//! Covers the constants, formatting and parsing, operator overloads, bitwise equality and
//! the serde representation of [`Half`].

use std::collections::HashSet;

use halfsoft_core::common::ParseError;
use halfsoft_core::Half;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{bits, h};

#[rstest]
#[case::zero(Half::ZERO, 0.0)]
#[case::one(Half::ONE, 1.0)]
#[case::neg_one(Half::NEG_ONE, -1.0)]
#[case::two(Half::TWO, 2.0)]
#[case::half(Half::HALF, 0.5)]
#[case::max(Half::MAX, 65504.0)]
#[case::min(Half::MIN, -65504.0)]
#[case::min_positive(Half::MIN_POSITIVE, 6.103_515_6e-5)]
#[case::min_subnormal(Half::MIN_POSITIVE_SUBNORMAL, 5.960_464_5e-8)]
#[case::epsilon(Half::EPSILON, 0.000_976_562_5)]
#[case::infinity(Half::INFINITY, f32::INFINITY)]
#[case::neg_infinity(Half::NEG_INFINITY, f32::NEG_INFINITY)]
fn test_constants(#[case] constant: Half, #[case] value: f32) {
    assert_eq!(constant.to_f32(), value);
}

#[test]
fn test_nan_constants() {
    assert_eq!(Half::NAN.to_bits(), 0x7E00);
    assert_eq!(Half::DEFAULT_NAN.to_bits(), 0xFE00);
    assert!(Half::NAN.is_nan() && Half::DEFAULT_NAN.is_nan());
    assert!(Half::DEFAULT_NAN.is_sign_negative());
}

#[test]
fn test_equality_is_bitwise() {
    assert_eq!(Half::NAN, Half::NAN);
    assert_ne!(Half::ZERO, Half::NEG_ZERO);
    assert_ne!(bits(0x7E00), bits(0x7E01));
    let set: HashSet<Half> = [Half::ZERO, Half::NEG_ZERO, Half::ZERO].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_classification_methods() {
    assert!(Half::MIN_POSITIVE.is_normal());
    assert!(!Half::MIN_POSITIVE_SUBNORMAL.is_normal());
    assert!(!Half::INFINITY.is_normal());
    assert!(Half::NEG_ZERO.is_sign_negative());
    assert!(Half::NAN.is_sign_positive());
    assert_eq!(h(1.5).fraction_bits(), 0x200);
}

#[test]
fn test_sign_methods() {
    assert_eq!(h(-2.5).abs(), h(2.5));
    assert_eq!(h(2.5).negate(), h(-2.5));
    assert_eq!(Half::ONE.copysign(Half::NEG_ZERO), Half::NEG_ONE);
    assert_eq!(-Half::ZERO, Half::NEG_ZERO);
}

#[test]
fn test_operators_round_to_nearest_even() {
    assert_eq!(h(1.5) + h(2.25), h(3.75));
    assert_eq!(h(1.0) - h(3.0), h(-2.0));
    assert_eq!(h(-1.5) * h(4.0), h(-6.0));
    assert_eq!((Half::ONE / h(3.0)).to_bits(), 0x3555);
    assert_eq!(Half::MAX + Half::MAX, Half::INFINITY);
}

#[test]
fn test_ordering_methods() {
    use std::cmp::Ordering;

    assert_eq!(Half::ZERO.compare(Half::NEG_ZERO), Some(Ordering::Equal));
    assert_eq!(Half::NAN.compare(Half::ONE), None);
    assert_eq!(Half::ONE.min(Half::NAN), Half::ONE);
    assert_eq!(Half::ONE.max(Half::TWO), Half::TWO);
}

#[test]
fn test_widening_conversions() {
    assert_eq!(f32::from(h(0.25)), 0.25);
    assert_eq!(f64::from(Half::MIN_POSITIVE_SUBNORMAL), 2f64.powi(-24));
}

#[test]
fn test_formatting() {
    assert_eq!(format!("{:?}", Half::ONE), "Half(0x3c00 = 1)");
    assert_eq!(Half::ONE.to_string(), "1");
    assert_eq!(h(-0.5).to_string(), "-0.5");
    assert_eq!(Half::INFINITY.to_string(), "inf");
    assert_eq!(format!("{:x}", Half::MAX), "7bff");
}

#[rstest]
#[case::decimal("1.5", 0x3E00)]
#[case::padded("  -2 ", 0xC000)]
#[case::rounded("0.1", 0x2E66)]
#[case::hex("0x7bff", 0x7BFF)]
#[case::upper_hex("0X8000", 0x8000)]
#[case::infinity("-inf", 0xFC00)]
#[case::overflow("1e6", 0x7C00)]
fn test_parse(#[case] text: &str, #[case] expected: u16) {
    assert_eq!(text.parse::<Half>().map(Half::to_bits), Ok(expected));
}

#[test]
fn test_parse_nan() {
    assert!("nan".parse::<Half>().is_ok_and(Half::is_nan));
}

#[rstest]
#[case::empty("")]
#[case::word("one")]
#[case::hex_too_wide("0x10000")]
#[case::bad_hex("0xzz")]
fn test_parse_rejects(#[case] text: &str) {
    assert_eq!(
        text.parse::<Half>(),
        Err(ParseError::InvalidHalf(text.to_string()))
    );
}

#[test]
fn test_serde_uses_encoded_word() {
    assert_eq!(serde_json::to_string(&Half::ONE).unwrap(), "15360");
    let parsed: Half = serde_json::from_str("31743").unwrap();
    assert_eq!(parsed, Half::MAX);
    assert!(serde_json::from_str::<Half>("65536").is_err());
}
