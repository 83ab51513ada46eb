//! # Context and Dispatch Tests
//!
//! Checks that [`HalfFpu`] carries its rounding mode per instance and that every [`Op`]
//! dispatches to the matching operation.

use halfsoft_core::arith;
use halfsoft_core::common::ParseError;
use halfsoft_core::transcendental;
use halfsoft_core::{Config, Error, Half, HalfFpu, Op, RoundingMode};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{assert_bits, h, init_tracing};

// ══════════════════════════════════════════════════════════
// 1. Rounding context
// ══════════════════════════════════════════════════════════

#[test]
fn test_default_context_rounds_to_nearest_even() {
    let fpu = HalfFpu::default();
    assert_eq!(fpu.rounding_mode(), RoundingMode::NearestEven);
    assert_eq!(HalfFpu::new(&Config::default()), fpu);
}

#[test]
fn test_context_from_config() {
    let config = Config::from_json(r#"{ "rounding": { "mode": "toward-negative" } }"#).unwrap();
    let fpu = HalfFpu::new(&config);
    assert_eq!(fpu.rounding_mode(), RoundingMode::TowardNegative);
    assert_bits(fpu.div(Half::NEG_ONE, h(3.0)), 0xB556);
}

#[test]
fn test_set_rounding_mode_affects_only_that_context() {
    init_tracing();
    let mut up = HalfFpu::default();
    let nearest = HalfFpu::default();
    up.set_rounding_mode(RoundingMode::TowardPositive);

    assert_bits(up.div(Half::ONE, h(3.0)), 0x3556);
    assert_bits(nearest.div(Half::ONE, h(3.0)), 0x3555);
    assert_eq!(nearest.rounding_mode(), RoundingMode::NearestEven);
}

#[rstest]
#[case::nearest_even(RoundingMode::NearestEven, 0x7C00)]
#[case::toward_zero(RoundingMode::TowardZero, 0x7BFF)]
#[case::toward_negative(RoundingMode::TowardNegative, 0x7BFF)]
#[case::toward_positive(RoundingMode::TowardPositive, 0x7C00)]
#[case::nearest_away(RoundingMode::NearestAway, 0x7C00)]
fn test_context_mode_reaches_every_rounding_path(#[case] mode: RoundingMode, #[case] overflow: u16) {
    let fpu = HalfFpu::with_rounding_mode(mode);
    assert_bits(fpu.add(Half::MAX, Half::MAX), overflow);
    assert_bits(fpu.mul(Half::MAX, Half::TWO), overflow);
    assert_bits(fpu.ldexp(Half::ONE, 16), overflow);
    assert_bits(fpu.scalbn(Half::ONE, 16), overflow);
    assert_bits(fpu.exp(h(20.0)), overflow);
    assert_bits(fpu.pow(Half::TWO, h(16.0)), overflow);
    assert_bits(fpu.from_f32(1.0e6), overflow);
}

#[test]
fn test_context_methods_forward_to_free_functions() {
    let fpu = HalfFpu::with_rounding_mode(RoundingMode::TowardZero);
    let mode = RoundingMode::TowardZero;
    let x = h(0.7);
    assert_eq!(fpu.sqrt(x), arith::sqrt(x, mode));
    assert_eq!(fpu.rsqrt(x), arith::rsqrt(x, mode));
    assert_eq!(fpu.inv(x), arith::inv(x, mode));
    assert_eq!(fpu.rint(h(2.5)), h(2.0));
    assert_eq!(fpu.ln(x), transcendental::ln(x, mode));
    assert_eq!(fpu.sin(x), transcendental::sin(x, mode));
    assert_eq!(fpu.atan2(x, Half::ONE), transcendental::atan2(x, Half::ONE, mode));
    assert_eq!(fpu.atanh(x), transcendental::atanh(x, mode));
    assert_eq!(fpu.modf(h(-2.5)), (h(-0.5), h(-2.0)));
    assert_eq!(fpu.frexp(h(8.0)), (Half::HALF, 4));
    assert_eq!(fpu.ilogb(h(8.0)), 3);
    assert_eq!(fpu.compare(Half::ONE, Half::NAN), None);
}

// ══════════════════════════════════════════════════════════
// 2. Operation names
// ══════════════════════════════════════════════════════════

#[test]
fn test_op_names_parse_back() {
    for op in Op::ALL {
        assert_eq!(op.name().parse::<Op>(), Ok(op));
        assert_eq!(op.to_string(), op.name());
    }
}

#[rstest]
#[case::upper("SQRT", Op::Sqrt)]
#[case::mixed(" Atan2 ", Op::Atan2)]
#[case::digits("log10", Op::Log10)]
fn test_op_parse_is_lenient(#[case] text: &str, #[case] expected: Op) {
    assert_eq!(text.parse::<Op>(), Ok(expected));
}

#[test]
fn test_op_parse_rejects_unknown() {
    assert_eq!(
        "cbrt".parse::<Op>(),
        Err(ParseError::UnknownOperation("cbrt".to_string()))
    );
}

#[rstest]
#[case::unary_with_one(Op::Sqrt, 1)]
#[case::binary_with_two(Op::Atan2, 2)]
fn test_op_accepts_matching_operands(#[case] op: Op, #[case] given: usize) {
    assert_eq!(op.check_operands(given), Ok(()));
}

#[rstest]
#[case::unary_with_two(Op::Sqrt, 1, 2)]
#[case::binary_with_one(Op::Pow, 2, 1)]
fn test_op_rejects_operand_count(#[case] op: Op, #[case] expected: usize, #[case] given: usize) {
    let err = op.check_operands(given).unwrap_err();
    assert_eq!(
        err,
        ParseError::OperandCount {
            op: op.name().to_string(),
            expected,
            given,
        }
    );
    assert_eq!(
        Error::from(err).to_string(),
        format!("`{op}` takes {expected} operand(s), got {given}")
    );
}

#[test]
fn test_op_arity() {
    let binary: Vec<Op> = Op::ALL.into_iter().filter(|op| op.arity() == 2).collect();
    assert_eq!(
        binary,
        [
            Op::Add,
            Op::Sub,
            Op::Mul,
            Op::Div,
            Op::Min,
            Op::Max,
            Op::Copysign,
            Op::Nextafter,
            Op::Pow,
            Op::Atan2,
        ]
    );
    assert!(Op::ALL.iter().all(|op| matches!(op.arity(), 1 | 2)));
}

// ══════════════════════════════════════════════════════════
// 3. Dispatch
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::add(Op::Add, 1.5, 2.25, 3.75)]
#[case::sub(Op::Sub, 1.0, 3.0, -2.0)]
#[case::mul(Op::Mul, -1.5, 4.0, -6.0)]
#[case::div(Op::Div, 1.0, 4.0, 0.25)]
#[case::inv(Op::Inv, 4.0, 0.0, 0.25)]
#[case::sqrt(Op::Sqrt, 9.0, 0.0, 3.0)]
#[case::rsqrt(Op::Rsqrt, 4.0, 0.0, 0.5)]
#[case::abs(Op::Abs, -3.0, 0.0, 3.0)]
#[case::neg(Op::Neg, 3.0, 0.0, -3.0)]
#[case::int(Op::Int, -2.5, 0.0, -2.0)]
#[case::trunc(Op::Trunc, 2.5, 0.0, 2.0)]
#[case::floor(Op::Floor, -2.5, 0.0, -3.0)]
#[case::ceil(Op::Ceil, 2.5, 0.0, 3.0)]
#[case::round(Op::Round, 2.5, 0.0, 3.0)]
#[case::rint(Op::Rint, 2.5, 0.0, 2.0)]
#[case::min(Op::Min, 1.0, -1.0, -1.0)]
#[case::max(Op::Max, 1.0, -1.0, 1.0)]
#[case::copysign(Op::Copysign, 3.0, -0.0, -3.0)]
#[case::nextafter(Op::Nextafter, 1.0, 2.0, 1.000_976_6)]
#[case::logb(Op::Logb, 40.0, 0.0, 5.0)]
#[case::ln(Op::Ln, 1.0, 0.0, 0.0)]
#[case::log2(Op::Log2, 8.0, 0.0, 3.0)]
#[case::log10(Op::Log10, 1.0, 0.0, 0.0)]
#[case::exp(Op::Exp, 0.0, 0.0, 1.0)]
#[case::pow(Op::Pow, 2.0, 10.0, 1024.0)]
#[case::sin(Op::Sin, 0.0, 0.0, 0.0)]
#[case::cos(Op::Cos, 0.0, 0.0, 1.0)]
#[case::tan(Op::Tan, 0.0, 0.0, 0.0)]
#[case::asin(Op::Asin, 1.0, 0.0, 1.570_312_5)]
#[case::acos(Op::Acos, 1.0, 0.0, 0.0)]
#[case::atan(Op::Atan, 1.0, 0.0, 0.785_156_25)]
#[case::atan2(Op::Atan2, 1.0, 0.0, 1.570_312_5)]
#[case::sinh(Op::Sinh, 0.0, 0.0, 0.0)]
#[case::cosh(Op::Cosh, 0.0, 0.0, 1.0)]
#[case::tanh(Op::Tanh, 20.0, 0.0, 1.0)]
#[case::asinh(Op::Asinh, 0.0, 0.0, 0.0)]
#[case::acosh(Op::Acosh, 1.0, 0.0, 0.0)]
#[case::atanh(Op::Atanh, 1.0, 0.0, f32::INFINITY)]
fn test_execute(#[case] op: Op, #[case] a: f32, #[case] b: f32, #[case] expected: f32) {
    let fpu = HalfFpu::default();
    assert_bits(fpu.execute(op, h(a), h(b)), h(expected).to_bits());
}

#[test]
fn test_execute_covers_every_op() {
    let fpu = HalfFpu::default();
    for op in Op::ALL {
        let result = fpu.execute(op, Half::NAN, Half::NAN);
        assert!(
            result.is_nan(),
            "{op} did not propagate NaN: {result:?}"
        );
    }
}
