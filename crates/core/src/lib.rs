//! Software IEEE 754 binary16 (half-float) arithmetic.
//!
//! This crate implements a deterministic half-precision engine using only integer and
//! fixed-point arithmetic. It provides:
//! 1. **Codec:** Encoded word ↔ decomposed record conversion and the `f32` boundary.
//! 2. **Engine:** Normalization, rounding under five IEEE modes, and operand alignment.
//! 3. **Classification:** NaN/Infinity/zero/subnormal predicates, comparison, min/max.
//! 4. **Arithmetic:** add, sub, mul, div, inv, sqrt, rsqrt, integer rounding, and
//!    exponent manipulation.
//! 5. **Transcendentals:** ln/log2/log10, exp, pow, the trigonometric and hyperbolic
//!    families, driven by fixed-point lookup tables and linear interpolation.
//!
//! Values are carried as [`Half`]. The rounding mode is never global state: free
//! functions take it as an argument and [`HalfFpu`] carries it as a context.
//!
//! ```
//! use halfsoft_core::{Half, HalfFpu, RoundingMode};
//!
//! let one = Half::ONE;
//! let two = Half::from_f32(2.0);
//! assert_eq!((one + two).to_f32(), 3.0);
//!
//! let mut fpu = HalfFpu::default();
//! fpu.set_rounding_mode(RoundingMode::TowardZero);
//! assert_eq!(fpu.sqrt(Half::from_f32(4.0)), two);
//! ```

/// Format constants and error types.
pub mod common;
/// Engine configuration (rounding mode defaults, JSON loading).
pub mod config;
/// Encoded word ↔ decomposed record conversion.
pub mod codec;
/// Normalization, rounding and operand alignment.
pub mod engine;
/// Classification predicates, comparison and min/max.
pub mod classify;
/// Basic arithmetic, square roots, integer rounding and exponent manipulation.
pub mod arith;
/// Table-driven logarithmic, exponential, trigonometric and hyperbolic functions.
pub mod transcendental;
/// The `Half` value type.
pub mod half;
/// Rounding-mode context with one method per operation.
pub mod fpu;
/// Operation identifiers for dynamic dispatch.
pub mod op;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Crate-wide error and result types.
pub use crate::common::error::{Error, Result};
/// Rounding direction applied by the engine.
pub use crate::engine::rounding_modes::RoundingMode;
/// Operation context; holds the rounding mode.
pub use crate::fpu::HalfFpu;
/// Binary16 value type.
pub use crate::half::Half;
/// Operation identifier for [`HalfFpu::execute`].
pub use crate::op::Op;
