//! Fixed-point lookup tables.
//!
//! Every table samples its function at evenly spaced points across its domain, quantizes
//! with round-to-nearest, and stores one extra trailing entry so interpolation between
//! entry `i` and `i + 1` never reads past the end:
//!
//! | Table       | Entries | Domain            | Format | Saturation |
//! |-------------|---------|-------------------|--------|------------|
//! | `sin`       | 1025    | `[0, π/2]`        | Q15    |            |
//! | `asin`      | 1025    | `[0, 1]`          | Q15    |            |
//! | `atan`      | 1025    | `[0, 1]`          | Q15    |            |
//! | `ln`        | 1025    | `ln` over `[1, 2]`| Q15    |            |
//! | `exp`       | 257     | `e^r`, `[0, ln 2]`| Q15    | `0xFFFF`   |
//! | `tan_low`   | 257     | `[0°, 75°]`       | Q13    | 8.0        |
//! | `tan_high`  | 257     | `[75°, 90°]`      | Q6     | `0xFFFF`   |
//!
//! The tables are generated from `f64` math the first time [`tables`] is called and are
//! read-only afterwards.

use std::f64::consts::{FRAC_PI_2, LN_2, PI};
use std::sync::LazyLock;

use tracing::debug;

/// Intervals in the sine table.
pub const SIN_TABLE_SIZE: usize = 1024;

/// Intervals in the inverse-sine table.
pub const ASIN_TABLE_SIZE: usize = 1024;

/// Intervals in the arctangent table.
pub const ATAN_TABLE_SIZE: usize = 1024;

/// Intervals in the natural-log table.
pub const LN_TABLE_SIZE: usize = 1024;

/// Intervals in the exponential table, as a power of two.
pub const EXP_TABLE_BITS: u32 = 8;

/// Intervals in the exponential table.
pub const EXP_TABLE_SIZE: usize = 1 << EXP_TABLE_BITS;

/// Intervals in each tangent table.
pub const TAN_TABLE_SIZE: usize = 256;

/// Angle where the tangent lookup switches from the low to the high table (75°).
pub const TAN_SWITCH_RADIANS: f64 = 5.0 * PI / 12.0;

/// Fractional bits of the low tangent table.
pub const TAN_LOW_FRAC_BITS: u32 = 13;

/// Fractional bits of the high tangent table.
pub const TAN_HIGH_FRAC_BITS: u32 = 6;

/// Largest value stored in the low tangent table.
const TAN_LOW_MAX: f64 = 8.0;

/// Largest value stored in the high tangent table.
const TAN_HIGH_MAX: f64 = 1024.0;

/// Scale of the Q15 tables.
const Q15_SCALE: f64 = 32768.0;

/// The full set of lookup tables used by the transcendental functions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTables {
    /// `sin` over `[0, π/2]`, Q15.
    pub sin: [u16; SIN_TABLE_SIZE + 1],
    /// `asin` over `[0, 1]`, Q15.
    pub asin: [u16; ASIN_TABLE_SIZE + 1],
    /// `atan` over `[0, 1]`, Q15.
    pub atan: [u16; ATAN_TABLE_SIZE + 1],
    /// `ln(1 + i/1024)`, Q15.
    pub ln: [u16; LN_TABLE_SIZE + 1],
    /// `e^r` for `r` over `[0, ln 2]`, Q15.
    pub exp: [u16; EXP_TABLE_SIZE + 1],
    /// `tan` over `[0°, 75°]`, Q13.
    pub tan_low: [u16; TAN_TABLE_SIZE + 1],
    /// `tan` over `[75°, 90°]`, Q6.
    pub tan_high: [u16; TAN_TABLE_SIZE + 1],
}

impl LookupTables {
    /// Builds every table from `f64` reference math.
    pub fn generate() -> Self {
        let tables = Self {
            sin: sample(|t| (t * FRAC_PI_2).sin(), Q15_SCALE),
            asin: sample(f64::asin, Q15_SCALE),
            atan: sample(f64::atan, Q15_SCALE),
            ln: sample(f64::ln_1p, Q15_SCALE),
            exp: sample(|t| (t * LN_2).exp(), Q15_SCALE),
            tan_low: sample(
                |t| (t * TAN_SWITCH_RADIANS).tan().min(TAN_LOW_MAX),
                f64::from(1 << TAN_LOW_FRAC_BITS),
            ),
            tan_high: sample(
                |t| {
                    let angle = TAN_SWITCH_RADIANS + t * (FRAC_PI_2 - TAN_SWITCH_RADIANS);
                    tan_saturating(angle, TAN_HIGH_MAX)
                },
                f64::from(1 << TAN_HIGH_FRAC_BITS),
            ),
        };
        debug!(
            sin = tables.sin.len(),
            asin = tables.asin.len(),
            atan = tables.atan.len(),
            ln = tables.ln.len(),
            exp = tables.exp.len(),
            tan = tables.tan_low.len() + tables.tan_high.len(),
            "generated lookup tables"
        );
        tables
    }
}

/// Returns the process-wide tables, generating them on first use.
pub fn tables() -> &'static LookupTables {
    static TABLES: LazyLock<LookupTables> = LazyLock::new(LookupTables::generate);
    &TABLES
}

/// Samples `f` at `N` evenly spaced points of `[0, 1]` and quantizes with `scale`.
fn sample<const N: usize>(f: impl Fn(f64) -> f64, scale: f64) -> [u16; N] {
    let last = (N - 1) as f64;
    std::array::from_fn(|i| quantize(f(i as f64 / last), scale))
}

/// Rounds `value × scale` to nearest, saturating to the `u16` range.
fn quantize(value: f64, scale: f64) -> u16 {
    (value * scale + 0.5).clamp(0.0, f64::from(u16::MAX)) as u16
}

/// `tan(angle)`, clamped to `max`; the pole at π/2 evaluates to `max`.
fn tan_saturating(angle: f64, max: f64) -> f64 {
    let cos = angle.cos();
    if cos <= 0.0 {
        max
    } else {
        (angle.sin() / cos).min(max)
    }
}
