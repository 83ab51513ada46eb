//! Rounding mode support.
//!
//! IEEE 754 defines five rounding-direction attributes. The encoding below follows the
//! common 3-bit layout used by hardware rounding-mode fields:
//!
//! | Value | Mode              | Description                                |
//! |-------|-------------------|--------------------------------------------|
//! | 0b000 | `nearest-even`    | Round to nearest, ties to even             |
//! | 0b001 | `toward-zero`     | Round toward zero (truncate)               |
//! | 0b010 | `toward-negative` | Round toward −∞                            |
//! | 0b011 | `toward-positive` | Round toward +∞                            |
//! | 0b100 | `nearest-away`    | Round to nearest, ties away from zero      |
//!
//! The mode is always passed explicitly; there is no process-wide setting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::ParseError;

/// Rounding direction applied whenever a result is not exactly representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest, ties to even (IEEE default).
    #[default]
    #[serde(alias = "rne")]
    NearestEven = 0b000,
    /// Round toward zero.
    #[serde(alias = "rtz")]
    TowardZero = 0b001,
    /// Round toward −∞.
    #[serde(alias = "rdn")]
    TowardNegative = 0b010,
    /// Round toward +∞.
    #[serde(alias = "rup")]
    TowardPositive = 0b011,
    /// Round to nearest, ties away from zero.
    #[serde(alias = "rmm")]
    NearestAway = 0b100,
}

impl RoundingMode {
    /// Every mode, in encoding order.
    pub const ALL: [Self; 5] = [
        Self::NearestEven,
        Self::TowardZero,
        Self::TowardNegative,
        Self::TowardPositive,
        Self::NearestAway,
    ];

    /// Decodes a 3-bit rounding-mode field.
    ///
    /// Returns `None` for the reserved encodings 0b101–0b111.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::NearestEven),
            0b001 => Some(Self::TowardZero),
            0b010 => Some(Self::TowardNegative),
            0b011 => Some(Self::TowardPositive),
            0b100 => Some(Self::NearestAway),
            _ => None,
        }
    }

    /// Returns the 3-bit encoding of this mode.
    pub const fn to_bits(self) -> u8 {
        self as u8
    }

    /// Returns the kebab-case name used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NearestEven => "nearest-even",
            Self::TowardZero => "toward-zero",
            Self::TowardNegative => "toward-negative",
            Self::TowardPositive => "toward-positive",
            Self::NearestAway => "nearest-away",
        }
    }

    /// Decides whether a truncated magnitude must be bumped by one unit.
    ///
    /// # Arguments
    ///
    /// * `negative` - Sign of the value being rounded.
    /// * `discarded` - Bits shifted out below the retained unit.
    /// * `half` - Weight of half a retained unit, in the same scale as `discarded`.
    /// * `odd` - Whether the retained least-significant bit is set.
    pub(crate) const fn rounds_away(
        self,
        negative: bool,
        discarded: u64,
        half: u64,
        odd: bool,
    ) -> bool {
        match self {
            Self::NearestEven => discarded > half || (discarded == half && odd),
            Self::NearestAway => discarded >= half,
            Self::TowardZero => false,
            Self::TowardPositive => discarded != 0 && !negative,
            Self::TowardNegative => discarded != 0 && negative,
        }
    }

    /// Whether an overflowing result of the given sign becomes Infinity.
    ///
    /// Otherwise it saturates at the largest finite magnitude.
    pub(crate) const fn overflows_to_infinity(self, negative: bool) -> bool {
        match self {
            Self::NearestEven | Self::NearestAway => true,
            Self::TowardZero => false,
            Self::TowardPositive => !negative,
            Self::TowardNegative => negative,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = ParseError;

    /// Accepts the kebab-case names and the short `rne`/`rtz`/`rdn`/`rup`/`rmm` forms,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest-even" | "rne" => Ok(Self::NearestEven),
            "toward-zero" | "rtz" => Ok(Self::TowardZero),
            "toward-negative" | "rdn" => Ok(Self::TowardNegative),
            "toward-positive" | "rup" => Ok(Self::TowardPositive),
            "nearest-away" | "rmm" => Ok(Self::NearestAway),
            _ => Err(ParseError::UnknownRoundingMode(s.to_owned())),
        }
    }
}
