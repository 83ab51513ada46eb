//! Error definitions.
//!
//! Every numeric operation is total and reports failure through IEEE special values, so
//! errors only arise at the edges of the crate:
//! 1. **Configuration:** Reading or deserializing a JSON configuration file.
//! 2. **Parsing:** Turning text into a [`Half`](crate::Half), an [`Op`](crate::Op) or a
//!    [`RoundingMode`](crate::RoundingMode), and matching operands to an operation.
//! 3. **Output:** Serializing a result to JSON.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for the expected schema.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while parsing textual input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text is neither a decimal number nor a `0x`-prefixed 16-bit pattern.
    #[error("invalid half-float literal `{0}`")]
    InvalidHalf(String),

    /// No operation has this name.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    /// No rounding mode has this name.
    #[error("unknown rounding mode `{0}`")]
    UnknownRoundingMode(String),

    /// An operation was given the wrong number of operands.
    #[error("`{op}` takes {expected} operand(s), got {given}")]
    OperandCount {
        /// Operation name.
        op: String,
        /// Operands the operation takes.
        expected: usize,
        /// Operands supplied.
        given: usize,
    },
}

/// Umbrella error for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Parse failure.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A result could not be serialized.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
