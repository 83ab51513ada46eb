//! Common definitions shared by every part of the engine.
//!
//! This module provides:
//! 1. **Constants:** Binary16 field masks, the working-record layout and fixed-point
//!    scales used by the transcendental code.
//! 2. **Error Handling:** Errors for the fallible edges (configuration and parsing).
//!    Numeric operations themselves never fail.

/// Binary16 layout and fixed-point constants.
pub mod constants;

/// Error types for configuration and parsing.
pub mod error;

pub use error::{ConfigError, Error, ParseError, Result};
