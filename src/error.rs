// SPDX-License-Identifier: CC0-1.0

//! Error types for sighash type construction and decoding.

use core::fmt;

use crate::sighash_type::SighashFlag;

/// Integer is not a valid sighash type.
///
/// Returned when decoding an untrusted byte whose base mode bits (`0x3f`)
/// are not one of `DEFAULT`, `ALL`, `NONE`, or `SINGLE`. Callers parsing
/// externally supplied signatures must treat this as a hard rejection of the
/// signature, never coerce the byte to a default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidSighashTypeError(pub u8);

impl fmt::Display for InvalidSighashTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid sighash type {:#04x}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidSighashTypeError {}

/// A sighash flag cannot be applied to a sighash type.
///
/// The three input-binding flags overlap in bits 6-7 of the type byte, so a
/// value carries at most one of them. Applying a flag twice, or applying a
/// flag to a value that already carries another one, is a logic error to
/// surface immediately rather than swallow.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SighashFlagError {
    /// The requested flag is already set on the value.
    FlagAlreadySet {
        /// The flag the caller attempted to set.
        flag: SighashFlag,
    },
    /// The value already carries a flag that is mutually exclusive with the
    /// requested one.
    InvalidCombination {
        /// The flag already present on the value.
        set: SighashFlag,
        /// The flag the caller attempted to set.
        requested: SighashFlag,
    },
}

impl fmt::Display for SighashFlagError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use SighashFlagError::*;

        match self {
            FlagAlreadySet { flag } => write!(f, "sighash flag {} is already set", flag),
            InvalidCombination { set, requested } =>
                write!(f, "sighash flag {} cannot be combined with {}", requested, set),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SighashFlagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use SighashFlagError::*;

        match self {
            FlagAlreadySet { .. } | InvalidCombination { .. } => None,
        }
    }
}

/// Error returned for failure during parsing a sighash type from a string.
///
/// This is currently returned for unrecognized sighash strings.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SighashTypeParseError {
    /// The unrecognized string we attempted to parse.
    pub unrecognized: crate::prelude::String,
}

#[cfg(feature = "alloc")]
impl fmt::Display for SighashTypeParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized SIGHASH string '{}'", self.unrecognized)
    }
}

#[cfg(all(feature = "std", feature = "alloc"))]
impl std::error::Error for SighashTypeParseError {}
