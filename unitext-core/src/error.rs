//! Core error types (deterministic only)

use alloc::string::String;
use core::fmt;

/// Core errors (no I/O, no engine failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Boundary kind name not recognized
    UnknownBoundaryKind(String),
    /// Collation strength name not recognized
    UnknownStrength(String),
    /// Case-first name not recognized
    UnknownCaseFirst(String),
    /// Internal offset past the end of the text
    OffsetOutOfRange {
        /// Requested UTF-16 offset
        offset: usize,
        /// Length of the text in UTF-16 units
        len: usize,
    },
    /// Internal offset falls between the two halves of a surrogate pair
    SplitSurrogate {
        /// Requested UTF-16 offset
        offset: usize,
    },
    /// Incremental translation was asked to move backwards
    NonMonotonicOffset {
        /// Requested UTF-16 offset
        offset: usize,
        /// Offset the translator had already reached
        previous: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::UnknownBoundaryKind(name) => write!(
                f,
                "unknown boundary kind '{name}' (expected grapheme, word, sentence or line)"
            ),
            CoreError::UnknownStrength(name) => write!(
                f,
                "invalid strength '{name}'. Must be one of: primary, secondary, tertiary, quaternary, identical"
            ),
            CoreError::UnknownCaseFirst(name) => {
                write!(f, "invalid case_first '{name}'. Must be one of: upper, lower, off")
            }
            CoreError::OffsetOutOfRange { offset, len } => {
                write!(f, "offset {offset} is beyond text length {len} (UTF-16 units)")
            }
            CoreError::SplitSurrogate { offset } => {
                write!(f, "offset {offset} splits a surrogate pair")
            }
            CoreError::NonMonotonicOffset { offset, previous } => write!(
                f,
                "offset {offset} precedes already translated offset {previous}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
