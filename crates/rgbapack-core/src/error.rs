//! Error types for rgbapack-core operations.
//!
//! Every numeric conversion in this crate is total: out-of-range input is
//! absorbed by clamping, truncation or hue wrapping. The only fallible paths
//! are the ones that read text:
//!
//! - [`Color::from_hex`](crate::Color::from_hex) / [`str::parse`] - `RRGGBB[AA]` strings
//! - [`palette::named`](crate::palette::named) - named color lookup
//! - [`PackedFormat`](crate::PackedFormat) `FromStr` - format names
//!
//! # Usage
//!
//! ```rust
//! use rgbapack_core::{Color, ParseError};
//!
//! let err = Color::from_hex("#F00").unwrap_err();
//! assert_eq!(err, ParseError::InvalidLength { len: 3 });
//! assert!(err.to_string().contains("3"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`ParseError`] as the error type.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors produced while reading a color from text.
///
/// # Categories
///
/// - **Hex errors**: [`Empty`](ParseError::Empty), [`InvalidLength`](ParseError::InvalidLength),
///   [`InvalidDigit`](ParseError::InvalidDigit)
/// - **Lookup errors**: [`UnknownName`](ParseError::UnknownName), [`UnknownFormat`](ParseError::UnknownFormat)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input held no hex digits (empty, or only `#`).
    #[error("empty color string")]
    Empty,

    /// The hex body is not 6 (`RRGGBB`) or 8 (`RRGGBBAA`) digits long.
    ///
    /// `len` counts characters after the optional leading `#`.
    #[error("invalid hex color length {len}: expected 6 (RRGGBB) or 8 (RRGGBBAA) digits")]
    InvalidLength {
        /// Number of characters after the optional `#`
        len: usize,
    },

    /// A character in the hex body is not a hex digit.
    #[error("invalid hex digit {found:?} at index {index}")]
    InvalidDigit {
        /// Character index within the hex body (after `#`)
        index: usize,
        /// The offending character
        found: char,
    },

    /// No palette entry has this name.
    #[error("unknown color name: {name}")]
    UnknownName {
        /// Name that was looked up
        name: String,
    },

    /// No [`PackedFormat`](crate::PackedFormat) has this name.
    #[error("unknown packed format: {name}")]
    UnknownFormat {
        /// Name that was parsed
        name: String,
    },
}

impl ParseError {
    /// Creates a [`ParseError::InvalidLength`] error.
    #[inline]
    pub fn invalid_length(len: usize) -> Self {
        Self::InvalidLength { len }
    }

    /// Creates a [`ParseError::InvalidDigit`] error.
    #[inline]
    pub fn invalid_digit(index: usize, found: char) -> Self {
        Self::InvalidDigit { index, found }
    }

    /// Creates a [`ParseError::UnknownName`] error.
    #[inline]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }

    /// Creates a [`ParseError::UnknownFormat`] error.
    #[inline]
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }

    /// Returns `true` if the error came from malformed hex text.
    #[inline]
    pub fn is_hex_error(&self) -> bool {
        matches!(
            self,
            Self::Empty | Self::InvalidLength { .. } | Self::InvalidDigit { .. }
        )
    }
}
