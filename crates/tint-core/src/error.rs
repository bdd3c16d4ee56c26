//! Error types for tint-core operations.
//!
//! Almost every operation on [`crate::Color`] is total. The one place input
//! can be rejected is HTML hex parsing, and even there the default entry
//! point ([`crate::Color::from_html`]) degrades to the transparent color.
//! The errors below are surfaced by the fallible variant
//! ([`crate::Color::try_from_html`]) and by [`std::str::FromStr`].
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Color, Error};
//!
//! let err = Color::try_from_html("#AABBC").unwrap_err();
//! assert!(matches!(err, Error::InvalidLength { len: 5 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while decoding a color from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input string was empty.
    #[error("empty color string")]
    Empty,

    /// The number of hex digits (after an optional `#`) is not 3, 4, 6 or 8.
    #[error("invalid hex color length {len} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength {
        /// Digit count after stripping the `#` prefix
        len: usize,
    },

    /// A character is not a hexadecimal digit.
    #[error("invalid hex digit {found:?} at offset {index}")]
    InvalidDigit {
        /// Byte offset of the character, relative to the digits
        index: usize,
        /// The offending character
        found: char,
    },
}

impl Error {
    /// Creates an [`Error::InvalidLength`] error.
    #[inline]
    pub fn invalid_length(len: usize) -> Self {
        Self::InvalidLength { len }
    }

    /// Creates an [`Error::InvalidDigit`] error.
    #[inline]
    pub fn invalid_digit(index: usize, found: char) -> Self {
        Self::InvalidDigit { index, found }
    }

    /// Returns `true` if the input had the wrong number of digits.
    #[inline]
    pub fn is_length_error(&self) -> bool {
        matches!(self, Self::Empty | Self::InvalidLength { .. })
    }
}
