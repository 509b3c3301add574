//! Error types for format lookups.

use std::fmt;

/// Errors returned by the fallible registry entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A raw ordinal at or past [`PixelFormat::COUNT`](crate::PixelFormat::COUNT).
    OutOfRange {
        /// The rejected ordinal.
        ordinal: u32,
    },

    /// A name that matches no format.
    UnknownName {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::OutOfRange { ordinal } => {
                write!(f, "Pixel format ordinal {} is out of range", ordinal)
            }
            FormatError::UnknownName { name } => {
                write!(f, "Unknown pixel format name: {}", name)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for format lookups.
pub type FormatResult<T> = Result<T, FormatError>;
