//! Error types for image creation and decoding.

use std::fmt;

use texel_format::FormatError;

use crate::encoded::EncodedFormat;

/// Errors that can occur while creating or decoding an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Width, height or layer count was zero.
    InvalidDimensions {
        width: u32,
        height: u32,
        array_layers: u32,
    },

    /// The input buffer was empty.
    EmptyData,

    /// The bytes are not a recognised container, or no decoder is
    /// registered for the container they are in.
    UnsupportedEncoding {
        /// The detected container, if any.
        encoding: Option<EncodedFormat>,
    },

    /// The decoder rejected the input.
    Decode {
        encoding: EncodedFormat,
        /// Description from the decoder.
        message: String,
    },

    /// The decoded image is larger than the configured limits allow.
    LimitsExceeded {
        width: u32,
        height: u32,
        /// Which limit was hit.
        limit: &'static str,
    },

    /// A raw format ordinal did not name a format.
    InvalidFormat(FormatError),

    /// A decoder returned a pixel buffer of the wrong length.
    DataSize { expected: u64, actual: u64 },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::InvalidDimensions {
                width,
                height,
                array_layers,
            } => write!(
                f,
                "Invalid image dimensions {}x{} with {} layer(s)",
                width, height, array_layers
            ),
            ImageError::EmptyData => write!(f, "Image data is empty"),
            ImageError::UnsupportedEncoding { encoding } => match encoding {
                Some(encoding) => write!(f, "No decoder registered for {}", encoding),
                None => write!(f, "Unrecognised image encoding"),
            },
            ImageError::Decode { encoding, message } => {
                write!(f, "Failed to decode {} image: {}", encoding, message)
            }
            ImageError::LimitsExceeded {
                width,
                height,
                limit,
            } => write!(f, "Image {}x{} exceeds {}", width, height, limit),
            ImageError::InvalidFormat(err) => write!(f, "Invalid pixel format: {}", err),
            ImageError::DataSize { expected, actual } => write!(
                f,
                "Pixel buffer size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::InvalidFormat(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for ImageError {
    fn from(err: FormatError) -> Self {
        ImageError::InvalidFormat(err)
    }
}

/// Result type alias for image operations.
pub type ImageResult<T> = Result<T, ImageError>;
