//! Texel - pixel format registry and image records
//!
//! - **Formats**: every supported storage format with its block footprint,
//!   numeric kind, classification and sRGB pairing ([`format`])
//! - **Images**: owned image records and decoding of PNG, JPEG, QOI and
//!   friends ([`image`], behind the `image` feature)
//! - **Core**: logging setup and optional puffin profiling ([`core`])
//!
//! # Quick Start
//!
//! ```
//! use texel::prelude::*;
//!
//! let format = PixelFormat::Bc3RgbaUnorm;
//! assert_eq!(format.bytes_per_block(), 16);
//! assert_eq!(format.block_dimensions(), (4, 4));
//! assert_eq!(format.family(), FormatFamily::Bc);
//! assert_eq!(format.linear_to_srgb(), PixelFormat::Bc3RgbaUnormSrgb);
//!
//! # #[cfg(feature = "image")]
//! # {
//! let image = Image::new_2d(format, 512, 512, 1, 10)?;
//! assert_eq!(image.mip_level_extent(9), (1, 1));
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use texel_core as core;
pub use texel_format as format;

#[cfg(feature = "image")]
pub use texel_image as image;

pub use texel_format::{
    FormatDescriptor, FormatError, FormatFamily, FormatFlags, FormatKind, FormatResult,
    PixelFormat,
};

#[cfg(feature = "image")]
pub use texel_image::{
    ColorSpace, DecodeConfig, DecoderRegistry, EncodedFormat, Image, ImageDecoder,
    ImageDimension, ImageError, ImageLimits, ImageResult,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use texel_format::{FormatFamily, FormatFlags, FormatKind, PixelFormat};

    #[cfg(feature = "image")]
    pub use texel_image::{DecodeConfig, DecoderRegistry, EncodedFormat, Image, ImageDimension};
}
