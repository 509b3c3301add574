//! Texel Image
//!
//! Owned image records built on the `texel-format` registry, plus decoding of
//! encoded containers (PNG, JPEG, BMP, GIF, Radiance HDR, QOI, OpenEXR)
//! through a pluggable [`DecoderRegistry`].
//!
//! # Example
//!
//! ```
//! use texel_format::PixelFormat;
//! use texel_image::{Image, ImageDimension, ImageError};
//!
//! let image = Image::new_2d(PixelFormat::Bc7RgbaUnorm, 256, 256, 1, 9)?;
//! assert_eq!(image.dimension(), ImageDimension::D2);
//! assert_eq!(image.mip_level_extent(3), (32, 32));
//! assert!(image.data().is_none());
//! image.destroy();
//!
//! assert!(matches!(
//!     Image::new_2d(PixelFormat::Rgba8Unorm, 0, 4, 1, 1),
//!     Err(ImageError::InvalidDimensions { .. })
//! ));
//! # Ok::<(), ImageError>(())
//! ```

#[cfg(feature = "codecs")]
mod codecs;
mod config;
mod decoder;
mod dimension;
mod encoded;
mod error;
mod record;

#[cfg(feature = "codecs")]
pub use codecs::ImageCrateDecoder;
pub use config::{ColorSpace, DEFAULT_MAX_EXTENT, DEFAULT_MAX_PIXELS, DecodeConfig, ImageLimits};
pub use decoder::{DEFAULT_DECODER_PRIORITY, DecodedImage, DecoderRegistry, ImageDecoder};
pub use dimension::ImageDimension;
pub use encoded::EncodedFormat;
pub use error::{ImageError, ImageResult};
pub use record::Image;

static_assertions::assert_impl_all!(Image: Send, Sync);
static_assertions::assert_impl_all!(DecoderRegistry: Send, Sync);
