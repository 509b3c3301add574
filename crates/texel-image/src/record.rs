//! Owned image records.

use texel_format::{PixelFormat, SurfaceInfo, max_mip_levels, mip_extent};

use crate::config::DecodeConfig;
use crate::decoder::{DecodedImage, DecoderRegistry};
use crate::dimension::ImageDimension;
use crate::error::{ImageError, ImageResult};

/// An image: its shape, format and (optionally) its pixels.
///
/// Images are move-only. [`Image::destroy`] consumes the value, and dropping
/// it has the same effect.
#[derive(Debug, PartialEq, Eq)]
pub struct Image {
    dimension: ImageDimension,
    format: PixelFormat,
    width: u32,
    height: u32,
    depth_or_array_layers: u32,
    mip_level_count: u32,
    data: Option<Vec<u8>>,
}

impl Image {
    /// Describe a 2D image without allocating pixel storage.
    ///
    /// Fails with [`ImageError::InvalidDimensions`] if `width`, `height` or
    /// `array_layers` is zero. `mip_level_count` is stored as given.
    pub fn new_2d(
        format: PixelFormat,
        width: u32,
        height: u32,
        array_layers: u32,
        mip_level_count: u32,
    ) -> ImageResult<Self> {
        if width == 0 || height == 0 || array_layers == 0 {
            tracing::warn!(width, height, array_layers, "Rejecting 2D image with a zero extent");
            return Err(ImageError::InvalidDimensions {
                width,
                height,
                array_layers,
            });
        }

        tracing::debug!(
            %format,
            width,
            height,
            array_layers,
            mip_level_count,
            "Created 2D image"
        );

        Ok(Self {
            dimension: ImageDimension::D2,
            format,
            width,
            height,
            depth_or_array_layers: array_layers,
            mip_level_count,
            data: None,
        })
    }

    /// Decode an encoded image (PNG, JPEG, QOI, ...) with the default decoders.
    #[cfg(feature = "codecs")]
    pub fn from_memory(bytes: &[u8]) -> ImageResult<Self> {
        use std::sync::OnceLock;

        static DEFAULT_REGISTRY: OnceLock<DecoderRegistry> = OnceLock::new();
        let registry = DEFAULT_REGISTRY.get_or_init(DecoderRegistry::with_defaults);

        Self::from_memory_with(bytes, registry, &DecodeConfig::default())
    }

    /// Decode an encoded image through `registry`.
    ///
    /// The result is a single-layer 2D image with one mip level that owns its
    /// pixels.
    pub fn from_memory_with(
        bytes: &[u8],
        registry: &DecoderRegistry,
        config: &DecodeConfig,
    ) -> ImageResult<Self> {
        let decoded = registry.decode(bytes, config)?;
        Ok(Self::from_decoded(decoded))
    }

    /// Wrap already decoded pixels.
    pub fn from_decoded(decoded: DecodedImage) -> Self {
        let DecodedImage {
            format,
            width,
            height,
            data,
        } = decoded;

        tracing::debug!(%format, width, height, bytes = data.len(), "Created image from memory");

        Self {
            dimension: ImageDimension::D2,
            format,
            width,
            height,
            depth_or_array_layers: 1,
            mip_level_count: 1,
            data: Some(data),
        }
    }

    /// Release the pixel buffer and the record.
    pub fn destroy(self) {
        tracing::debug!(
            dimension = %self.dimension,
            format = %self.format,
            width = self.width,
            height = self.height,
            "Destroying image"
        );
        drop(self);
    }

    #[inline]
    pub fn dimension(&self) -> ImageDimension {
        self.dimension
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn depth_or_array_layers(&self) -> u32 {
        self.depth_or_array_layers
    }

    #[inline]
    pub fn mip_level_count(&self) -> u32 {
        self.mip_level_count
    }

    /// Pixel bytes, if the image owns any.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn into_data(self) -> Option<Vec<u8>> {
        self.data
    }

    /// Width and height of mip `level`, each clamped to 1.
    pub fn mip_level_extent(&self, level: u32) -> (u32, u32) {
        (mip_extent(self.width, level), mip_extent(self.height, level))
    }

    /// Layout of one layer at mip `level`.
    pub fn mip_level_surface(&self, level: u32) -> SurfaceInfo {
        let (width, height) = self.mip_level_extent(level);
        self.format.surface_info(width, height)
    }

    /// Bytes needed to store every layer and mip level tightly packed.
    ///
    /// This is the size of the backing buffer for decoded images; for records
    /// created with [`Image::new_2d`] it is what a caller would need to allocate.
    /// Mip levels past the full chain are not counted. Saturates at `u64::MAX`
    /// when the image is too large to address.
    pub fn data_size(&self) -> u64 {
        let levels = self
            .mip_level_count
            .clamp(1, max_mip_levels(self.width, self.height).max(1));
        let layer_size = (0..levels)
            .map(|level| self.mip_level_surface(level).slice_pitch)
            .fold(0u64, u64::saturating_add);
        layer_size.saturating_mul(self.depth_or_array_layers as u64)
    }
}
