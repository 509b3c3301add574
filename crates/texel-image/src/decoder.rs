//! Decoder trait and registry.

use std::sync::Arc;

use texel_core::alloc::HashMap;
use texel_format::PixelFormat;

use crate::config::DecodeConfig;
use crate::encoded::EncodedFormat;
use crate::error::{ImageError, ImageResult};

/// Default priority for decoders.
pub const DEFAULT_DECODER_PRIORITY: i32 = 0;

/// Pixels produced by an [`ImageDecoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
    /// Tightly packed texels, `format.surface_info(width, height).slice_pitch` bytes.
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Byte length `data` should have for this format and extent, saturating
    /// at `u64::MAX`.
    pub fn expected_len(&self) -> u64 {
        self.format.surface_info(self.width, self.height).slice_pitch
    }
}

/// Trait for turning encoded bytes into pixels.
///
/// # Example
///
/// ```ignore
/// struct RawRgbaDecoder;
///
/// impl ImageDecoder for RawRgbaDecoder {
///     fn formats(&self) -> &[EncodedFormat] {
///         &[EncodedFormat::Qoi]
///     }
///
///     fn decode(&self, bytes: &[u8], config: &DecodeConfig) -> ImageResult<DecodedImage> {
///         // Decode bytes into RGBA8...
///     }
/// }
/// ```
pub trait ImageDecoder: Send + Sync + 'static {
    /// Containers this decoder handles.
    fn formats(&self) -> &[EncodedFormat];

    /// Decode one image. `bytes` has already been identified as one of
    /// [`formats`](Self::formats).
    fn decode(&self, bytes: &[u8], config: &DecodeConfig) -> ImageResult<DecodedImage>;

    /// Higher priority decoders are tried first when several handle the
    /// same container.
    fn priority(&self) -> i32 {
        DEFAULT_DECODER_PRIORITY
    }

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

struct DecoderEntry {
    decoder: Arc<dyn ImageDecoder>,
    priority: i32,
}

/// Registry of decoders, indexed by container format.
///
/// Built once by its owner and then shared read-only.
#[derive(Default)]
pub struct DecoderRegistry {
    /// Sorted by priority (highest first).
    by_format: HashMap<EncodedFormat, Vec<DecoderEntry>>,
}

impl DecoderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the `image`-crate backed decoder.
    #[cfg(feature = "codecs")]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::codecs::ImageCrateDecoder);
        registry
    }

    /// Register a decoder for every container it declares.
    pub fn register<D: ImageDecoder>(&mut self, decoder: D) {
        self.register_arc(Arc::new(decoder));
    }

    pub fn register_arc(&mut self, decoder: Arc<dyn ImageDecoder>) {
        let priority = decoder.priority();
        tracing::debug!(
            decoder = decoder.name(),
            priority,
            formats = ?decoder.formats(),
            "Registering image decoder"
        );

        for &format in decoder.formats() {
            let entries = self.by_format.entry(format).or_default();
            entries.push(DecoderEntry {
                decoder: decoder.clone(),
                priority,
            });
            entries.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
    }

    /// Highest-priority decoder for a container.
    pub fn decoder_for(&self, format: EncodedFormat) -> Option<&Arc<dyn ImageDecoder>> {
        self.by_format
            .get(&format)
            .and_then(|entries| entries.first())
            .map(|entry| &entry.decoder)
    }

    pub fn supports(&self, format: EncodedFormat) -> bool {
        self.by_format.contains_key(&format)
    }

    /// Containers with at least one decoder.
    pub fn supported_formats(&self) -> Vec<EncodedFormat> {
        EncodedFormat::ALL
            .into_iter()
            .filter(|format| self.supports(*format))
            .collect()
    }

    /// Sniff the container, decode with the best decoder and validate the
    /// result against `config`.
    pub fn decode(&self, bytes: &[u8], config: &DecodeConfig) -> ImageResult<DecodedImage> {
        texel_core::profiling::profile_function!();

        if bytes.is_empty() {
            return Err(ImageError::EmptyData);
        }

        let encoding = EncodedFormat::detect(bytes);
        let decoder = encoding
            .and_then(|format| self.decoder_for(format))
            .ok_or_else(|| {
                tracing::warn!(?encoding, len = bytes.len(), "No decoder for image data");
                ImageError::UnsupportedEncoding { encoding }
            })?;

        tracing::trace!(?encoding, decoder = decoder.name(), "Decoding image");
        let decoded = decoder.decode(bytes, config)?;

        if let Some(limit) = config.limits.check(decoded.width, decoded.height) {
            return Err(ImageError::LimitsExceeded {
                width: decoded.width,
                height: decoded.height,
                limit,
            });
        }
        if decoded.width == 0 || decoded.height == 0 {
            return Err(ImageError::InvalidDimensions {
                width: decoded.width,
                height: decoded.height,
                array_layers: 1,
            });
        }

        let expected = decoded.expected_len();
        let actual = decoded.data.len() as u64;
        if expected != actual {
            return Err(ImageError::DataSize { expected, actual });
        }

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImageLimits;

    /// Pretends every QOI buffer is a 2×2 RGBA8 image filled with `value`.
    struct FillDecoder {
        value: u8,
        priority: i32,
    }

    impl ImageDecoder for FillDecoder {
        fn formats(&self) -> &[EncodedFormat] {
            &[EncodedFormat::Qoi]
        }

        fn decode(&self, _bytes: &[u8], config: &DecodeConfig) -> ImageResult<DecodedImage> {
            Ok(DecodedImage {
                format: config.color_space.apply(PixelFormat::Rgba8Unorm),
                width: 2,
                height: 2,
                data: vec![self.value; 16],
            })
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    struct ShortDecoder;

    impl ImageDecoder for ShortDecoder {
        fn formats(&self) -> &[EncodedFormat] {
            &[EncodedFormat::Qoi]
        }

        fn decode(&self, _bytes: &[u8], _config: &DecodeConfig) -> ImageResult<DecodedImage> {
            Ok(DecodedImage {
                format: PixelFormat::Rgba8Unorm,
                width: 2,
                height: 2,
                data: vec![0; 3],
            })
        }
    }

    /// Claims a `u32::MAX` square RGBA32F image backed by four bytes.
    struct BogusExtentDecoder;

    impl ImageDecoder for BogusExtentDecoder {
        fn formats(&self) -> &[EncodedFormat] {
            &[EncodedFormat::Qoi]
        }

        fn decode(&self, _bytes: &[u8], _config: &DecodeConfig) -> ImageResult<DecodedImage> {
            Ok(DecodedImage {
                format: PixelFormat::Rgba32Float,
                width: u32::MAX,
                height: u32::MAX,
                data: vec![0; 4],
            })
        }
    }

    const QOI_HEADER: &[u8] = b"qoif\0\0\0\x02\0\0\0\x02\x04\x00";

    #[test]
    fn test_highest_priority_wins() {
        let mut registry = DecoderRegistry::new();
        registry.register(FillDecoder {
            value: 1,
            priority: -10,
        });
        registry.register(FillDecoder {
            value: 2,
            priority: 10,
        });
        registry.register(FillDecoder {
            value: 3,
            priority: 0,
        });

        let decoded = registry.decode(QOI_HEADER, &DecodeConfig::default()).unwrap();
        assert_eq!(decoded.data, vec![2; 16]);
        assert_eq!(decoded.format, PixelFormat::Rgba8UnormSrgb);
    }

    #[test]
    fn test_unsupported_encoding() {
        let registry = DecoderRegistry::new();
        assert!(!registry.supports(EncodedFormat::Qoi));
        assert_eq!(
            registry.decode(QOI_HEADER, &DecodeConfig::default()),
            Err(ImageError::UnsupportedEncoding {
                encoding: Some(EncodedFormat::Qoi)
            })
        );
        assert_eq!(
            registry.decode(b"not an image", &DecodeConfig::default()),
            Err(ImageError::UnsupportedEncoding { encoding: None })
        );
        assert_eq!(
            registry.decode(&[], &DecodeConfig::default()),
            Err(ImageError::EmptyData)
        );
    }

    #[test]
    fn test_limits_and_size_validation() {
        let mut registry = DecoderRegistry::new();
        registry.register(FillDecoder {
            value: 0,
            priority: 0,
        });
        let config = DecodeConfig::default().with_max_extent(1, 1);
        assert!(matches!(
            registry.decode(QOI_HEADER, &config),
            Err(ImageError::LimitsExceeded { limit: "max_width", .. })
        ));

        let mut registry = DecoderRegistry::new();
        registry.register(ShortDecoder);
        assert_eq!(
            registry.decode(QOI_HEADER, &DecodeConfig::default()),
            Err(ImageError::DataSize {
                expected: 16,
                actual: 3
            })
        );
    }

    #[test]
    fn test_unlimited_decode_with_bogus_extent() {
        let mut registry = DecoderRegistry::new();
        registry.register(BogusExtentDecoder);
        let config = DecodeConfig::default().with_limits(ImageLimits::UNLIMITED);
        assert_eq!(
            registry.decode(QOI_HEADER, &config),
            Err(ImageError::DataSize {
                expected: u64::MAX,
                actual: 4
            })
        );
    }

    #[test]
    fn test_supported_formats() {
        let mut registry = DecoderRegistry::new();
        registry.register(ShortDecoder);
        assert_eq!(registry.supported_formats(), vec![EncodedFormat::Qoi]);
        assert!(registry.decoder_for(EncodedFormat::Png).is_none());
    }
}
