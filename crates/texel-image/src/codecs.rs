//! Decoder backed by the `image` crate.

use std::io::Cursor;

use image::{ColorType, DynamicImage, ImageReader};
use texel_format::PixelFormat;

use crate::config::DecodeConfig;
use crate::decoder::{DecodedImage, ImageDecoder};
use crate::encoded::EncodedFormat;
use crate::error::{ImageError, ImageResult};

/// Worst-case bytes per decoded pixel (RGBA32F), used to size the
/// allocation limit handed to `image`.
const MAX_BYTES_PER_PIXEL: u64 = 16;

/// Decodes every [`EncodedFormat`] through `image`.
///
/// Output is expanded to four channels:
/// - 8-bit sources become `Rgba8UnormSrgb` or `Rgba8Unorm`, per
///   [`DecodeConfig::color_space`]
/// - 16-bit sources become `Rgba16Unorm`
/// - floating-point sources (Radiance HDR, OpenEXR) become `Rgba32Float`
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageCrateDecoder {
    fn codec_format(format: EncodedFormat) -> image::ImageFormat {
        match format {
            EncodedFormat::Png => image::ImageFormat::Png,
            EncodedFormat::Jpeg => image::ImageFormat::Jpeg,
            EncodedFormat::Bmp => image::ImageFormat::Bmp,
            EncodedFormat::Gif => image::ImageFormat::Gif,
            EncodedFormat::Hdr => image::ImageFormat::Hdr,
            EncodedFormat::Qoi => image::ImageFormat::Qoi,
            EncodedFormat::OpenExr => image::ImageFormat::OpenExr,
        }
    }

    fn reader(bytes: &[u8], format: EncodedFormat) -> ImageReader<Cursor<&[u8]>> {
        ImageReader::with_format(Cursor::new(bytes), Self::codec_format(format))
    }

    fn convert(image: DynamicImage, config: &DecodeConfig) -> DecodedImage {
        let (width, height) = (image.width(), image.height());

        match image.color() {
            ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => {
                let pixels = image.into_rgba16().into_raw();
                DecodedImage {
                    format: PixelFormat::Rgba16Unorm,
                    width,
                    height,
                    data: bytemuck::cast_slice(pixels.as_slice()).to_vec(),
                }
            }
            ColorType::Rgb32F | ColorType::Rgba32F => {
                let pixels = image.into_rgba32f().into_raw();
                DecodedImage {
                    format: PixelFormat::Rgba32Float,
                    width,
                    height,
                    data: bytemuck::cast_slice(pixels.as_slice()).to_vec(),
                }
            }
            _ => DecodedImage {
                format: config.color_space.apply(PixelFormat::Rgba8Unorm),
                width,
                height,
                data: image.into_rgba8().into_raw(),
            },
        }
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn formats(&self) -> &[EncodedFormat] {
        &EncodedFormat::ALL
    }

    fn decode(&self, bytes: &[u8], config: &DecodeConfig) -> ImageResult<DecodedImage> {
        let encoding = EncodedFormat::detect(bytes)
            .ok_or(ImageError::UnsupportedEncoding { encoding: None })?;
        let decode_error = |err: image::ImageError| ImageError::Decode {
            encoding,
            message: err.to_string(),
        };

        // Check the header before allocating anything.
        let (width, height) = Self::reader(bytes, encoding)
            .into_dimensions()
            .map_err(decode_error)?;
        if let Some(limit) = config.limits.check(width, height) {
            tracing::warn!(%encoding, width, height, limit, "Rejecting oversized image");
            return Err(ImageError::LimitsExceeded {
                width,
                height,
                limit,
            });
        }

        let mut limits = image::Limits::default();
        limits.max_image_width = Some(config.limits.max_width);
        limits.max_image_height = Some(config.limits.max_height);
        limits.max_alloc = Some(config.limits.max_pixels.saturating_mul(MAX_BYTES_PER_PIXEL));

        let mut reader = Self::reader(bytes, encoding);
        reader.limits(limits);
        let image = {
            texel_core::profiling::profile_scope!("image_crate_decode");
            reader.decode().map_err(decode_error)?
        };

        Ok(Self::convert(image, config))
    }

    fn name(&self) -> &'static str {
        "image"
    }
}
