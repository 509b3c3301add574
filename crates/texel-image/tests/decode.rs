//! End-to-end decoding through `Image::from_memory`.

#![cfg(feature = "codecs")]

use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use texel_format::PixelFormat;
use texel_image::{
    ColorSpace, DecodeConfig, DecodedImage, DecoderRegistry, EncodedFormat, Image,
    ImageDecoder, ImageDimension, ImageError, ImageResult,
};

fn checkerboard(width: u32, height: u32) -> DynamicImage {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 128])
        }
    });
    DynamicImage::ImageRgba8(image)
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("encode fixture");
    bytes
}

// ============================================================================
// Default decoders
// ============================================================================

#[test]
fn test_png_from_memory() {
    let bytes = encode(&checkerboard(5, 3), ImageFormat::Png);
    assert_eq!(EncodedFormat::detect(&bytes), Some(EncodedFormat::Png));

    let image = Image::from_memory(&bytes).unwrap();
    assert_eq!(image.dimension(), ImageDimension::D2);
    assert_eq!(image.format(), PixelFormat::Rgba8UnormSrgb);
    assert_eq!((image.width(), image.height()), (5, 3));
    assert_eq!(image.depth_or_array_layers(), 1);
    assert_eq!(image.mip_level_count(), 1);

    let data = image.data().unwrap();
    assert_eq!(data.len() as u64, image.data_size());
    assert_eq!(&data[..8], &[255, 255, 255, 255, 0, 0, 0, 128]);
    image.destroy();
}

#[test]
fn test_qoi_from_memory() {
    let bytes = encode(&checkerboard(16, 9), ImageFormat::Qoi);
    assert_eq!(EncodedFormat::detect(&bytes), Some(EncodedFormat::Qoi));

    let image = Image::from_memory(&bytes).unwrap();
    assert_eq!((image.width(), image.height()), (16, 9));
    assert_eq!(image.data().map(<[u8]>::len), Some(16 * 9 * 4));
}

#[test]
fn test_linear_color_space() {
    let bytes = encode(&checkerboard(2, 2), ImageFormat::Png);
    let registry = DecoderRegistry::with_defaults();
    let config = DecodeConfig::default().with_color_space(ColorSpace::Linear);

    let image = Image::from_memory_with(&bytes, &registry, &config).unwrap();
    assert_eq!(image.format(), PixelFormat::Rgba8Unorm);
}

#[test]
fn test_limits_reject_oversized_images() {
    let bytes = encode(&checkerboard(64, 64), ImageFormat::Png);
    let registry = DecoderRegistry::with_defaults();
    let config = DecodeConfig::default().with_max_extent(32, 128);

    let err = Image::from_memory_with(&bytes, &registry, &config).unwrap_err();
    assert_eq!(
        err,
        ImageError::LimitsExceeded {
            width: 64,
            height: 64,
            limit: "max_width"
        }
    );
}

#[test]
fn test_rejected_inputs() {
    assert_eq!(Image::from_memory(&[]), Err(ImageError::EmptyData));
    assert_eq!(
        Image::from_memory(b"definitely not an image"),
        Err(ImageError::UnsupportedEncoding { encoding: None })
    );

    let mut bytes = encode(&checkerboard(4, 4), ImageFormat::Png);
    bytes.truncate(20);
    assert!(matches!(
        Image::from_memory(&bytes),
        Err(ImageError::Decode {
            encoding: EncodedFormat::Png,
            ..
        })
    ));
}

#[test]
fn test_default_registry_covers_every_container() {
    let registry = DecoderRegistry::with_defaults();
    assert_eq!(registry.supported_formats(), EncodedFormat::ALL.to_vec());
}

// ============================================================================
// Custom decoders
// ============================================================================

/// Decodes QOI headers only, producing a solid R8 image of the header size.
struct HeaderOnlyQoi;

impl ImageDecoder for HeaderOnlyQoi {
    fn formats(&self) -> &[EncodedFormat] {
        &[EncodedFormat::Qoi]
    }

    fn decode(&self, bytes: &[u8], _config: &DecodeConfig) -> ImageResult<DecodedImage> {
        let read_u32 = |at: usize| -> ImageResult<u32> {
            bytes
                .get(at..at + 4)
                .and_then(|b| b.try_into().ok())
                .map(u32::from_be_bytes)
                .ok_or_else(|| ImageError::Decode {
                    encoding: EncodedFormat::Qoi,
                    message: "truncated header".to_string(),
                })
        };
        let (width, height) = (read_u32(4)?, read_u32(8)?);

        Ok(DecodedImage {
            format: PixelFormat::R8Unorm,
            width,
            height,
            data: vec![7; (width * height) as usize],
        })
    }

    fn priority(&self) -> i32 {
        100
    }
}

#[test]
fn test_custom_decoder_overrides_default() {
    let mut registry = DecoderRegistry::with_defaults();
    registry.register_arc(Arc::new(HeaderOnlyQoi));

    let qoi = encode(&checkerboard(3, 5), ImageFormat::Qoi);
    let image = Image::from_memory_with(&qoi, &registry, &DecodeConfig::default()).unwrap();
    assert_eq!(image.format(), PixelFormat::R8Unorm);
    assert_eq!((image.width(), image.height()), (3, 5));
    assert_eq!(image.into_data(), Some(vec![7; 15]));

    // PNG still goes through the default decoder.
    let png = encode(&checkerboard(3, 5), ImageFormat::Png);
    let image = Image::from_memory_with(&png, &registry, &DecodeConfig::default()).unwrap();
    assert_eq!(image.format(), PixelFormat::Rgba8UnormSrgb);
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = Arc::new(DecoderRegistry::with_defaults());
    let bytes = Arc::new(encode(&checkerboard(8, 8), ImageFormat::Png));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let bytes = Arc::clone(&bytes);
            std::thread::spawn(move || {
                Image::from_memory_with(&bytes, &registry, &DecodeConfig::default())
                    .map(|image| image.data_size())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(8 * 8 * 4));
    }
}
