//! The C ABI must agree with the typed API for every ordinal.

use std::ffi::{CStr, c_void};
use std::io::Cursor;

use bytemuck::Zeroable;
use texel_ffi::*;
use texel_format::{FormatKind, PixelFormat};

fn is_true(value: Bool32) -> bool {
    match value {
        TEXEL_TRUE => true,
        TEXEL_FALSE => false,
        other => panic!("not a Bool32: {other}"),
    }
}

// ============================================================================
// Format registry
// ============================================================================

#[test]
fn test_predicates_mirror_typed_api() {
    for format in PixelFormat::ALL {
        let ordinal = format.ordinal();
        assert_eq!(is_true(texel_is_depth_format(ordinal)), format.is_depth());
        assert_eq!(is_true(texel_is_stencil_format(ordinal)), format.is_stencil());
        assert_eq!(
            is_true(texel_is_depth_stencil_format(ordinal)),
            format.is_depth_stencil()
        );
        assert_eq!(is_true(texel_is_depth_only_format(ordinal)), format.is_depth_only());
        assert_eq!(is_true(texel_is_compressed_format(ordinal)), format.is_compressed());
        assert_eq!(
            is_true(texel_is_bc_compressed_format(ordinal)),
            format.is_bc_compressed()
        );
        assert_eq!(
            is_true(texel_is_etc2_compressed_format(ordinal)),
            format.is_etc2_compressed()
        );
        assert_eq!(
            is_true(texel_is_astc_compressed_format(ordinal)),
            format.is_astc_compressed()
        );
        assert_eq!(is_true(texel_is_integer_format(ordinal)), format.is_integer());
        assert_eq!(is_true(texel_is_srgb_format(ordinal)), format.is_srgb());
        assert_eq!(texel_get_format_kind(ordinal), format.kind() as u32);
        assert!(texel_get_format_kind(ordinal) < FormatKind::COUNT);
        assert_eq!(texel_format_bytes_per_block(ordinal), format.bytes_per_block());
        assert_eq!(
            texel_srgb_to_linear_format(ordinal),
            format.srgb_to_linear().ordinal()
        );
        assert_eq!(
            texel_linear_to_srgb_format(ordinal),
            format.linear_to_srgb().ordinal()
        );

        let name = unsafe { CStr::from_ptr(texel_format_name(ordinal)) };
        assert_eq!(name.to_str(), Ok(format.name()));
    }
}

#[test]
fn test_format_info_matches_descriptor() {
    for format in PixelFormat::ALL {
        let mut info = TexelFormatInfo::zeroed();
        assert!(is_true(unsafe {
            texel_get_format_info(format.ordinal(), &mut info)
        }));

        let desc = format.descriptor();
        assert_eq!(info.format, format.ordinal());
        assert_eq!(info.bytes_per_block, desc.bytes_per_block);
        assert_eq!((info.block_width, info.block_height), (desc.block_width, desc.block_height));
        assert_eq!(info.kind, desc.kind as u32);
    }
}

#[test]
fn test_sentinel_ordinals() {
    for ordinal in [PixelFormat::COUNT, PixelFormat::COUNT + 1, u32::MAX] {
        assert_eq!(texel_format_bytes_per_block(ordinal), 0);
        assert_eq!(texel_get_format_kind(ordinal), 0x7FFF_FFFF);
        assert!(!is_true(texel_is_depth_format(ordinal)));
        assert!(!is_true(texel_is_compressed_format(ordinal)));
        assert!(!is_true(texel_is_astc_compressed_format(ordinal)));
        assert!(!is_true(texel_is_srgb_format(ordinal)));
        assert_eq!(texel_srgb_to_linear_format(ordinal), ordinal);
        assert_eq!(texel_linear_to_srgb_format(ordinal), ordinal);
        assert!(texel_format_name(ordinal).is_null());

        let mut info = TexelFormatInfo::zeroed();
        assert!(!is_true(unsafe { texel_get_format_info(ordinal, &mut info) }));
    }
}

// ============================================================================
// Image handles
// ============================================================================

#[test]
fn test_create_2d_handle() {
    let image = texel_image_create_2d(PixelFormat::Bc7RgbaUnormSrgb.ordinal(), 64, 32, 6, 7);
    assert!(!image.is_null());

    unsafe {
        assert_eq!(texel_image_get_dimension(image), 1);
        assert_eq!(texel_image_get_format(image), PixelFormat::Bc7RgbaUnormSrgb.ordinal());
        assert_eq!(texel_image_get_width(image), 64);
        assert_eq!(texel_image_get_height(image), 32);
        assert_eq!(texel_image_get_depth_or_array_layers(image), 6);
        assert_eq!(texel_image_get_mip_level_count(image), 7);
        assert!(texel_image_get_data(image).is_null());
        texel_image_destroy(image);
    }
}

#[test]
fn test_create_2d_rejects_zero_extent() {
    let format = PixelFormat::Rgba8Unorm.ordinal();
    assert!(texel_image_create_2d(format, 0, 4, 1, 1).is_null());
    assert!(texel_image_create_2d(format, 4, 0, 1, 1).is_null());
    assert!(texel_image_create_2d(format, 4, 4, 0, 1).is_null());
}

#[test]
fn test_data_size_of_largest_image_saturates() {
    let image = texel_image_create_2d(
        PixelFormat::Rgba32Float.ordinal(),
        u32::MAX,
        u32::MAX,
        u32::MAX,
        u32::MAX,
    );
    assert!(!image.is_null());

    unsafe {
        assert_eq!(texel_image_get_data_size(image), u64::MAX);
        assert_eq!(texel_image_get_mip_level_count(image), u32::MAX);
        texel_image_destroy(image);
    }
}

#[test]
fn test_destroy_null_is_noop() {
    unsafe { texel_image_destroy(std::ptr::null_mut()) };
}

#[test]
fn test_create_from_memory() {
    let source = image::DynamicImage::new_rgba8(6, 4);
    let mut png = Vec::new();
    source
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .expect("encode fixture");

    unsafe {
        let image = texel_image_create_from_memory(png.as_ptr().cast::<c_void>(), png.len());
        assert!(!image.is_null());
        assert_eq!(texel_image_get_width(image), 6);
        assert_eq!(texel_image_get_height(image), 4);
        assert_eq!(texel_image_get_format(image), PixelFormat::Rgba8UnormSrgb.ordinal());
        assert_eq!(texel_image_get_data_size(image), 6 * 4 * 4);

        let data = texel_image_get_data(image);
        assert!(!data.is_null());
        let pixels = std::slice::from_raw_parts(data, 6 * 4 * 4);
        assert!(pixels.iter().all(|&b| b == 0));

        texel_image_destroy(image);
    }
}

#[test]
fn test_create_from_memory_rejects_bad_input() {
    unsafe {
        assert!(texel_image_create_from_memory(std::ptr::null(), 16).is_null());

        let bytes = [0u8; 16];
        assert!(texel_image_create_from_memory(bytes.as_ptr().cast(), 0).is_null());
        assert!(texel_image_create_from_memory(bytes.as_ptr().cast(), bytes.len()).is_null());
    }
}
