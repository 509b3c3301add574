//! Image record entry points.
//!
//! Images cross the boundary as `*mut Image` handles obtained from one of the
//! create functions and released with [`texel_image_destroy`]. Any failure is
//! reported as a null handle; the reason is logged through `tracing`.

use std::ffi::c_void;

use texel_format::PixelFormat;
use texel_image::{Image, ImageError, ImageResult};

/// Returned by [`texel_image_get_dimension`] for a null handle.
pub const TEXEL_INVALID_DIMENSION: u32 = 0x7FFF_FFFF;

fn into_handle(result: ImageResult<Image>, entry: &str) -> *mut Image {
    match result {
        Ok(image) => Box::into_raw(Box::new(image)),
        Err(err) => {
            tracing::warn!("{}: {}", entry, err);
            std::ptr::null_mut()
        }
    }
}

/// Describe a 2D image with no pixel storage.
///
/// Returns null if `format` is out of range or `width`, `height` or
/// `array_layers` is zero.
#[unsafe(no_mangle)]
pub extern "C" fn texel_image_create_2d(
    format: u32,
    width: u32,
    height: u32,
    array_layers: u32,
    mip_level_count: u32,
) -> *mut Image {
    let result = PixelFormat::try_from(format)
        .map_err(ImageError::from)
        .and_then(|format| Image::new_2d(format, width, height, array_layers, mip_level_count));
    into_handle(result, "texel_image_create_2d")
}

/// Decode an encoded image (PNG, JPEG, QOI, ...).
///
/// Returns null if `data` is null, `size` is zero, or decoding fails.
///
/// # Safety
///
/// `data` must be null or valid for reads of `size` bytes for the duration of
/// the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_create_from_memory(data: *const c_void, size: usize) -> *mut Image {
    if data.is_null() || size == 0 {
        return into_handle(Err(ImageError::EmptyData), "texel_image_create_from_memory");
    }

    // SAFETY: `data` is non-null and the caller guarantees `size` readable bytes.
    let bytes = unsafe { std::slice::from_raw_parts(data.cast::<u8>(), size) };
    into_handle(Image::from_memory(bytes), "texel_image_create_from_memory")
}

/// Release an image and its pixels. Null is a no-op.
///
/// # Safety
///
/// `image` must be null or a handle returned by a `texel_image_create_*`
/// function that has not been destroyed yet. Destroying a handle twice is
/// undefined behaviour.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_destroy(image: *mut Image) {
    if image.is_null() {
        return;
    }
    // SAFETY: the caller guarantees `image` came from `Box::into_raw` and is still live.
    let image = unsafe { Box::from_raw(image) };
    image.destroy();
}

/// # Safety
///
/// `image` must be null or a live handle.
unsafe fn with_image<T>(image: *const Image, default: T, f: impl FnOnce(&Image) -> T) -> T {
    // SAFETY: forwarded from the caller.
    match unsafe { image.as_ref() } {
        Some(image) => f(image),
        None => default,
    }
}

/// Dimension ordinal (1D = 0, 2D = 1, 3D = 2, Cube = 3).
///
/// # Safety
///
/// `image` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_get_dimension(image: *const Image) -> u32 {
    // SAFETY: forwarded from the caller.
    unsafe { with_image(image, TEXEL_INVALID_DIMENSION, |i| i.dimension().ordinal()) }
}

/// Format ordinal; `Undefined` (0) for a null handle.
///
/// # Safety
///
/// `image` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_get_format(image: *const Image) -> u32 {
    // SAFETY: forwarded from the caller.
    unsafe { with_image(image, 0, |i| i.format().ordinal()) }
}

/// # Safety
///
/// `image` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_get_width(image: *const Image) -> u32 {
    // SAFETY: forwarded from the caller.
    unsafe { with_image(image, 0, Image::width) }
}

/// # Safety
///
/// `image` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_get_height(image: *const Image) -> u32 {
    // SAFETY: forwarded from the caller.
    unsafe { with_image(image, 0, Image::height) }
}

/// # Safety
///
/// `image` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_get_depth_or_array_layers(image: *const Image) -> u32 {
    // SAFETY: forwarded from the caller.
    unsafe { with_image(image, 0, Image::depth_or_array_layers) }
}

/// # Safety
///
/// `image` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_get_mip_level_count(image: *const Image) -> u32 {
    // SAFETY: forwarded from the caller.
    unsafe { with_image(image, 0, Image::mip_level_count) }
}

/// Bytes needed for every layer and mip level, tightly packed; `u64::MAX`
/// when that does not fit.
///
/// # Safety
///
/// `image` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_get_data_size(image: *const Image) -> u64 {
    // SAFETY: forwarded from the caller.
    unsafe { with_image(image, 0, Image::data_size) }
}

/// Pixel bytes, or null when the image owns none.
///
/// The pointer stays valid until the image is destroyed.
///
/// # Safety
///
/// `image` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_image_get_data(image: *const Image) -> *const u8 {
    // SAFETY: forwarded from the caller.
    unsafe {
        with_image(image, std::ptr::null(), |i| {
            i.data().map_or(std::ptr::null(), <[u8]>::as_ptr)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_query() {
        let image = texel_image_create_2d(PixelFormat::Rgba8Unorm.ordinal(), 4, 4, 1, 1);
        assert!(!image.is_null());
        unsafe {
            assert_eq!(texel_image_get_width(image), 4);
            assert_eq!(texel_image_get_dimension(image), 1);
            assert_eq!(texel_image_get_data_size(image), 64);
            assert!(texel_image_get_data(image).is_null());
            texel_image_destroy(image);
        }
    }

    #[test]
    fn test_invalid_format_is_null() {
        assert!(texel_image_create_2d(PixelFormat::COUNT, 4, 4, 1, 1).is_null());
    }

    #[test]
    fn test_null_handle_queries() {
        unsafe {
            assert_eq!(texel_image_get_width(std::ptr::null()), 0);
            assert_eq!(
                texel_image_get_dimension(std::ptr::null()),
                TEXEL_INVALID_DIMENSION
            );
            assert!(texel_image_get_data(std::ptr::null()).is_null());
        }
    }
}
