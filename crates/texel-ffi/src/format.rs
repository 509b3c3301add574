//! Format registry entry points.
//!
//! Every function takes the format as a raw `u32` and is total: ordinals at or
//! past the format count answer `TEXEL_FALSE`, 0, [`TEXEL_INVALID_KIND`] or
//! the input unchanged.

use std::ffi::{CString, c_char};
use std::sync::OnceLock;

use bytemuck::{Pod, Zeroable};
use texel_format::{FormatDescriptor, PixelFormat, raw};

use crate::{Bool32, TEXEL_FALSE, TEXEL_TRUE, bool32};

/// Returned by [`texel_get_format_kind`] for out-of-range formats.
pub const TEXEL_INVALID_KIND: u32 = 0x7FFF_FFFF;

/// C view of a format descriptor.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct TexelFormatInfo {
    pub format: u32,
    pub bytes_per_block: u8,
    pub block_width: u8,
    pub block_height: u8,
    pub _reserved: u8,
    pub kind: u32,
}

static_assertions::assert_eq_size!(TexelFormatInfo, [u32; 3]);

impl From<FormatDescriptor> for TexelFormatInfo {
    fn from(desc: FormatDescriptor) -> Self {
        Self {
            format: desc.format.ordinal(),
            bytes_per_block: desc.bytes_per_block,
            block_width: desc.block_width,
            block_height: desc.block_height,
            _reserved: 0,
            kind: desc.kind as u32,
        }
    }
}

/// Copy the descriptor of `format` into `*info`.
///
/// Returns `TEXEL_FALSE` and leaves `*info` untouched if `format` is out of
/// range or `info` is null.
///
/// # Safety
///
/// `info` must be null or valid for a write of one `TexelFormatInfo`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_get_format_info(format: u32, info: *mut TexelFormatInfo) -> Bool32 {
    if info.is_null() {
        return TEXEL_FALSE;
    }
    match texel_format::lookup(format) {
        Ok(desc) => {
            // SAFETY: `info` is non-null and the caller guarantees it is writable.
            unsafe { info.write(desc.into()) };
            TEXEL_TRUE
        }
        Err(err) => {
            tracing::warn!("texel_get_format_info: {}", err);
            TEXEL_FALSE
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_format_bytes_per_block(format: u32) -> u32 {
    raw::bytes_per_block(format)
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_depth_format(format: u32) -> Bool32 {
    bool32(raw::is_depth(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_stencil_format(format: u32) -> Bool32 {
    bool32(raw::is_stencil(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_depth_stencil_format(format: u32) -> Bool32 {
    bool32(raw::is_depth_stencil(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_depth_only_format(format: u32) -> Bool32 {
    bool32(raw::is_depth_only(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_compressed_format(format: u32) -> Bool32 {
    bool32(raw::is_compressed(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_bc_compressed_format(format: u32) -> Bool32 {
    bool32(raw::is_bc_compressed(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_etc2_compressed_format(format: u32) -> Bool32 {
    bool32(raw::is_etc2_compressed(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_astc_compressed_format(format: u32) -> Bool32 {
    bool32(raw::is_astc_compressed(format))
}

/// Kind ordinal of `format`, or [`TEXEL_INVALID_KIND`].
#[unsafe(no_mangle)]
pub extern "C" fn texel_get_format_kind(format: u32) -> u32 {
    raw::kind(format).map_or(TEXEL_INVALID_KIND, |kind| kind as u32)
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_integer_format(format: u32) -> Bool32 {
    bool32(raw::is_integer(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_is_srgb_format(format: u32) -> Bool32 {
    bool32(raw::is_srgb(format))
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_srgb_to_linear_format(format: u32) -> u32 {
    raw::srgb_to_linear(format)
}

#[unsafe(no_mangle)]
pub extern "C" fn texel_linear_to_srgb_format(format: u32) -> u32 {
    raw::linear_to_srgb(format)
}

fn c_names() -> &'static [CString] {
    static NAMES: OnceLock<Vec<CString>> = OnceLock::new();
    NAMES.get_or_init(|| {
        PixelFormat::ALL
            .iter()
            .map(|format| CString::new(format.name()).unwrap_or_default())
            .collect()
    })
}

/// NUL-terminated name of `format`, or null when out of range.
///
/// The string is static; the caller must not free it.
#[unsafe(no_mangle)]
pub extern "C" fn texel_format_name(format: u32) -> *const c_char {
    c_names()
        .get(format as usize)
        .map_or(std::ptr::null(), |name| name.as_ptr())
}
