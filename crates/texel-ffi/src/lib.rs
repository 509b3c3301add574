//! Texel FFI
//!
//! C ABI over `texel-format` and `texel-image`, built as a `cdylib`.
//!
//! Formats are passed as `u32` ordinals of [`texel_format::PixelFormat`];
//! booleans are [`Bool32`]. No entry point panics or unwinds on bad input:
//! out-of-range formats and null pointers produce `TEXEL_FALSE`, 0, a
//! sentinel or a null handle.

mod format;
mod handle;

pub use format::*;
pub use handle::*;

/// 32-bit boolean: [`TEXEL_FALSE`] or [`TEXEL_TRUE`].
pub type Bool32 = u32;

pub const TEXEL_FALSE: Bool32 = 0;
pub const TEXEL_TRUE: Bool32 = 1;

#[inline]
pub(crate) fn bool32(value: bool) -> Bool32 {
    if value { TEXEL_TRUE } else { TEXEL_FALSE }
}
