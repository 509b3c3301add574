//! Queries over raw `u32` ordinals.
//!
//! Format values read from file headers or received over the C boundary are
//! untrusted. Every function here is total: an ordinal at or past
//! [`PixelFormat::COUNT`] is answered with `false`, `None`, or the input
//! unchanged, never a panic.

use crate::format::{FormatKind, PixelFormat};

pub use crate::table::{bytes_per_block, lookup};

#[inline]
fn classify(ordinal: u32, pred: impl FnOnce(PixelFormat) -> bool) -> bool {
    PixelFormat::from_ordinal(ordinal).is_some_and(pred)
}

/// Kind of the format, or `None` when the ordinal is out of range.
pub fn kind(ordinal: u32) -> Option<FormatKind> {
    PixelFormat::from_ordinal(ordinal).map(PixelFormat::kind)
}

pub fn name(ordinal: u32) -> Option<&'static str> {
    PixelFormat::from_ordinal(ordinal).map(PixelFormat::name)
}

pub fn is_depth(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_depth)
}

pub fn is_stencil(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_stencil)
}

pub fn is_depth_stencil(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_depth_stencil)
}

pub fn is_depth_only(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_depth_only)
}

pub fn is_compressed(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_compressed)
}

pub fn is_bc_compressed(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_bc_compressed)
}

pub fn is_etc2_compressed(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_etc2_compressed)
}

pub fn is_astc_compressed(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_astc_compressed)
}

pub fn is_integer(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_integer)
}

pub fn is_srgb(ordinal: u32) -> bool {
    classify(ordinal, PixelFormat::is_srgb)
}

/// Linear counterpart of an sRGB ordinal; anything else comes back unchanged.
pub fn srgb_to_linear(ordinal: u32) -> u32 {
    PixelFormat::from_ordinal(ordinal).map_or(ordinal, |f| f.srgb_to_linear().ordinal())
}

/// sRGB counterpart of a linear ordinal; anything else comes back unchanged.
pub fn linear_to_srgb(ordinal: u32) -> u32 {
    PixelFormat::from_ordinal(ordinal).map_or(ordinal, |f| f.linear_to_srgb().ordinal())
}
