//! Byte layout of a 2D surface in a given format.

use crate::format::PixelFormat;

/// Tightly packed layout of one `width × height` surface.
///
/// Compressed surfaces are measured in whole blocks: a 10×10 BC1 surface
/// occupies 3×3 blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceInfo {
    /// Bytes in one row of blocks.
    pub row_pitch: u64,
    /// Rows of blocks.
    pub row_count: u32,
    /// Bytes in the whole surface. Saturates at `u64::MAX`.
    pub slice_pitch: u64,
}

impl PixelFormat {
    /// Layout of a `width × height` surface, rounded up to whole blocks.
    ///
    /// `row_pitch` always fits; `slice_pitch` saturates to `u64::MAX` for
    /// surfaces too large to address.
    pub fn surface_info(self, width: u32, height: u32) -> SurfaceInfo {
        let (block_width, block_height) = self.block_dimensions();
        // Undefined has a 0×0 block; treat it as 1×1 with zero bytes.
        let blocks_wide = width.div_ceil(block_width.max(1));
        let row_count = height.div_ceil(block_height.max(1));
        let row_pitch = blocks_wide as u64 * self.bytes_per_block() as u64;

        SurfaceInfo {
            row_pitch,
            row_count,
            slice_pitch: row_pitch.saturating_mul(row_count as u64),
        }
    }
}

/// Size of mip `level` for a base extent, clamped to 1.
#[inline]
pub fn mip_extent(base: u32, level: u32) -> u32 {
    base.checked_shr(level).unwrap_or(0).max(1)
}

/// Length of a full mip chain for the largest of the given extents.
pub fn max_mip_levels(width: u32, height: u32) -> u32 {
    let largest = width.max(height);
    if largest == 0 {
        0
    } else {
        u32::BITS - largest.leading_zeros()
    }
}
