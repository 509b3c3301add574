//! The descriptor table: one immutable record per [`PixelFormat`].
//!
//! The table is plain `static` data indexed by ordinal. It is never mutated,
//! so lookups need no synchronization.

use crate::error::{FormatError, FormatResult};
use crate::format::{FormatKind, PixelFormat};

/// Physical layout and numeric kind of a pixel format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    pub format: PixelFormat,
    /// Canonical display name.
    pub name: &'static str,
    /// Bytes occupied by one block. 0 only for `Undefined`.
    pub bytes_per_block: u8,
    /// Block width in pixels; 1 for uncompressed formats.
    pub block_width: u8,
    /// Block height in pixels; 1 for uncompressed formats.
    pub block_height: u8,
    pub kind: FormatKind,
}

impl FormatDescriptor {
    /// Whether a block covers more than one pixel.
    #[inline]
    pub const fn is_block_compressed(&self) -> bool {
        self.block_width > 1 || self.block_height > 1
    }

    /// Pixels covered by one block.
    #[inline]
    pub const fn pixels_per_block(&self) -> u32 {
        self.block_width as u32 * self.block_height as u32
    }
}

const fn desc(
    format: PixelFormat,
    name: &'static str,
    bytes_per_block: u8,
    block_width: u8,
    block_height: u8,
    kind: FormatKind,
) -> FormatDescriptor {
    FormatDescriptor {
        format,
        name,
        bytes_per_block,
        block_width,
        block_height,
        kind,
    }
}

// Rows must stay in the exact order the `PixelFormat` variants are declared.
// ETC2 RGB8A1 uses punch-through alpha and shares the 8-byte block of ETC2 RGB8.
#[rustfmt::skip]
const DESCRIPTORS: [FormatDescriptor; PixelFormat::COUNT as usize] = {
    use FormatKind::*;
    use PixelFormat::*;
    [
        desc(Undefined,             "Undefined",              0,  0,  0, Uint),

        // 8-bit
        desc(R8Unorm,               "R8Unorm",                1,  1,  1, Unorm),
        desc(R8Snorm,               "R8Snorm",                1,  1,  1, Snorm),
        desc(R8Uint,                "R8Uint",                 1,  1,  1, Uint),
        desc(R8Sint,                "R8Sint",                 1,  1,  1, Sint),

        // 16-bit
        desc(R16Unorm,              "R16Unorm",               2,  1,  1, Unorm),
        desc(R16Snorm,              "R16Snorm",               2,  1,  1, Snorm),
        desc(R16Uint,               "R16Uint",                2,  1,  1, Uint),
        desc(R16Sint,               "R16Sint",                2,  1,  1, Sint),
        desc(R16Float,              "R16Float",               2,  1,  1, Float),
        desc(Rg8Unorm,              "RG8Unorm",               2,  1,  1, Unorm),
        desc(Rg8Snorm,              "RG8Snorm",               2,  1,  1, Snorm),
        desc(Rg8Uint,               "RG8Uint",                2,  1,  1, Uint),
        desc(Rg8Sint,               "RG8Sint",                2,  1,  1, Sint),

        // Packed 16-bit
        desc(Bgra4Unorm,            "BGRA4Unorm",             2,  1,  1, Unorm),
        desc(B5g6r5Unorm,           "B5G6R5Unorm",            2,  1,  1, Unorm),
        desc(Bgr5a1Unorm,           "BGR5A1Unorm",            2,  1,  1, Unorm),

        // 32-bit
        desc(R32Uint,               "R32Uint",                4,  1,  1, Uint),
        desc(R32Sint,               "R32Sint",                4,  1,  1, Sint),
        desc(R32Float,              "R32Float",               4,  1,  1, Float),
        desc(Rg16Unorm,             "RG16Unorm",              4,  1,  1, Unorm),
        desc(Rg16Snorm,             "RG16Snorm",              4,  1,  1, Snorm),
        desc(Rg16Uint,              "RG16Uint",               4,  1,  1, Uint),
        desc(Rg16Sint,              "RG16Sint",               4,  1,  1, Sint),
        desc(Rg16Float,             "RG16Float",              4,  1,  1, Float),
        desc(Rgba8Unorm,            "RGBA8Unorm",             4,  1,  1, Unorm),
        desc(Rgba8UnormSrgb,        "RGBA8UnormSrgb",         4,  1,  1, UnormSrgb),
        desc(Rgba8Snorm,            "RGBA8Snorm",             4,  1,  1, Snorm),
        desc(Rgba8Uint,             "RGBA8Uint",              4,  1,  1, Uint),
        desc(Rgba8Sint,             "RGBA8Sint",              4,  1,  1, Sint),
        desc(Bgra8Unorm,            "BGRA8Unorm",             4,  1,  1, Unorm),
        desc(Bgra8UnormSrgb,        "BGRA8UnormSrgb",         4,  1,  1, UnormSrgb),

        // Packed 32-bit
        desc(Rgb10a2Unorm,          "RGB10A2Unorm",           4,  1,  1, Unorm),
        desc(Rgb10a2Uint,           "RGB10A2Uint",            4,  1,  1, Uint),
        desc(Rg11b10Ufloat,         "RG11B10UFloat",          4,  1,  1, Float),
        desc(Rgb9e5Ufloat,          "RGB9E5UFloat",           4,  1,  1, Float),

        // 64-bit
        desc(Rg32Uint,              "RG32Uint",               8,  1,  1, Uint),
        desc(Rg32Sint,              "RG32Sint",               8,  1,  1, Sint),
        desc(Rg32Float,             "RG32Float",              8,  1,  1, Float),
        desc(Rgba16Unorm,           "RGBA16Unorm",            8,  1,  1, Unorm),
        desc(Rgba16Snorm,           "RGBA16Snorm",            8,  1,  1, Snorm),
        desc(Rgba16Uint,            "RGBA16Uint",             8,  1,  1, Uint),
        desc(Rgba16Sint,            "RGBA16Sint",             8,  1,  1, Sint),
        desc(Rgba16Float,           "RGBA16Float",            8,  1,  1, Float),

        // 128-bit
        desc(Rgba32Uint,            "RGBA32Uint",            16,  1,  1, Uint),
        desc(Rgba32Sint,            "RGBA32Sint",            16,  1,  1, Sint),
        desc(Rgba32Float,           "RGBA32Float",           16,  1,  1, Float),

        // Depth-stencil
        desc(Depth16Unorm,          "Depth16Unorm",           2,  1,  1, Unorm),
        desc(Depth24UnormStencil8,  "Depth24UnormStencil8",   4,  1,  1, Unorm),
        desc(Depth32Float,          "Depth32Float",           4,  1,  1, Float),
        desc(Depth32FloatStencil8,  "Depth32FloatStencil8",   8,  1,  1, Float),

        // BC compressed
        desc(Bc1RgbaUnorm,          "BC1RGBAUnorm",           8,  4,  4, Unorm),
        desc(Bc1RgbaUnormSrgb,      "BC1RGBAUnormSrgb",       8,  4,  4, UnormSrgb),
        desc(Bc2RgbaUnorm,          "BC2RGBAUnorm",          16,  4,  4, Unorm),
        desc(Bc2RgbaUnormSrgb,      "BC2RGBAUnormSrgb",      16,  4,  4, UnormSrgb),
        desc(Bc3RgbaUnorm,          "BC3RGBAUnorm",          16,  4,  4, Unorm),
        desc(Bc3RgbaUnormSrgb,      "BC3RGBAUnormSrgb",      16,  4,  4, UnormSrgb),
        desc(Bc4RUnorm,             "BC4RUnorm",              8,  4,  4, Unorm),
        desc(Bc4RSnorm,             "BC4RSnorm",              8,  4,  4, Snorm),
        desc(Bc5RgUnorm,            "BC5RGUnorm",            16,  4,  4, Unorm),
        desc(Bc5RgSnorm,            "BC5RGSnorm",            16,  4,  4, Snorm),
        desc(Bc6hRgbUfloat,         "BC6HRGBUfloat",         16,  4,  4, Float),
        desc(Bc6hRgbFloat,          "BC6HRGBFloat",          16,  4,  4, Float),
        desc(Bc7RgbaUnorm,          "BC7RGBAUnorm",          16,  4,  4, Unorm),
        desc(Bc7RgbaUnormSrgb,      "BC7RGBAUnormSrgb",      16,  4,  4, UnormSrgb),

        // ETC2/EAC compressed
        desc(Etc2Rgb8Unorm,         "ETC2RGB8Unorm",          8,  4,  4, Unorm),
        desc(Etc2Rgb8UnormSrgb,     "ETC2RGB8UnormSrgb",      8,  4,  4, UnormSrgb),
        desc(Etc2Rgb8A1Unorm,       "ETC2RGB8A1Unorm",        8,  4,  4, Unorm),
        desc(Etc2Rgb8A1UnormSrgb,   "ETC2RGB8A1UnormSrgb",    8,  4,  4, UnormSrgb),
        desc(Etc2Rgba8Unorm,        "ETC2RGBA8Unorm",        16,  4,  4, Unorm),
        desc(Etc2Rgba8UnormSrgb,    "ETC2RGBA8UnormSrgb",    16,  4,  4, UnormSrgb),
        desc(EacR11Unorm,           "EACR11Unorm",            8,  4,  4, Unorm),
        desc(EacR11Snorm,           "EACR11Snorm",            8,  4,  4, Snorm),
        desc(EacRg11Unorm,          "EACRG11Unorm",          16,  4,  4, Unorm),
        desc(EacRg11Snorm,          "EACRG11Snorm",          16,  4,  4, Snorm),

        // ASTC compressed
        desc(Astc4x4Unorm,          "ASTC4x4Unorm",          16,  4,  4, Unorm),
        desc(Astc4x4UnormSrgb,      "ASTC4x4UnormSrgb",      16,  4,  4, UnormSrgb),
        desc(Astc5x4Unorm,          "ASTC5x4Unorm",          16,  5,  4, Unorm),
        desc(Astc5x4UnormSrgb,      "ASTC5x4UnormSrgb",      16,  5,  4, UnormSrgb),
        desc(Astc5x5Unorm,          "ASTC5x5Unorm",          16,  5,  5, Unorm),
        desc(Astc5x5UnormSrgb,      "ASTC5x5UnormSrgb",      16,  5,  5, UnormSrgb),
        desc(Astc6x5Unorm,          "ASTC6x5Unorm",          16,  6,  5, Unorm),
        desc(Astc6x5UnormSrgb,      "ASTC6x5UnormSrgb",      16,  6,  5, UnormSrgb),
        desc(Astc6x6Unorm,          "ASTC6x6Unorm",          16,  6,  6, Unorm),
        desc(Astc6x6UnormSrgb,      "ASTC6x6UnormSrgb",      16,  6,  6, UnormSrgb),
        desc(Astc8x5Unorm,          "ASTC8x5Unorm",          16,  8,  5, Unorm),
        desc(Astc8x5UnormSrgb,      "ASTC8x5UnormSrgb",      16,  8,  5, UnormSrgb),
        desc(Astc8x6Unorm,          "ASTC8x6Unorm",          16,  8,  6, Unorm),
        desc(Astc8x6UnormSrgb,      "ASTC8x6UnormSrgb",      16,  8,  6, UnormSrgb),
        desc(Astc8x8Unorm,          "ASTC8x8Unorm",          16,  8,  8, Unorm),
        desc(Astc8x8UnormSrgb,      "ASTC8x8UnormSrgb",      16,  8,  8, UnormSrgb),
        desc(Astc10x5Unorm,         "ASTC10x5Unorm",         16, 10,  5, Unorm),
        desc(Astc10x5UnormSrgb,     "ASTC10x5UnormSrgb",     16, 10,  5, UnormSrgb),
        desc(Astc10x6Unorm,         "ASTC10x6Unorm",         16, 10,  6, Unorm),
        desc(Astc10x6UnormSrgb,     "ASTC10x6UnormSrgb",     16, 10,  6, UnormSrgb),
        desc(Astc10x8Unorm,         "ASTC10x8Unorm",         16, 10,  8, Unorm),
        desc(Astc10x8UnormSrgb,     "ASTC10x8UnormSrgb",     16, 10,  8, UnormSrgb),
        desc(Astc10x10Unorm,        "ASTC10x10Unorm",        16, 10, 10, Unorm),
        desc(Astc10x10UnormSrgb,    "ASTC10x10UnormSrgb",    16, 10, 10, UnormSrgb),
        desc(Astc12x10Unorm,        "ASTC12x10Unorm",        16, 12, 10, Unorm),
        desc(Astc12x10UnormSrgb,    "ASTC12x10UnormSrgb",    16, 12, 10, UnormSrgb),
        desc(Astc12x12Unorm,        "ASTC12x12Unorm",        16, 12, 12, Unorm),
        desc(Astc12x12UnormSrgb,    "ASTC12x12UnormSrgb",    16, 12, 12, UnormSrgb),
    ]
};

const _: () = {
    let mut i = 0;
    while i < DESCRIPTORS.len() {
        assert!(
            DESCRIPTORS[i].format as usize == i,
            "format descriptor table is out of order"
        );
        i += 1;
    }
};

static FORMAT_TABLE: [FormatDescriptor; PixelFormat::COUNT as usize] = DESCRIPTORS;

impl PixelFormat {
    /// Descriptor for this format. Returns a copy of the table entry.
    #[inline]
    pub fn descriptor(self) -> FormatDescriptor {
        FORMAT_TABLE[self as usize]
    }

    #[inline]
    pub fn bytes_per_block(self) -> u32 {
        FORMAT_TABLE[self as usize].bytes_per_block as u32
    }

    /// Block size in pixels as `(width, height)`.
    #[inline]
    pub fn block_dimensions(self) -> (u32, u32) {
        let desc = &FORMAT_TABLE[self as usize];
        (desc.block_width as u32, desc.block_height as u32)
    }

    #[inline]
    pub fn kind(self) -> FormatKind {
        FORMAT_TABLE[self as usize].kind
    }
}

/// The whole table in ordinal order.
pub fn descriptors() -> &'static [FormatDescriptor] {
    &FORMAT_TABLE
}

/// Look up the descriptor for a raw ordinal.
///
/// Fails with [`FormatError::OutOfRange`] for `ordinal >= PixelFormat::COUNT`.
pub fn lookup(ordinal: u32) -> FormatResult<FormatDescriptor> {
    match FORMAT_TABLE.get(ordinal as usize) {
        Some(desc) => Ok(*desc),
        None => {
            tracing::debug!(ordinal, "pixel format lookup out of range");
            Err(FormatError::OutOfRange { ordinal })
        }
    }
}

/// Bytes per block for a raw ordinal; 0 when the ordinal is out of range.
///
/// No real format has a zero footprint except `Undefined`, so 0 reads as
/// "unknown".
pub fn bytes_per_block(ordinal: u32) -> u32 {
    FORMAT_TABLE
        .get(ordinal as usize)
        .map_or(0, |desc| desc.bytes_per_block as u32)
}
