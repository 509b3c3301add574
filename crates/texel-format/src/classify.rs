//! Classification predicates.
//!
//! Depth, stencil and compression-family membership cannot be read off the
//! descriptor's numeric fields, so it lives in [`PixelFormat::family`], a
//! single `match` with no wildcard arm. Adding a format without placing it in
//! a family is a compile error.

use bitflags::bitflags;

use crate::format::{FormatKind, PixelFormat};

/// Storage family of a format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    Undefined,
    /// Uncompressed color (including packed) formats.
    Uncompressed,
    /// Depth without a stencil channel.
    Depth,
    /// Depth with a stencil channel.
    DepthStencil,
    /// BC1 through BC7.
    Bc,
    /// ETC2 and EAC.
    Etc2,
    /// ASTC, every block size.
    Astc,
}

impl FormatFamily {
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::Bc | Self::Etc2 | Self::Astc)
    }
}

bitflags! {
    /// Every classification of a format at once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u32 {
        const DEPTH = 1 << 0;
        const STENCIL = 1 << 1;
        const COMPRESSED = 1 << 2;
        const BC = 1 << 3;
        const ETC2 = 1 << 4;
        const ASTC = 1 << 5;
        const INTEGER = 1 << 6;
        const SRGB = 1 << 7;
        const FLOAT = 1 << 8;
    }
}

impl PixelFormat {
    pub const fn family(self) -> FormatFamily {
        use PixelFormat::*;
        match self {
            Undefined => FormatFamily::Undefined,

            R8Unorm | R8Snorm | R8Uint | R8Sint | R16Unorm | R16Snorm | R16Uint | R16Sint
            | R16Float | Rg8Unorm | Rg8Snorm | Rg8Uint | Rg8Sint | Bgra4Unorm | B5g6r5Unorm
            | Bgr5a1Unorm | R32Uint | R32Sint | R32Float | Rg16Unorm | Rg16Snorm | Rg16Uint
            | Rg16Sint | Rg16Float | Rgba8Unorm | Rgba8UnormSrgb | Rgba8Snorm | Rgba8Uint
            | Rgba8Sint | Bgra8Unorm | Bgra8UnormSrgb | Rgb10a2Unorm | Rgb10a2Uint
            | Rg11b10Ufloat | Rgb9e5Ufloat | Rg32Uint | Rg32Sint | Rg32Float | Rgba16Unorm
            | Rgba16Snorm | Rgba16Uint | Rgba16Sint | Rgba16Float | Rgba32Uint | Rgba32Sint
            | Rgba32Float => FormatFamily::Uncompressed,

            Depth16Unorm | Depth32Float => FormatFamily::Depth,
            Depth24UnormStencil8 | Depth32FloatStencil8 => FormatFamily::DepthStencil,

            Bc1RgbaUnorm | Bc1RgbaUnormSrgb | Bc2RgbaUnorm | Bc2RgbaUnormSrgb | Bc3RgbaUnorm
            | Bc3RgbaUnormSrgb | Bc4RUnorm | Bc4RSnorm | Bc5RgUnorm | Bc5RgSnorm
            | Bc6hRgbUfloat | Bc6hRgbFloat | Bc7RgbaUnorm | Bc7RgbaUnormSrgb => FormatFamily::Bc,

            Etc2Rgb8Unorm | Etc2Rgb8UnormSrgb | Etc2Rgb8A1Unorm | Etc2Rgb8A1UnormSrgb
            | Etc2Rgba8Unorm | Etc2Rgba8UnormSrgb | EacR11Unorm | EacR11Snorm | EacRg11Unorm
            | EacRg11Snorm => FormatFamily::Etc2,

            Astc4x4Unorm | Astc4x4UnormSrgb | Astc5x4Unorm | Astc5x4UnormSrgb | Astc5x5Unorm
            | Astc5x5UnormSrgb | Astc6x5Unorm | Astc6x5UnormSrgb | Astc6x6Unorm
            | Astc6x6UnormSrgb | Astc8x5Unorm | Astc8x5UnormSrgb | Astc8x6Unorm
            | Astc8x6UnormSrgb | Astc8x8Unorm | Astc8x8UnormSrgb | Astc10x5Unorm
            | Astc10x5UnormSrgb | Astc10x6Unorm | Astc10x6UnormSrgb | Astc10x8Unorm
            | Astc10x8UnormSrgb | Astc10x10Unorm | Astc10x10UnormSrgb | Astc12x10Unorm
            | Astc12x10UnormSrgb | Astc12x12Unorm | Astc12x12UnormSrgb => FormatFamily::Astc,
        }
    }

    /// Has a depth channel.
    #[inline]
    pub const fn is_depth(self) -> bool {
        matches!(self.family(), FormatFamily::Depth | FormatFamily::DepthStencil)
    }

    /// Has a stencil channel.
    #[inline]
    pub const fn is_stencil(self) -> bool {
        matches!(self.family(), FormatFamily::DepthStencil)
    }

    /// Has a depth or a stencil channel. Every stencil format here also
    /// carries depth, so this is the same set as [`is_depth`](Self::is_depth).
    #[inline]
    pub const fn is_depth_stencil(self) -> bool {
        self.is_depth()
    }

    /// Depth without stencil.
    #[inline]
    pub const fn is_depth_only(self) -> bool {
        matches!(self.family(), FormatFamily::Depth)
    }

    /// Block size larger than one pixel, read from the descriptor table.
    #[inline]
    pub fn is_compressed(self) -> bool {
        self.descriptor().is_block_compressed()
    }

    #[inline]
    pub const fn is_bc_compressed(self) -> bool {
        matches!(self.family(), FormatFamily::Bc)
    }

    #[inline]
    pub const fn is_etc2_compressed(self) -> bool {
        matches!(self.family(), FormatFamily::Etc2)
    }

    #[inline]
    pub const fn is_astc_compressed(self) -> bool {
        matches!(self.family(), FormatFamily::Astc)
    }

    /// Unsigned or signed integer kind. `Undefined` is never an integer format.
    #[inline]
    pub fn is_integer(self) -> bool {
        !matches!(self, PixelFormat::Undefined) && self.kind().is_integer()
    }

    #[inline]
    pub fn is_srgb(self) -> bool {
        self.kind() == FormatKind::UnormSrgb
    }

    #[inline]
    pub fn is_float(self) -> bool {
        self.kind() == FormatKind::Float
    }

    pub fn flags(self) -> FormatFlags {
        let mut flags = FormatFlags::empty();
        flags.set(FormatFlags::DEPTH, self.is_depth());
        flags.set(FormatFlags::STENCIL, self.is_stencil());
        flags.set(FormatFlags::COMPRESSED, self.is_compressed());
        flags.set(FormatFlags::BC, self.is_bc_compressed());
        flags.set(FormatFlags::ETC2, self.is_etc2_compressed());
        flags.set(FormatFlags::ASTC, self.is_astc_compressed());
        flags.set(FormatFlags::INTEGER, self.is_integer());
        flags.set(FormatFlags::SRGB, self.is_srgb());
        flags.set(FormatFlags::FLOAT, self.is_float());
        flags
    }
}
