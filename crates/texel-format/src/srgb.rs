//! sRGB and linear variants of the same storage layout.

use crate::format::PixelFormat;

impl PixelFormat {
    /// The other half of this format's sRGB pairing, if it has one.
    ///
    /// Exhaustive by construction: a new variant must be listed here before
    /// the crate compiles.
    pub const fn srgb_pair(self) -> Option<PixelFormat> {
        use PixelFormat::*;
        match self {
            Rgba8Unorm => Some(Rgba8UnormSrgb),
            Rgba8UnormSrgb => Some(Rgba8Unorm),
            Bgra8Unorm => Some(Bgra8UnormSrgb),
            Bgra8UnormSrgb => Some(Bgra8Unorm),
            Bc1RgbaUnorm => Some(Bc1RgbaUnormSrgb),
            Bc1RgbaUnormSrgb => Some(Bc1RgbaUnorm),
            Bc2RgbaUnorm => Some(Bc2RgbaUnormSrgb),
            Bc2RgbaUnormSrgb => Some(Bc2RgbaUnorm),
            Bc3RgbaUnorm => Some(Bc3RgbaUnormSrgb),
            Bc3RgbaUnormSrgb => Some(Bc3RgbaUnorm),
            Bc7RgbaUnorm => Some(Bc7RgbaUnormSrgb),
            Bc7RgbaUnormSrgb => Some(Bc7RgbaUnorm),
            Etc2Rgb8Unorm => Some(Etc2Rgb8UnormSrgb),
            Etc2Rgb8UnormSrgb => Some(Etc2Rgb8Unorm),
            Etc2Rgb8A1Unorm => Some(Etc2Rgb8A1UnormSrgb),
            Etc2Rgb8A1UnormSrgb => Some(Etc2Rgb8A1Unorm),
            Etc2Rgba8Unorm => Some(Etc2Rgba8UnormSrgb),
            Etc2Rgba8UnormSrgb => Some(Etc2Rgba8Unorm),
            Astc4x4Unorm => Some(Astc4x4UnormSrgb),
            Astc4x4UnormSrgb => Some(Astc4x4Unorm),
            Astc5x4Unorm => Some(Astc5x4UnormSrgb),
            Astc5x4UnormSrgb => Some(Astc5x4Unorm),
            Astc5x5Unorm => Some(Astc5x5UnormSrgb),
            Astc5x5UnormSrgb => Some(Astc5x5Unorm),
            Astc6x5Unorm => Some(Astc6x5UnormSrgb),
            Astc6x5UnormSrgb => Some(Astc6x5Unorm),
            Astc6x6Unorm => Some(Astc6x6UnormSrgb),
            Astc6x6UnormSrgb => Some(Astc6x6Unorm),
            Astc8x5Unorm => Some(Astc8x5UnormSrgb),
            Astc8x5UnormSrgb => Some(Astc8x5Unorm),
            Astc8x6Unorm => Some(Astc8x6UnormSrgb),
            Astc8x6UnormSrgb => Some(Astc8x6Unorm),
            Astc8x8Unorm => Some(Astc8x8UnormSrgb),
            Astc8x8UnormSrgb => Some(Astc8x8Unorm),
            Astc10x5Unorm => Some(Astc10x5UnormSrgb),
            Astc10x5UnormSrgb => Some(Astc10x5Unorm),
            Astc10x6Unorm => Some(Astc10x6UnormSrgb),
            Astc10x6UnormSrgb => Some(Astc10x6Unorm),
            Astc10x8Unorm => Some(Astc10x8UnormSrgb),
            Astc10x8UnormSrgb => Some(Astc10x8Unorm),
            Astc10x10Unorm => Some(Astc10x10UnormSrgb),
            Astc10x10UnormSrgb => Some(Astc10x10Unorm),
            Astc12x10Unorm => Some(Astc12x10UnormSrgb),
            Astc12x10UnormSrgb => Some(Astc12x10Unorm),
            Astc12x12Unorm => Some(Astc12x12UnormSrgb),
            Astc12x12UnormSrgb => Some(Astc12x12Unorm),

            Undefined | R8Unorm | R8Snorm | R8Uint | R8Sint | R16Unorm | R16Snorm | R16Uint
            | R16Sint | R16Float | Rg8Unorm | Rg8Snorm | Rg8Uint | Rg8Sint | Bgra4Unorm
            | B5g6r5Unorm | Bgr5a1Unorm | R32Uint | R32Sint | R32Float | Rg16Unorm | Rg16Snorm
            | Rg16Uint | Rg16Sint | Rg16Float | Rgba8Snorm | Rgba8Uint | Rgba8Sint | Rgb10a2Unorm
            | Rgb10a2Uint | Rg11b10Ufloat | Rgb9e5Ufloat | Rg32Uint | Rg32Sint | Rg32Float
            | Rgba16Unorm | Rgba16Snorm | Rgba16Uint | Rgba16Sint | Rgba16Float | Rgba32Uint
            | Rgba32Sint | Rgba32Float | Depth16Unorm | Depth24UnormStencil8 | Depth32Float
            | Depth32FloatStencil8 | Bc4RUnorm | Bc4RSnorm | Bc5RgUnorm | Bc5RgSnorm
            | Bc6hRgbUfloat | Bc6hRgbFloat | EacR11Unorm | EacR11Snorm | EacRg11Unorm
            | EacRg11Snorm => None,
        }
    }

    /// The linear counterpart of an sRGB format; any other format is returned unchanged.
    pub fn srgb_to_linear(self) -> PixelFormat {
        match self.srgb_pair() {
            Some(linear) if self.is_srgb() => linear,
            _ => self,
        }
    }

    /// The sRGB counterpart of a linear format; formats without one are returned unchanged.
    pub fn linear_to_srgb(self) -> PixelFormat {
        match self.srgb_pair() {
            Some(srgb) if !self.is_srgb() => srgb,
            _ => self,
        }
    }

    /// Whether this format participates in an sRGB pairing.
    pub const fn has_srgb_pair(self) -> bool {
        self.srgb_pair().is_some()
    }
}
