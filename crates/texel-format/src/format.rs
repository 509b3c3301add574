//! The closed set of pixel formats and their numeric kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Numeric interpretation of a format's stored bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FormatKind {
    /// Unsigned normalized.
    Unorm = 0,
    /// Unsigned normalized, sRGB-encoded.
    UnormSrgb = 1,
    /// Signed normalized.
    Snorm = 2,
    /// Unsigned integer.
    Uint = 3,
    /// Signed integer.
    Sint = 4,
    /// Floating point.
    Float = 5,
}

impl FormatKind {
    /// Number of kinds; also the first ordinal that is not a kind.
    pub const COUNT: u32 = 6;

    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Uint | Self::Sint)
    }

    pub const fn is_normalized(self) -> bool {
        matches!(self, Self::Unorm | Self::UnormSrgb | Self::Snorm)
    }
}

/// Image storage format.
///
/// Ordinals are contiguous from `Undefined = 0` and stable: they cross the C
/// boundary as plain `u32` values. Ordinals `>= PixelFormat::COUNT` are not
/// formats; use [`PixelFormat::from_ordinal`] to validate untrusted values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    #[default]
    Undefined = 0,
    // 8-bit
    R8Unorm,
    R8Snorm,
    R8Uint,
    R8Sint,
    // 16-bit
    R16Unorm,
    R16Snorm,
    R16Uint,
    R16Sint,
    R16Float,
    Rg8Unorm,
    Rg8Snorm,
    Rg8Uint,
    Rg8Sint,
    // Packed 16-bit
    Bgra4Unorm,
    B5g6r5Unorm,
    Bgr5a1Unorm,
    // 32-bit
    R32Uint,
    R32Sint,
    R32Float,
    Rg16Unorm,
    Rg16Snorm,
    Rg16Uint,
    Rg16Sint,
    Rg16Float,
    Rgba8Unorm,
    Rgba8UnormSrgb,
    Rgba8Snorm,
    Rgba8Uint,
    Rgba8Sint,
    Bgra8Unorm,
    Bgra8UnormSrgb,
    // Packed 32-bit
    Rgb10a2Unorm,
    Rgb10a2Uint,
    Rg11b10Ufloat,
    Rgb9e5Ufloat,
    // 64-bit
    Rg32Uint,
    Rg32Sint,
    Rg32Float,
    Rgba16Unorm,
    Rgba16Snorm,
    Rgba16Uint,
    Rgba16Sint,
    Rgba16Float,
    // 128-bit
    Rgba32Uint,
    Rgba32Sint,
    Rgba32Float,
    // Depth-stencil
    Depth16Unorm,
    Depth24UnormStencil8,
    Depth32Float,
    Depth32FloatStencil8,
    // BC
    Bc1RgbaUnorm,
    Bc1RgbaUnormSrgb,
    Bc2RgbaUnorm,
    Bc2RgbaUnormSrgb,
    Bc3RgbaUnorm,
    Bc3RgbaUnormSrgb,
    Bc4RUnorm,
    Bc4RSnorm,
    Bc5RgUnorm,
    Bc5RgSnorm,
    Bc6hRgbUfloat,
    Bc6hRgbFloat,
    Bc7RgbaUnorm,
    Bc7RgbaUnormSrgb,
    // ETC2/EAC
    Etc2Rgb8Unorm,
    Etc2Rgb8UnormSrgb,
    Etc2Rgb8A1Unorm,
    Etc2Rgb8A1UnormSrgb,
    Etc2Rgba8Unorm,
    Etc2Rgba8UnormSrgb,
    EacR11Unorm,
    EacR11Snorm,
    EacRg11Unorm,
    EacRg11Snorm,
    // ASTC
    Astc4x4Unorm,
    Astc4x4UnormSrgb,
    Astc5x4Unorm,
    Astc5x4UnormSrgb,
    Astc5x5Unorm,
    Astc5x5UnormSrgb,
    Astc6x5Unorm,
    Astc6x5UnormSrgb,
    Astc6x6Unorm,
    Astc6x6UnormSrgb,
    Astc8x5Unorm,
    Astc8x5UnormSrgb,
    Astc8x6Unorm,
    Astc8x6UnormSrgb,
    Astc8x8Unorm,
    Astc8x8UnormSrgb,
    Astc10x5Unorm,
    Astc10x5UnormSrgb,
    Astc10x6Unorm,
    Astc10x6UnormSrgb,
    Astc10x8Unorm,
    Astc10x8UnormSrgb,
    Astc10x10Unorm,
    Astc10x10UnormSrgb,
    Astc12x10Unorm,
    Astc12x10UnormSrgb,
    Astc12x12Unorm,
    Astc12x12UnormSrgb,
}

impl PixelFormat {
    /// Number of formats, `Undefined` included. This is the sentinel ordinal.
    pub const COUNT: u32 = PixelFormat::Astc12x12UnormSrgb as u32 + 1;

    /// Every format in ordinal order.
    #[rustfmt::skip]
    pub const ALL: [PixelFormat; PixelFormat::COUNT as usize] = {
        use PixelFormat::*;
        [
            Undefined,
            R8Unorm, R8Snorm, R8Uint, R8Sint,
            R16Unorm, R16Snorm, R16Uint, R16Sint, R16Float,
            Rg8Unorm, Rg8Snorm, Rg8Uint, Rg8Sint,
            Bgra4Unorm, B5g6r5Unorm, Bgr5a1Unorm,
            R32Uint, R32Sint, R32Float,
            Rg16Unorm, Rg16Snorm, Rg16Uint, Rg16Sint, Rg16Float,
            Rgba8Unorm, Rgba8UnormSrgb, Rgba8Snorm, Rgba8Uint, Rgba8Sint,
            Bgra8Unorm, Bgra8UnormSrgb,
            Rgb10a2Unorm, Rgb10a2Uint, Rg11b10Ufloat, Rgb9e5Ufloat,
            Rg32Uint, Rg32Sint, Rg32Float,
            Rgba16Unorm, Rgba16Snorm, Rgba16Uint, Rgba16Sint, Rgba16Float,
            Rgba32Uint, Rgba32Sint, Rgba32Float,
            Depth16Unorm, Depth24UnormStencil8, Depth32Float, Depth32FloatStencil8,
            Bc1RgbaUnorm, Bc1RgbaUnormSrgb, Bc2RgbaUnorm, Bc2RgbaUnormSrgb,
            Bc3RgbaUnorm, Bc3RgbaUnormSrgb, Bc4RUnorm, Bc4RSnorm,
            Bc5RgUnorm, Bc5RgSnorm, Bc6hRgbUfloat, Bc6hRgbFloat,
            Bc7RgbaUnorm, Bc7RgbaUnormSrgb,
            Etc2Rgb8Unorm, Etc2Rgb8UnormSrgb, Etc2Rgb8A1Unorm, Etc2Rgb8A1UnormSrgb,
            Etc2Rgba8Unorm, Etc2Rgba8UnormSrgb,
            EacR11Unorm, EacR11Snorm, EacRg11Unorm, EacRg11Snorm,
            Astc4x4Unorm, Astc4x4UnormSrgb, Astc5x4Unorm, Astc5x4UnormSrgb,
            Astc5x5Unorm, Astc5x5UnormSrgb, Astc6x5Unorm, Astc6x5UnormSrgb,
            Astc6x6Unorm, Astc6x6UnormSrgb, Astc8x5Unorm, Astc8x5UnormSrgb,
            Astc8x6Unorm, Astc8x6UnormSrgb, Astc8x8Unorm, Astc8x8UnormSrgb,
            Astc10x5Unorm, Astc10x5UnormSrgb, Astc10x6Unorm, Astc10x6UnormSrgb,
            Astc10x8Unorm, Astc10x8UnormSrgb, Astc10x10Unorm, Astc10x10UnormSrgb,
            Astc12x10Unorm, Astc12x10UnormSrgb, Astc12x12Unorm, Astc12x12UnormSrgb,
        ]
    };

    /// Validate a raw ordinal. Returns `None` for `ordinal >= COUNT`.
    #[inline]
    pub const fn from_ordinal(ordinal: u32) -> Option<Self> {
        if ordinal < Self::COUNT {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Canonical name, e.g. `"RGBA8UnormSrgb"`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

const _: () = assert!(FormatKind::Float as u32 + 1 == FormatKind::COUNT);

// Every ALL slot must hold the variant with its own ordinal.
const _: () = {
    let mut i = 0;
    while i < PixelFormat::ALL.len() {
        assert!(PixelFormat::ALL[i] as usize == i, "PixelFormat::ALL is out of order");
        i += 1;
    }
};

impl TryFrom<u32> for PixelFormat {
    type Error = FormatError;

    fn try_from(ordinal: u32) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(FormatError::OutOfRange { ordinal })
    }
}

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> Self {
        format.ordinal()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = FormatError;

    /// Parse a canonical name, ignoring ASCII case (`"rgba8unorm"` works).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormatError::UnknownName {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unorm => "Unorm",
            Self::UnormSrgb => "UnormSrgb",
            Self::Snorm => "Snorm",
            Self::Uint => "Uint",
            Self::Sint => "Sint",
            Self::Float => "Float",
        })
    }
}
