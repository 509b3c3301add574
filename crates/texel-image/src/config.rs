//! Decode configuration.

use texel_format::PixelFormat;

/// Default maximum width or height accepted by a decode.
pub const DEFAULT_MAX_EXTENT: u32 = 16_384;

/// Default maximum pixel count accepted by a decode (16384 × 16384).
pub const DEFAULT_MAX_PIXELS: u64 = DEFAULT_MAX_EXTENT as u64 * DEFAULT_MAX_EXTENT as u64;

/// How 8-bit color data from a decoder should be labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Samples are sRGB encoded; 8-bit output uses an `*UnormSrgb` format.
    #[default]
    Srgb,
    /// Samples are linear; 8-bit output uses a plain `*Unorm` format.
    Linear,
}

impl ColorSpace {
    /// Pick the sRGB or linear member of a format pair.
    pub fn apply(self, format: PixelFormat) -> PixelFormat {
        match self {
            ColorSpace::Srgb => format.linear_to_srgb(),
            ColorSpace::Linear => format.srgb_to_linear(),
        }
    }
}

/// Upper bounds on the images a decode may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLimits {
    pub max_width: u32,
    pub max_height: u32,
    pub max_pixels: u64,
}

impl ImageLimits {
    /// No limits beyond what fits in memory.
    pub const UNLIMITED: Self = Self {
        max_width: u32::MAX,
        max_height: u32::MAX,
        max_pixels: u64::MAX,
    };

    /// Name of the first limit `width × height` violates, if any.
    pub fn check(&self, width: u32, height: u32) -> Option<&'static str> {
        if width > self.max_width {
            Some("max_width")
        } else if height > self.max_height {
            Some("max_height")
        } else if width as u64 * height as u64 > self.max_pixels {
            Some("max_pixels")
        } else {
            None
        }
    }
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_EXTENT,
            max_height: DEFAULT_MAX_EXTENT,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

/// Options passed to every [`ImageDecoder`](crate::ImageDecoder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    pub color_space: ColorSpace,
    pub limits: ImageLimits,
}

impl DecodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    pub fn with_limits(mut self, limits: ImageLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Shorthand for limiting only the width and height.
    pub fn with_max_extent(mut self, max_width: u32, max_height: u32) -> Self {
        self.limits.max_width = max_width;
        self.limits.max_height = max_height;
        self
    }
}
