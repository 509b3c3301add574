//! Image dimensionality.

use std::fmt;

/// Shape of an image's texel grid.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageDimension {
    D1 = 0,
    #[default]
    D2 = 1,
    D3 = 2,
    Cube = 3,
}

impl ImageDimension {
    pub const fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::D1),
            1 => Some(Self::D2),
            2 => Some(Self::D3),
            3 => Some(Self::Cube),
            _ => None,
        }
    }

    #[inline]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ImageDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::D1 => "1D",
            Self::D2 => "2D",
            Self::D3 => "3D",
            Self::Cube => "Cube",
        };
        f.write_str(name)
    }
}
