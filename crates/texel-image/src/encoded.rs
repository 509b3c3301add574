//! Encoded container detection.

use std::fmt;

/// Container formats an encoded image may arrive in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodedFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Hdr,
    Qoi,
    OpenExr,
}

impl EncodedFormat {
    pub const ALL: [EncodedFormat; 7] = [
        EncodedFormat::Png,
        EncodedFormat::Jpeg,
        EncodedFormat::Bmp,
        EncodedFormat::Gif,
        EncodedFormat::Hdr,
        EncodedFormat::Qoi,
        EncodedFormat::OpenExr,
    ];

    /// Detect the container from its magic bytes. Returns `None` if unrecognized.
    pub fn detect(data: &[u8]) -> Option<Self> {
        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(EncodedFormat::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(EncodedFormat::Jpeg);
        }

        // GIF: "GIF87a" or "GIF89a"
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some(EncodedFormat::Gif);
        }

        // QOI: "qoif"
        if data.starts_with(b"qoif") {
            return Some(EncodedFormat::Qoi);
        }

        // OpenEXR: 76 2F 31 01
        if data.starts_with(&[0x76, 0x2F, 0x31, 0x01]) {
            return Some(EncodedFormat::OpenExr);
        }

        // Radiance: "#?RADIANCE" or "#?RGBE"
        if data.starts_with(b"#?RADIANCE") || data.starts_with(b"#?RGBE") {
            return Some(EncodedFormat::Hdr);
        }

        // BMP: "BM" followed by a 14-byte file header
        if data.len() >= 14 && data.starts_with(b"BM") {
            return Some(EncodedFormat::Bmp);
        }

        None
    }

    /// Detect the container from a file extension (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| {
            format
                .extensions()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(ext))
        })
    }

    /// Common file extensions.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            EncodedFormat::Png => &["png"],
            EncodedFormat::Jpeg => &["jpg", "jpeg", "jpe", "jfif"],
            EncodedFormat::Bmp => &["bmp", "dib"],
            EncodedFormat::Gif => &["gif"],
            EncodedFormat::Hdr => &["hdr", "rgbe", "pic"],
            EncodedFormat::Qoi => &["qoi"],
            EncodedFormat::OpenExr => &["exr"],
        }
    }
}

impl fmt::Display for EncodedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EncodedFormat::Png => "PNG",
            EncodedFormat::Jpeg => "JPEG",
            EncodedFormat::Bmp => "BMP",
            EncodedFormat::Gif => "GIF",
            EncodedFormat::Hdr => "Radiance HDR",
            EncodedFormat::Qoi => "QOI",
            EncodedFormat::OpenExr => "OpenEXR",
        })
    }
}
