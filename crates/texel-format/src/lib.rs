//! Texel Format
//!
//! Registry of pixel storage formats. Each [`PixelFormat`] has one immutable
//! [`FormatDescriptor`] giving its block footprint and numeric [`FormatKind`];
//! on top of that sit classification predicates (depth, stencil, compression
//! family, integer, sRGB) and the sRGB/linear pairing.
//!
//! Everything here is a pure function over `static` data and is safe to call
//! from any thread.
//!
//! # Example
//!
//! ```
//! use texel_format::{FormatKind, PixelFormat};
//!
//! let desc = PixelFormat::Rgba8Unorm.descriptor();
//! assert_eq!(desc.bytes_per_block, 4);
//! assert_eq!((desc.block_width, desc.block_height), (1, 1));
//! assert_eq!(desc.kind, FormatKind::Unorm);
//!
//! assert_eq!(PixelFormat::Rgba8Unorm.linear_to_srgb(), PixelFormat::Rgba8UnormSrgb);
//! assert!(PixelFormat::Bc7RgbaUnorm.is_bc_compressed());
//! assert!(!PixelFormat::Bc7RgbaUnorm.is_astc_compressed());
//! ```
//!
//! Untrusted `u32` values go through [`raw`] or [`lookup`]:
//!
//! ```
//! use texel_format::{raw, FormatError, PixelFormat};
//!
//! assert_eq!(
//!     texel_format::lookup(PixelFormat::COUNT),
//!     Err(FormatError::OutOfRange { ordinal: PixelFormat::COUNT })
//! );
//! assert_eq!(raw::bytes_per_block(PixelFormat::COUNT), 0);
//! assert!(!raw::is_depth(PixelFormat::COUNT));
//! ```

mod classify;
mod error;
mod format;
pub mod raw;
mod srgb;
mod surface;
mod table;

pub use classify::{FormatFamily, FormatFlags};
pub use error::{FormatError, FormatResult};
pub use format::{FormatKind, PixelFormat};
pub use surface::{SurfaceInfo, max_mip_levels, mip_extent};
pub use table::{FormatDescriptor, bytes_per_block, descriptors, lookup};

static_assertions::assert_impl_all!(PixelFormat: Send, Sync, Copy);
static_assertions::assert_impl_all!(FormatDescriptor: Send, Sync, Copy);
static_assertions::const_assert_eq!(PixelFormat::COUNT as usize, PixelFormat::ALL.len());
static_assertions::assert_eq_size!(PixelFormat, u32);
