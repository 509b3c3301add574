//! Collection types used across Texel.
//!
//! Hash maps and sets backed by AHash.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
