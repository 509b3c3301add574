//! Texel Core
//!
//! Shared plumbing for the Texel crates: logging setup, optional profiling
//! and the hash collections used across the workspace.

pub mod alloc;
pub mod logging;
pub mod profiling;
