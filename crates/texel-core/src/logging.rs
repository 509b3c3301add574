//! Logging setup based on `tracing-subscriber`.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the application (or a test) through [`init`].

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,texel_format=info,texel_image=debug,texel_ffi=info";

/// Install a global fmt subscriber using `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a global fmt subscriber with the given fallback directives.
///
/// `RUST_LOG` still takes precedence when it is set. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init_with_filter(directives: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        // The first call may or may not win depending on test ordering,
        // but a second call must never succeed.
        let _ = init_with_filter("debug");
        assert!(!init_with_filter("trace"));
    }
}
