//! Logging, profiling and collections as seen from a downstream crate.

use texel_core::alloc::{HashMap, HashSet};
use texel_core::{logging, profiling};

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_logging_init_twice() {
    logging::init();
    assert!(!logging::init_with_filter("texel_core=trace"));
    tracing::debug!("subscriber installed");
}

// ============================================================================
// Profiling
// ============================================================================

fn sum_squares(n: u64) -> u64 {
    profiling::profile_function!();
    (0..n)
        .map(|i| {
            profiling::profile_scope!("square");
            i * i
        })
        .sum()
}

#[test]
fn test_profile_macros_from_downstream() {
    assert_eq!(sum_squares(4), 14);
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn test_collections_are_std_compatible() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    *map.entry("png").or_default() += 1;
    *map.entry("png").or_default() += 1;
    assert_eq!(map["png"], 2);

    let set: HashSet<u32> = [1, 2, 2, 3].into_iter().collect();
    assert_eq!(set.len(), 3);
}
