//! Prints the format registry as a table.
//!
//! Run with an optional family filter:
//!
//! ```text
//! cargo run -p texel --example format_table -- astc
//! ```

use texel::core::logging;
use texel::prelude::*;

fn main() {
    logging::init();

    let filter = std::env::args().nth(1).map(|arg| arg.to_ascii_lowercase());
    let matches = |family: FormatFamily| match filter.as_deref() {
        None => true,
        Some(name) => format!("{:?}", family).eq_ignore_ascii_case(name),
    };

    println!(
        "{:>3}  {:<22} {:>5} {:>7}  {:<9} {:<12} {}",
        "#", "name", "bytes", "block", "kind", "family", "sRGB pair"
    );

    let mut shown = 0;
    for format in PixelFormat::ALL.into_iter().filter(|f| matches(f.family())) {
        let desc = format.descriptor();
        let pair = format
            .srgb_pair()
            .map(|p| p.name().to_string())
            .unwrap_or_default();

        println!(
            "{:>3}  {:<22} {:>5} {:>7}  {:<9} {:<12} {}",
            format.ordinal(),
            desc.name,
            desc.bytes_per_block,
            format!("{}x{}", desc.block_width, desc.block_height),
            desc.kind.to_string(),
            format!("{:?}", format.family()),
            pair,
        );
        shown += 1;
    }

    tracing::info!(shown, total = PixelFormat::COUNT, "Listed pixel formats");
}
