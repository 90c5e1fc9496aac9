//! Basic usage of `Bitset`

use blockset::{Bitset, Bitset64};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut bitset = Bitset64::new();
    info!(blocks = bitset.block_count(), "created empty bitset");

    for n in [5, 10, 15, 100] {
        bitset.set(n);
    }
    info!(
        ones = bitset.count_ones(),
        blocks = bitset.block_count(),
        "set bits 5, 10, 15, 100"
    );

    for n in [0, 5, 10, 20, 100, 5000] {
        info!(bit = n, set = bitset.has(n), "query");
    }
    // Reading far past the end never allocates
    info!(blocks = bitset.block_count(), "after queries");

    let positions: Vec<u32> = bitset.iter().collect();
    info!(?positions, "set positions");

    bitset.toggle(5);
    bitset.toggle(25);
    info!(positions = ?bitset.iter().collect::<Vec<_>>(), "toggled 5 and 25");

    bitset.set(300);
    bitset.clear(300);
    info!(blocks = bitset.block_count(), "set then cleared bit 300");
    bitset.shrink();
    info!(blocks = bitset.block_count(), "after shrink");

    info!(first = ?bitset.first(), last = ?bitset.last(), "bounds");

    // Smaller blocks trade per-block overhead for finer growth
    let narrow: Bitset<u8> = bitset.iter().collect();
    info!(
        blocks = narrow.block_count(),
        bits = Bitset::<u8>::block_bits(),
        text = %narrow,
        "same set in 8-bit blocks"
    );
}
