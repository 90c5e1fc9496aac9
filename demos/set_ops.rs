//! Set algebra on `Bitset`

use blockset::Bitset32;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn show(bitset: &Bitset32) -> Vec<u32> {
    bitset.iter().collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let evens: Bitset32 = (0..40).step_by(2).collect();
    let threes: Bitset32 = (0..80).step_by(3).collect();
    info!(evens = ?show(&evens), blocks = evens.block_count(), "a");
    info!(threes = ?show(&threes), blocks = threes.block_count(), "b");

    let mut union = evens.clone();
    union.or(&threes);
    info!(positions = ?show(&union), blocks = union.block_count(), "a or b");

    // `and` only masks the blocks both sides have
    let mut masked = threes.clone();
    masked.and(&evens);
    info!(positions = ?show(&masked), "b and a, tail kept");

    let inter = &threes & &evens;
    info!(positions = ?show(&inter), "b & a");

    info!(distance = evens.count_diff(&threes), "hamming distance");
    info!(
        subset = inter.is_subset(&evens),
        disjoint = evens.is_disjoint(&threes),
        "relations"
    );

    // Stop at the first multiple of 7 above 20
    let found = union.for_each_set_bit(|n| {
        if n > 20 && n % 7 == 0 {
            std::ops::ControlFlow::Break(n)
        } else {
            std::ops::ControlFlow::Continue(())
        }
    });
    info!(?found, "early exit");
}
