//! Text encoding of `Bitset`

use blockset::{Bitset8, Bitset64, ParseBitsetError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ParseBitsetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut bitset = Bitset64::new();
    bitset.set(1);
    bitset.set(64);
    bitset.set(200);
    let text = bitset.to_string();
    info!(%text, "encoded");

    let decoded: Bitset64 = text.parse()?;
    info!(equal = decoded == bitset, "decoded");

    // Trailing zero blocks survive the round trip
    bitset.clear(200);
    let text = bitset.to_string();
    let decoded = Bitset64::parse(&text)?;
    info!(%text, blocks = decoded.block_count(), "with trailing zero block");

    for input in ["1|2|30", "1|2|300", "1||2", "7|x", "18446744073709551616"] {
        match Bitset8::parse(input) {
            Ok(b) => info!(input, blocks = ?b.as_slice(), "parsed"),
            Err(e) => warn!(input, block = e.index(), error = %e, "rejected"),
        }
    }

    Ok(())
}
