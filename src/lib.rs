//! A growable bitset over 8, 16, 32 or 64-bit blocks.
//!
//! This crate provides [`Bitset`], a compact representation of a sparse set of
//! `u32` positions as a sequence of fixed-width unsigned blocks. The block
//! width is a type parameter; [`Bitset8`], [`Bitset16`], [`Bitset32`] and
//! [`Bitset64`] name the four supported widths, and a bare `Bitset` uses
//! 64-bit blocks.
//!
//! # Features
//!
//! - **Grow on write, never on read**: `set`, `toggle` and `or` extend the
//!   storage as needed; `has`, `count_diff` and iteration treat missing blocks
//!   as zero
//! - **Set algebra across lengths**: union, intersection and Hamming distance
//!   between bitsets with different block counts
//! - **Lazy enumeration** of set positions with early termination
//! - **Lossless text encoding**: `"0|5|100"`, one decimal number per block
//! - **Serialization support** via serde and rkyv (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use blockset::Bitset;
//!
//! let mut bitset = Bitset::<u32>::new();
//! bitset.set(10);
//! bitset.set(42);
//! bitset.set(1000);
//!
//! assert!(bitset.has(42));
//! assert!(!bitset.has(43));
//!
//! // Iterate over set positions
//! assert_eq!(bitset.iter().collect::<Vec<_>>(), [10, 42, 1000]);
//!
//! // Set operations
//! let mut other = Bitset::<u32>::new();
//! other.set(10);
//! other.set(50);
//! assert_eq!(bitset.count_diff(&other), 3);
//!
//! bitset.or(&other);
//! assert!(bitset.has(50));
//!
//! // Text encoding
//! let text = bitset.to_string();
//! let parsed: Bitset<u32> = text.parse()?;
//! assert_eq!(parsed, bitset);
//! # Ok::<(), blockset::ParseBitsetError>(())
//! ```
//!
//! # Text Encoding
//!
//! [`Display`](core::fmt::Display) writes every block in decimal, lowest
//! block first, separated by `|`; [`Bitset::parse`] and
//! [`FromStr`](core::str::FromStr) read it back. The empty bitset is the empty
//! string. Trailing zero blocks are written out, so the encoding round-trips
//! the exact storage, not just the set.
//!
//! # Concurrency
//!
//! A `Bitset` is a plain owned value with no interior mutability. Sharing one
//! mutably between threads needs external locking.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitset;
pub mod block;
mod codec;
mod iter;
mod set_ops;
mod traits;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "rkyv")]
pub use crate::rkyv::{ArchivedBitset, ArchivedBitsetExt, BitsetResolver};

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use bitset::{Bitset, Bitset8, Bitset16, Bitset32, Bitset64};
pub use block::Block;
pub use codec::{ParseBitsetError, SEPARATOR};
pub use iter::{BitIter, IntoIter, Iter};
