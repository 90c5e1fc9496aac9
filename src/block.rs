//! Block word types and the addressing arithmetic shared by every width.

use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
};

mod private {
    pub trait Sealed {}
}

/// An unsigned primitive integer used as one storage block of a
/// [`Bitset`](crate::Bitset).
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The trait is sealed; the
/// set of widths is closed.
pub trait Block:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Not<Output = Self>
    + private::Sealed
{
    /// Number of bits in one block, e.g. 64 for `u64`.
    const BITS: u32;

    /// A block with no bits set.
    const ZERO: Self;

    /// Returns a block with only the bit at `offset` set.
    ///
    /// `offset` must be below [`BITS`](Self::BITS).
    fn bit(offset: u32) -> Self;

    /// Number of set bits in the block.
    fn count_ones(self) -> u32;

    /// Number of zero bits below the lowest set bit.
    fn trailing_zeros(self) -> u32;

    /// Number of zero bits above the highest set bit.
    fn leading_zeros(self) -> u32;

    /// Clears the lowest set bit, `x & (x - 1)`.
    fn clear_lowest(self) -> Self;

    /// Parses a decimal digit string into a block.
    ///
    /// Returns `None` when the value does not fit in [`BITS`](Self::BITS).
    /// The caller is responsible for rejecting non-digit input first.
    fn from_decimal(digits: &str) -> Option<Self>;
}

macro_rules! impl_block {
    ($($ty:ty),* $(,)?) => {$(
        impl private::Sealed for $ty {}

        impl Block for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;

            #[inline(always)]
            fn bit(offset: u32) -> Self {
                debug_assert!(offset < Self::BITS);
                1 << offset
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$ty>::count_ones(self)
            }

            #[inline(always)]
            fn trailing_zeros(self) -> u32 {
                <$ty>::trailing_zeros(self)
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$ty>::leading_zeros(self)
            }

            #[inline(always)]
            fn clear_lowest(self) -> Self {
                self & self.wrapping_sub(1)
            }

            #[inline]
            fn from_decimal(digits: &str) -> Option<Self> {
                digits.parse::<$ty>().ok()
            }
        }
    )*};
}

impl_block!(u8, u16, u32, u64);

/// Convert a bit position to (block index, bit offset within the block).
#[inline(always)]
pub(crate) const fn bitpos<W: Block>(n: u32) -> (usize, u32) {
    ((n / W::BITS) as usize, n % W::BITS)
}

/// Absolute bit position of `offset` inside block `index`.
///
/// Returns `None` when the position is not representable as a `u32`.
#[inline(always)]
pub(crate) fn position<W: Block>(index: usize, offset: u32) -> Option<u32> {
    let pos = (index as u64)
        .checked_mul(u64::from(W::BITS))?
        .checked_add(u64::from(offset))?;
    u32::try_from(pos).ok()
}

/// Index of the last block whose positions all fit in a `u32`.
///
/// Every width divides 2^32, so this block ends exactly at `u32::MAX`.
#[inline(always)]
pub(crate) const fn last_block<W: Block>() -> usize {
    (u32::MAX / W::BITS) as usize
}

/// Removes trailing zero blocks from a slice.
#[inline(always)]
pub(crate) fn rtrim0<W: Block>(slice: &[W]) -> &[W] {
    let n = slice.iter().rposition(|&w| w != W::ZERO).map_or(0, |i| i + 1);
    &slice[..n]
}
