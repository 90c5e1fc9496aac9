//! Trait implementations for `Bitset`.

use alloc::vec::Vec;
use core::{
    borrow::Borrow,
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::{Bitset, block::Block};

impl<W: Block> From<Vec<W>> for Bitset<W> {
    fn from(blocks: Vec<W>) -> Self {
        Self { blocks }
    }
}

impl<W: Block> From<&[W]> for Bitset<W> {
    fn from(slice: &[W]) -> Self {
        Self {
            blocks: slice.to_vec(),
        }
    }
}

impl<W: Block, const N: usize> From<[W; N]> for Bitset<W> {
    fn from(array: [W; N]) -> Self {
        Self {
            blocks: array.to_vec(),
        }
    }
}

impl<W: Block> From<Bitset<W>> for Vec<W> {
    fn from(bitset: Bitset<W>) -> Self {
        bitset.blocks
    }
}

impl<W: Block> Borrow<[W]> for Bitset<W> {
    fn borrow(&self) -> &[W] {
        self.as_slice()
    }
}

impl<W: Block> AsRef<[W]> for Bitset<W> {
    fn as_ref(&self) -> &[W] {
        self.as_slice()
    }
}

impl<W: Block> fmt::Debug for Bitset<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bitset").field(&self.blocks).finish()
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

impl<W: Block> BitOr for Bitset<W> {
    type Output = Self;

    /// Performs the union of two bitsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockset::Bitset;
    /// let a: Bitset<u8> = [1, 3].into_iter().collect();
    /// let b: Bitset<u8> = [3, 40].into_iter().collect();
    ///
    /// let c = a | b;
    /// assert_eq!(c.iter().collect::<Vec<_>>(), [1, 3, 40]);
    /// ```
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self.or(&rhs);
        self
    }
}

impl<W: Block> BitOr for &Bitset<W> {
    type Output = Bitset<W>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<W: Block> BitOrAssign for Bitset<W> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.or(&rhs);
    }
}

impl<W: Block> BitOrAssign<&Self> for Bitset<W> {
    fn bitor_assign(&mut self, rhs: &Self) {
        self.or(rhs);
    }
}

impl<W: Block> BitAnd for Bitset<W> {
    type Output = Self;

    /// Performs the intersection of two bitsets.
    ///
    /// Like [`Bitset::intersection`], positions of the left operand past the
    /// end of the right operand are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockset::Bitset;
    /// let a: Bitset<u8> = [1, 3, 40].into_iter().collect();
    /// let b: Bitset<u8> = [3].into_iter().collect();
    ///
    /// let c = a & b;
    /// assert_eq!(c.iter().collect::<Vec<_>>(), [3]);
    /// ```
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<W: Block> BitAnd for &Bitset<W> {
    type Output = Bitset<W>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<W: Block> BitAndAssign for Bitset<W> {
    /// Same as [`Bitset::and`]: blocks past the end of `rhs` are kept.
    fn bitand_assign(&mut self, rhs: Self) {
        self.and(&rhs);
    }
}

impl<W: Block> BitAndAssign<&Self> for Bitset<W> {
    fn bitand_assign(&mut self, rhs: &Self) {
        self.and(rhs);
    }
}
