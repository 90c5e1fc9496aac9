//! Iterator implementations for `Bitset`.

use core::{
    borrow::Borrow,
    iter::{FromIterator, FusedIterator},
};

use crate::{
    Bitset,
    block::{Block, last_block, position},
};

/// An iterator over the set positions of a [`Bitset`].
///
/// This struct is created by the [`iter`](Bitset::iter) method on
/// [`Bitset`]. It yields the positions of all set bits in ascending order.
pub type Iter<'a, W> = BitIter<&'a [W], W>;

/// An owning iterator over the set positions of a [`Bitset`].
///
/// This struct is created by the [`IntoIterator`] implementation for
/// [`Bitset`]. It consumes the bitset and yields the positions of all set
/// bits in ascending order.
pub type IntoIter<W> = BitIter<Bitset<W>, W>;

/// An iterator over the set positions of a block sequence.
///
/// Blocks are loaded one at a time, lowest index first; within a block the
/// lowest set bit is taken with a trailing-zero count and then cleared. A
/// block is only read once every position of the previous block has been
/// yielded, so stopping early never scans the rest of the storage.
///
/// The generic parameter `S` allows this iterator to work with both borrowed
/// and owned storage.
///
/// # Examples
///
/// ```
/// use blockset::Bitset;
/// let bitset: Bitset<u16> = [5, 10, 15, 100].into_iter().collect();
///
/// let below_50: Vec<_> = bitset.iter().take_while(|&n| n < 50).collect();
/// assert_eq!(below_50, vec![5, 10, 15]);
/// ```
#[derive(Clone)]
pub struct BitIter<S, W> {
    blocks: S,
    /// Index of the block loaded into `word`.
    index: usize,
    /// Unvisited bits of the current block.
    word: W,
    done: bool,
}

impl<S: Borrow<[W]>, W: Block> BitIter<S, W> {
    pub(crate) fn new(blocks: S) -> Self {
        let word = blocks.borrow().first().copied().unwrap_or(W::ZERO);
        Self {
            blocks,
            index: 0,
            word,
            done: false,
        }
    }
}

impl<S: Borrow<[W]>, W: Block> Iterator for BitIter<S, W> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while self.word == W::ZERO {
            self.index += 1;
            match self.blocks.borrow().get(self.index) {
                Some(&word) => self.word = word,
                None => {
                    self.done = true;
                    return None;
                }
            }
        }

        let offset = self.word.trailing_zeros();
        self.word = self.word.clear_lowest();
        let pos = position::<W>(self.index, offset);
        if pos.is_none() {
            // Raw or parsed storage can extend past the `u32` position space.
            self.done = true;
        }
        pos
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<S: Borrow<[W]>, W: Block> ExactSizeIterator for BitIter<S, W> {
    /// Counts the positions still to be yielded.
    ///
    /// Blocks past the last `u32`-addressable block are never yielded and
    /// are not counted.
    fn len(&self) -> usize {
        let last = last_block::<W>();
        if self.done || self.index > last {
            return 0;
        }

        let rest = self.blocks.borrow().get(self.index + 1..).unwrap_or(&[]);
        self.word.count_ones() as usize + count_leading_blocks(rest, last - self.index)
    }
}

/// Set bits in the first `n` blocks of `blocks`.
fn count_leading_blocks<W: Block>(blocks: &[W], n: usize) -> usize {
    blocks.iter().take(n).map(|w| w.count_ones() as usize).sum()
}

impl<S: Borrow<[W]>, W: Block> FusedIterator for BitIter<S, W> {}

impl<'a, W: Block> IntoIterator for &'a Bitset<W> {
    type IntoIter = Iter<'a, W>;
    type Item = u32;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: Block> IntoIterator for Bitset<W> {
    type IntoIter = IntoIter<W>;
    type Item = u32;

    fn into_iter(self) -> Self::IntoIter {
        BitIter::new(self)
    }
}

impl<W: Block> FromIterator<u32> for Bitset<W> {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut bitset = Self::new();
        bitset.extend(iter);
        bitset
    }
}

impl<W: Block> Extend<u32> for Bitset<W> {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for n in iter {
            self.set(n);
        }
    }
}

impl<'a, W: Block> Extend<&'a u32> for Bitset<W> {
    fn extend<I: IntoIterator<Item = &'a u32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
