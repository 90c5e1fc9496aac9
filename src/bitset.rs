//! `Bitset` struct and core implementation.

use alloc::vec::Vec;
use core::ops::ControlFlow;

use crate::{
    block::{Block, bitpos, position, rtrim0},
    iter::{BitIter, Iter},
};

/// A growable set of `u32` positions stored as a sequence of `W`-bit blocks.
///
/// # Overview
///
/// Bit position `n` lives in block `n / W::BITS` at offset `n % W::BITS`.
/// Writes (`set`, `toggle`, `or`) extend the storage with zero blocks when
/// they address a block past the end; reads (`has`, `count_diff`, iteration)
/// treat missing blocks as all zero and never allocate.
///
/// # Capacity Model
///
/// The number of blocks is not part of the represented set: a bitset with
/// trailing zero blocks answers every query exactly like its
/// [`shrink`](Self::shrink)ed form. The block count is only observable
/// through [`block_count`](Self::block_count), [`as_slice`](Self::as_slice),
/// structural equality and the text codec, which preserves it.
///
/// # Examples
///
/// ```
/// use blockset::Bitset64;
/// let mut bitset = Bitset64::new();
///
/// bitset.set(10);
/// bitset.set(100);
///
/// assert!(bitset.has(10));
/// assert!(bitset.has(100));
/// assert!(!bitset.has(50));
/// assert_eq!(bitset.block_count(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitset<W = u64> {
    pub(crate) blocks: Vec<W>,
}

/// A bitset with 8-bit blocks.
pub type Bitset8 = Bitset<u8>;
/// A bitset with 16-bit blocks.
pub type Bitset16 = Bitset<u16>;
/// A bitset with 32-bit blocks.
pub type Bitset32 = Bitset<u32>;
/// A bitset with 64-bit blocks.
pub type Bitset64 = Bitset<u64>;

impl<W: Block> Bitset<W> {
    /// Creates a new empty bitset with no blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let bitset = Bitset::<u32>::new();
    /// assert!(bitset.is_empty());
    /// assert_eq!(bitset.block_count(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Creates an empty bitset whose storage can hold `bits` positions
    /// without reallocating.
    ///
    /// The block count stays zero; only the allocation is reserved.
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(bits.div_ceil(W::BITS as usize)),
        }
    }

    /// Creates a bitset from raw blocks, keeping trailing zero blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let bitset = Bitset::<u8>::from_blocks([0b101, 0]);
    /// assert!(bitset.has(0));
    /// assert!(bitset.has(2));
    /// assert_eq!(bitset.block_count(), 2);
    /// ```
    #[must_use]
    pub fn from_blocks(blocks: impl Into<Vec<W>>) -> Self {
        Self {
            blocks: blocks.into(),
        }
    }

    /// Number of bits per block.
    #[must_use]
    #[inline(always)]
    pub const fn block_bits() -> u32 {
        W::BITS
    }

    /// Returns the number of blocks in storage, trailing zero blocks
    /// included.
    #[must_use]
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get the storage as a slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[W] {
        &self.blocks
    }

    /// Returns the storage without its trailing zero blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut bitset = Bitset::<u64>::new();
    /// bitset.set(0);
    /// bitset.set(200);
    /// bitset.clear(200);
    ///
    /// assert_eq!(bitset.as_slice().len(), 4);
    /// assert_eq!(bitset.as_slice_rtrim(), &[1]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_slice_rtrim(&self) -> &[W] {
        rtrim0(&self.blocks)
    }

    /// Extends the storage with zero blocks so that block `index` exists.
    #[inline]
    fn grow(&mut self, index: usize) {
        if index >= self.blocks.len() {
            self.blocks.resize(index + 1, W::ZERO);
        }
    }

    /// Extends the storage with zero blocks to at least `len` blocks.
    #[inline]
    pub(crate) fn grow_to(&mut self, len: usize) {
        if let Some(last) = len.checked_sub(1) {
            self.grow(last);
        }
    }

    /// Sets the bit at position `n`, growing the storage if needed.
    ///
    /// Setting an already set bit has no effect.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut bitset = Bitset::<u64>::new();
    /// bitset.set(64);
    /// assert_eq!(bitset.as_slice(), &[0, 1]);
    ///
    /// bitset.set(64);
    /// assert_eq!(bitset.as_slice(), &[0, 1]);
    /// ```
    #[inline]
    pub fn set(&mut self, n: u32) {
        let (idx, bp) = bitpos::<W>(n);
        self.grow(idx);
        self.blocks[idx] |= W::bit(bp);
    }

    /// Clears the bit at position `n`.
    ///
    /// Positions past the end of the storage are already clear, so nothing
    /// happens and the storage is not grown. Other bits in the same block are
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut bitset = Bitset::<u64>::new();
    /// bitset.clear(0);
    /// assert_eq!(bitset.block_count(), 0);
    ///
    /// bitset.set(0);
    /// bitset.set(100);
    /// bitset.clear(100);
    /// assert_eq!(bitset.as_slice(), &[1, 0]);
    /// ```
    #[inline]
    pub fn clear(&mut self, n: u32) {
        let (idx, bp) = bitpos::<W>(n);
        if let Some(block) = self.blocks.get_mut(idx) {
            *block &= !W::bit(bp);
        }
    }

    /// Inverts the bit at position `n`, growing the storage if needed.
    ///
    /// Toggling a position past the end of the storage sets it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut bitset = Bitset::<u8>::new();
    /// bitset.toggle(0);
    /// assert_eq!(bitset.as_slice(), &[1]);
    ///
    /// bitset.toggle(0);
    /// assert_eq!(bitset.as_slice(), &[0]);
    /// ```
    #[inline]
    pub fn toggle(&mut self, n: u32) {
        let (idx, bp) = bitpos::<W>(n);
        self.grow(idx);
        self.blocks[idx] ^= W::bit(bp);
    }

    /// Returns `true` if the bit at position `n` is set.
    ///
    /// Returns `false` if the position is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut bitset = Bitset::<u16>::new();
    /// bitset.set(42);
    ///
    /// assert!(bitset.has(42));
    /// assert!(!bitset.has(43));
    /// assert!(!bitset.has(1000)); // Out of bounds returns false
    /// ```
    #[must_use]
    #[inline]
    pub fn has(&self, n: u32) -> bool {
        let (idx, bp) = bitpos::<W>(n);
        self.blocks
            .get(idx)
            .is_some_and(|&block| block & W::bit(bp) != W::ZERO)
    }

    /// Returns `true` if no bits are set.
    ///
    /// A bitset with only zero blocks is empty.
    ///
    /// Time complexity: O(n) where n is the number of blocks.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&w| w == W::ZERO)
    }

    /// Counts the number of set bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut bitset = Bitset::<u32>::new();
    /// bitset.set(5);
    /// bitset.set(10);
    /// bitset.set(500);
    /// assert_eq!(bitset.count_ones(), 3);
    /// ```
    #[must_use]
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the lowest set position, or [`None`] if the bitset is empty.
    #[must_use]
    pub fn first(&self) -> Option<u32> {
        let (wi, &word) = self
            .blocks
            .iter()
            .enumerate()
            .find(|&(_, &w)| w != W::ZERO)?;
        position::<W>(wi, word.trailing_zeros())
    }

    /// Returns the highest set position, or [`None`] if the bitset is empty.
    ///
    /// Also returns [`None`] when the highest set bit lies beyond
    /// `u32::MAX`, which only raw or parsed blocks can produce.
    #[must_use]
    pub fn last(&self) -> Option<u32> {
        let (wi, &word) = self
            .blocks
            .iter()
            .enumerate()
            .rfind(|&(_, &w)| w != W::ZERO)?;
        position::<W>(wi, W::BITS - 1 - word.leading_zeros())
    }

    /// Removes trailing zero blocks.
    ///
    /// The represented set does not change. A bitset with no set bits ends
    /// up with zero blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut bitset = Bitset::<u64>::new();
    /// bitset.set(1);
    /// bitset.set(300);
    /// bitset.clear(300);
    ///
    /// bitset.shrink();
    /// assert_eq!(bitset.as_slice(), &[2]);
    /// ```
    pub fn shrink(&mut self) {
        let n = self.as_slice_rtrim().len();
        if n != self.blocks.len() {
            self.blocks.truncate(n);
            self.blocks.shrink_to_fit();
        }
    }

    /// Returns an iterator over the set positions in ascending order.
    ///
    /// The iterator scans one block at a time and stops as soon as it is
    /// dropped, so `take_while` and friends never touch later blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut bitset = Bitset::<u8>::new();
    /// bitset.set(20);
    /// bitset.set(3);
    ///
    /// let mut iter = bitset.iter();
    /// assert_eq!(iter.next(), Some(3));
    /// assert_eq!(iter.next(), Some(20));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, W> {
        BitIter::new(self.as_slice())
    }

    /// Calls `f` with every set position in ascending order.
    ///
    /// Returning [`ControlFlow::Break`] from `f` stops the walk immediately;
    /// no further positions are visited and no further blocks are read. The
    /// break value is handed back to the caller. Every call starts over from
    /// position 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// # use blockset::Bitset;
    ///
    /// let bitset: Bitset = [0, 1, 2, 1000, 10000].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// let stopped = bitset.for_each_set_bit(|n| {
    ///     seen.push(n);
    ///     if n == 1000 { ControlFlow::Break(n) } else { ControlFlow::Continue(()) }
    /// });
    ///
    /// assert_eq!(seen, [0, 1, 2, 1000]);
    /// assert_eq!(stopped, ControlFlow::Break(1000));
    /// ```
    pub fn for_each_set_bit<B, F>(&self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(u32) -> ControlFlow<B>,
    {
        for (wi, &word) in self.blocks.iter().enumerate() {
            let mut rem = word;
            while rem != W::ZERO {
                let Some(pos) = position::<W>(wi, rem.trailing_zeros()) else {
                    return ControlFlow::Continue(());
                };
                f(pos)?;
                rem = rem.clear_lowest();
            }
        }
        ControlFlow::Continue(())
    }

    /// Compares two block sequences for equivalency, ignoring trailing zero
    /// blocks.
    ///
    /// `==` on [`Bitset`] is structural and also compares the block count;
    /// this method compares only the represented sets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let a = Bitset::<u64>::from_blocks([1, 2, 0, 0]);
    /// assert!(a.eq_rtrim(&[1, 2]));
    /// assert!(!a.eq_rtrim(&[1, 2, 3]));
    /// assert_ne!(a, Bitset::from_blocks([1, 2]));
    /// ```
    #[must_use]
    pub fn eq_rtrim(&self, other: impl AsRef<[W]>) -> bool {
        self.as_slice_rtrim() == rtrim0(other.as_ref())
    }
}

impl<W: Block> Default for Bitset<W> {
    fn default() -> Self {
        Self::new()
    }
}
