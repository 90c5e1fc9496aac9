//! Implementations of set operations for `Bitset`.

use crate::{Bitset, block::Block};

impl<W: Block> Bitset<W> {
    /// Performs an in-place union with another bitset.
    ///
    /// Each bit in `self` becomes `self[i] | other[i]`. If `other` has more
    /// blocks, `self` is first grown to the same block count, even when the
    /// extra blocks of `other` are all zero. An `other` with no blocks leaves
    /// `self` untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut a = Bitset::<u64>::new();
    /// let mut b = Bitset::<u64>::new();
    ///
    /// a.set(10);
    /// b.set(200);
    ///
    /// a.or(&b);
    /// assert!(a.has(10));
    /// assert!(a.has(200));
    /// assert_eq!(a.block_count(), 4);
    /// ```
    pub fn or(&mut self, other: impl AsRef<[W]>) {
        let src = other.as_ref();
        if src.is_empty() {
            return;
        }

        self.grow_to(src.len());
        for (dst, &word) in self.blocks.iter_mut().zip(src) {
            if word == W::ZERO {
                continue;
            }
            *dst |= word;
        }
    }

    /// Performs an in-place intersection with another bitset.
    ///
    /// Only the blocks both bitsets have are combined, `self[i] & other[i]`.
    /// Blocks of `self` past the end of `other` are left as they are; call
    /// [`intersection`](Self::intersection) for a fully masked result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let mut a = Bitset::<u8>::new();
    /// let mut b = Bitset::<u8>::new();
    ///
    /// a.set(1);
    /// a.set(2);
    /// a.set(20); // block 2, beyond `b`
    /// b.set(2);
    ///
    /// a.and(&b);
    /// assert!(!a.has(1));
    /// assert!(a.has(2));
    /// assert!(a.has(20));
    /// ```
    pub fn and(&mut self, other: impl AsRef<[W]>) {
        for (dst, &word) in self.blocks.iter_mut().zip(other.as_ref()) {
            *dst &= word;
        }
    }

    /// Counts the positions at which `self` and `other` differ.
    ///
    /// Missing blocks on either side count as zero, so the result equals the
    /// size of the symmetric difference of the two sets.
    ///
    /// Time complexity: O(n) where n is the max number of blocks in either
    /// set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let a: Bitset = [1, 2, 64].into_iter().collect();
    /// let b: Bitset = [31, 64, 650].into_iter().collect();
    /// assert_eq!(a.count_diff(&b), 4);
    /// assert_eq!(b.count_diff(&a), 4);
    /// ```
    #[must_use]
    pub fn count_diff(&self, other: impl AsRef<[W]>) -> usize {
        let (a, b) = (self.as_slice(), other.as_ref());
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let (head, tail) = long.split_at(short.len());

        let common: usize = head
            .iter()
            .zip(short)
            .map(|(&x, &y)| (x ^ y).count_ones() as usize)
            .sum();
        let rest: usize = tail.iter().map(|w| w.count_ones() as usize).sum();
        common + rest
    }

    /// Creates a new set that is the union of this set and another set.
    ///
    /// Time complexity: O(n) where n is the max number of blocks in either
    /// set.
    #[must_use]
    pub fn union(&self, other: impl AsRef<[W]>) -> Self {
        let mut result = self.clone();
        result.or(other);
        result
    }

    /// Creates a new set that is the intersection of this set and another
    /// set.
    ///
    /// Unlike [`and`](Self::and), positions of `self` past the end of
    /// `other` are dropped, and the result has no trailing zero blocks.
    ///
    /// Time complexity: O(n) where n is the min number of blocks in either
    /// set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use blockset::Bitset;
    /// let a: Bitset<u8> = [1, 2, 20].into_iter().collect();
    /// let b: Bitset<u8> = [2].into_iter().collect();
    ///
    /// let both = a.intersection(&b);
    /// assert_eq!(both.iter().collect::<Vec<_>>(), [2]);
    /// assert_eq!(both.block_count(), 1);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: impl AsRef<[W]>) -> Self {
        let other = other.as_ref();
        let len = self.blocks.len().min(other.len());
        let mut result = Self::from_blocks(&self.blocks[..len]);
        result.and(other);
        result.shrink();
        result
    }

    /// Checks if this set is a subset of another set.
    ///
    /// Time complexity: O(n) where n is the number of blocks in self.
    #[must_use]
    pub fn is_subset(&self, other: impl AsRef<[W]>) -> bool {
        let other = other.as_ref();
        self.blocks.iter().enumerate().all(|(i, &word)| {
            let theirs = other.get(i).copied().unwrap_or(W::ZERO);
            word & !theirs == W::ZERO
        })
    }

    /// Checks if this set is disjoint from another set.
    ///
    /// Time complexity: O(n) where n is the min number of blocks in either
    /// set.
    #[must_use]
    pub fn is_disjoint(&self, other: impl AsRef<[W]>) -> bool {
        self.blocks
            .iter()
            .zip(other.as_ref())
            .all(|(&a, &b)| a & b == W::ZERO)
    }
}
