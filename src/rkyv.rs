//! Rkyv implementation for `Bitset`.
//!
//! The archived form is the block sequence, trailing zero blocks included.
//! [`ArchivedBitsetExt`] answers membership queries directly on archived
//! bytes without deserializing.

use alloc::vec::Vec;

use rkyv::{
    Archive, Archived, Deserialize, Serialize,
    primitive::{ArchivedU16, ArchivedU32, ArchivedU64},
    rancor::Fallible,
    ser::{Allocator, Writer},
    vec::ArchivedVec,
};

use crate::{Bitset, block::bitpos};

/// The archived version of `Bitset<W>`.
pub type ArchivedBitset<W> = ArchivedVec<Archived<W>>;

/// The resolver for `Bitset<W>`.
pub type BitsetResolver = rkyv::vec::VecResolver;

/// Queries on an archived bitset.
pub trait ArchivedBitsetExt {
    /// Returns `true` if the bit at position `n` is set.
    ///
    /// Returns `false` if the position is out of bounds.
    fn has(&self, n: u32) -> bool;

    /// Counts the number of set bits.
    fn count_ones(&self) -> usize;
}

macro_rules! impl_rkyv {
    ($($ty:ty => $archived:ty, |$w:ident| $native:expr),* $(,)?) => {$(
        impl Archive for Bitset<$ty> {
            type Archived = ArchivedVec<$archived>;
            type Resolver = BitsetResolver;

            fn resolve(&self, resolver: Self::Resolver, out: rkyv::Place<Self::Archived>) {
                ArchivedVec::resolve_from_slice(self.as_slice(), resolver, out);
            }
        }

        impl<S: Fallible + Allocator + Writer + ?Sized> Serialize<S> for Bitset<$ty> {
            #[inline]
            fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
                ArchivedVec::<$archived>::serialize_from_slice(self.as_slice(), serializer)
            }
        }

        impl<D: Fallible + ?Sized> Deserialize<Bitset<$ty>, D> for ArchivedVec<$archived> {
            #[inline]
            fn deserialize(&self, _deserializer: &mut D) -> Result<Bitset<$ty>, D::Error> {
                let blocks: Vec<$ty> = self.as_slice().iter().map(|$w| $native).collect();
                Ok(Bitset::from(blocks))
            }
        }

        impl ArchivedBitsetExt for ArchivedVec<$archived> {
            fn has(&self, n: u32) -> bool {
                let (idx, bp) = bitpos::<$ty>(n);
                self.as_slice().get(idx).is_some_and(|$w| ($native >> bp) & 1 != 0)
            }

            fn count_ones(&self) -> usize {
                self.as_slice()
                    .iter()
                    .map(|$w| $native.count_ones() as usize)
                    .sum()
            }
        }
    )*};
}

// Impls must name the archived word itself, not `Archived<$ty>`.
impl_rkyv!(
    u8 => u8, |w| *w,
    u16 => ArchivedU16, |w| w.to_native(),
    u32 => ArchivedU32, |w| w.to_native(),
    u64 => ArchivedU64, |w| w.to_native(),
);

// ============================================================================
// Tests
// ============================================================================
