//! Serde implementations for `Bitset`.
//!
//! The default implementation picks the representation from the format:
//! human-readable formats (JSON, TOML, ...) get the `|`-separated text
//! encoding, compact formats get the plain block sequence. Both keep the
//! block count. The submodules force one representation for use with
//! `#[serde(with = "...")]`.

use alloc::{string::ToString, vec::Vec};
use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::{Bitset, block::Block};

struct BlocksVisitor<W>(PhantomData<W>);

impl<'de, W: Block + Deserialize<'de>> Visitor<'de> for BlocksVisitor<W> {
    type Value = Bitset<W>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {}-bit blocks", W::BITS)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut blocks = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(block) = seq.next_element::<W>()? {
            blocks.push(block);
        }
        Ok(Bitset::from(blocks))
    }
}

struct TextVisitor<W>(PhantomData<W>);

impl<W: Block> Visitor<'_> for TextVisitor<W> {
    type Value = Bitset<W>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string of decimal blocks separated by '|'")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Bitset::parse(v).map_err(E::custom)
    }
}

/// Serde implementation serializing the bitset as a sequence of blocks.
pub mod words {
    use super::*;

    /// Serialize the bitset as a sequence of blocks, trailing zero blocks
    /// included.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<W, S>(b: &Bitset<W>, serializer: S) -> Result<S::Ok, S::Error>
    where
        W: Block + Serialize,
        S: Serializer,
    {
        b.as_slice().serialize(serializer)
    }

    /// Deserialize the bitset from a sequence of blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if an element does not fit in `W`.
    pub fn deserialize<'de, W, D>(deserializer: D) -> Result<Bitset<W>, D::Error>
    where
        W: Block + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(BlocksVisitor(PhantomData))
    }
}

/// Serde implementation serializing the bitset as its text encoding,
/// `"0|5|100"`, regardless of the format.
pub mod text {
    use super::*;

    /// Serialize the bitset as a `|`-separated string of decimal blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<W, S>(b: &Bitset<W>, serializer: S) -> Result<S::Ok, S::Error>
    where
        W: Block,
        S: Serializer,
    {
        serializer.serialize_str(&b.to_string())
    }

    /// Deserialize the bitset from a `|`-separated string of decimal blocks.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the [`ParseBitsetError`](crate::ParseBitsetError)
    /// message if the string is malformed.
    pub fn deserialize<'de, W, D>(deserializer: D) -> Result<Bitset<W>, D::Error>
    where
        W: Block,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TextVisitor(PhantomData))
    }
}

/// Module for serializing and deserializing [`Bitset`] as a sorted set of
/// positions.
pub mod sorted_set {
    use super::*;

    /// Serialize the [`Bitset`] as a sorted sequence of positions.
    ///
    /// The block count is not preserved. Bits past `u32::MAX` are not
    /// positions and are left out, length prefix included.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the sequence.
    pub fn serialize<W, S>(b: &Bitset<W>, serializer: S) -> Result<S::Ok, S::Error>
    where
        W: Block,
        S: Serializer,
    {
        let positions = b.iter();
        let mut ser = serializer.serialize_seq(Some(positions.len()))?;
        for n in positions {
            ser.serialize_element(&n)?;
        }
        ser.end()
    }

    /// Deserialize a [`Bitset`] from a strictly increasing sequence of
    /// positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is not strictly increasing or if
    /// deserialization fails.
    pub fn deserialize<'de, W, D>(deserializer: D) -> Result<Bitset<W>, D::Error>
    where
        W: Block,
        D: Deserializer<'de>,
    {
        struct SortedSetVisitor<W>(PhantomData<W>);

        impl<'de, W: Block> Visitor<'de> for SortedSetVisitor<W> {
            type Value = Bitset<W>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sorted sequence of positions")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut b = Bitset::new();
                let mut last = None;
                while let Some(n) = seq.next_element::<u32>()? {
                    if last.is_some_and(|last| last >= n) {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Unsigned(u64::from(n)),
                            &"sorted sequence",
                        ));
                    }
                    last = Some(n);
                    b.set(n);
                }
                Ok(b)
            }
        }

        deserializer.deserialize_seq(SortedSetVisitor(PhantomData))
    }
}

impl<W: Block + Serialize> Serialize for Bitset<W> {
    /// Uses [`text`] for human-readable formats and [`words`] otherwise.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            text::serialize(self, serializer)
        } else {
            words::serialize(self, serializer)
        }
    }
}

impl<'de, W: Block + Deserialize<'de>> Deserialize<'de> for Bitset<W> {
    /// Uses [`text`] for human-readable formats and [`words`] otherwise.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            text::deserialize(deserializer)
        } else {
            words::deserialize(deserializer)
        }
    }
}
