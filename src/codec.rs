//! Text encoding for `Bitset`.
//!
//! A bitset is written as its blocks in decimal, lowest block first, joined
//! by `|`:
//!
//! ```text
//! 0|5|100
//! ```
//!
//! The empty bitset is the empty string. The encoding keeps every block,
//! trailing zero blocks included, so decoding gives back exactly the same
//! storage.

use alloc::string::String;
use core::{fmt, str::FromStr};

use crate::{Bitset, block::Block};

/// Separator between two encoded blocks.
pub const SEPARATOR: char = '|';

/// Errors that can occur when parsing the text encoding of a [`Bitset`].
///
/// Every variant names the zero-based index of the first offending segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBitsetError {
    /// A segment contains a character that is not an ASCII digit.
    #[error("invalid digit in block {index}: {segment:?}")]
    InvalidDigit {
        /// Index of the segment
        index: usize,
        /// The segment as found in the input
        segment: String,
    },

    /// A segment is empty (adjacent, leading or trailing separators).
    #[error("empty block {index}")]
    EmptySegment {
        /// Index of the segment
        index: usize,
    },

    /// A segment does not fit in the block width.
    #[error("block {index} out of range for {bits}-bit blocks: {segment}")]
    OutOfRange {
        /// Index of the segment
        index: usize,
        /// The segment as found in the input
        segment: String,
        /// Width of a block in bits
        bits: u32,
    },
}

impl ParseBitsetError {
    /// Returns the index of the segment that failed to parse.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidDigit { index, .. }
            | Self::EmptySegment { index }
            | Self::OutOfRange { index, .. } => *index,
        }
    }
}

fn parse_block<W: Block>(index: usize, segment: &str) -> Result<W, ParseBitsetError> {
    if segment.is_empty() {
        return Err(ParseBitsetError::EmptySegment { index });
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseBitsetError::InvalidDigit {
            index,
            segment: segment.into(),
        });
    }
    W::from_decimal(segment).ok_or_else(|| ParseBitsetError::OutOfRange {
        index,
        segment: segment.into(),
        bits: W::BITS,
    })
}

impl<W: Block> Bitset<W> {
    /// Parses the `|`-separated decimal encoding produced by
    /// [`Display`](fmt::Display).
    ///
    /// The empty string gives the empty bitset. Every segment becomes one
    /// block, in order; parsing stops at the first invalid segment and no
    /// partial bitset is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitsetError`] if a segment is empty, contains
    /// anything but ASCII digits, or does not fit in `W`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockset::{Bitset, ParseBitsetError};
    ///
    /// let bitset = Bitset::<u8>::parse("0|5|100")?;
    /// assert_eq!(bitset.as_slice(), &[0, 5, 100]);
    ///
    /// assert!(Bitset::<u8>::parse("")?.is_empty());
    /// assert!(Bitset::<u8>::parse("0|256").is_err());
    /// assert!(Bitset::<u16>::parse("0|256").is_ok());
    /// # Ok::<(), ParseBitsetError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseBitsetError> {
        if text.is_empty() {
            return Ok(Self::new());
        }

        let blocks = text
            .split(SEPARATOR)
            .enumerate()
            .map(|(index, segment)| parse_block::<W>(index, segment))
            .collect::<Result<_, _>>()?;
        Ok(Self { blocks })
    }
}

impl<W: Block> fmt::Display for Bitset<W> {
    /// Formats the bitset as its blocks in decimal joined by `|`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockset::Bitset;
    /// let bitset = Bitset::<u32>::from_blocks([0, 5, 100]);
    /// assert_eq!(bitset.to_string(), "0|5|100");
    /// assert_eq!(Bitset::<u32>::new().to_string(), "");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.blocks.split_first() else {
            return Ok(());
        };

        write!(f, "{first}")?;
        for block in rest {
            write!(f, "{SEPARATOR}{block}")?;
        }
        Ok(())
    }
}

impl<W: Block> FromStr for Bitset<W> {
    type Err = ParseBitsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
