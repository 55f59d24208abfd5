//! Tuning knobs for the rank index.

use crate::error::{Error, Result};
use crate::word::WORD_BITS;

/// Default rank block: 512 bits, i.e. eight words per cached count (as in Rank9).
pub const DEFAULT_BLOCK_BITS: usize = 512;

/// Configuration for a [`RankedBitVector`](crate::RankedBitVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankConfig {
    block_bits: usize,
}

impl RankConfig {
    /// Use one cached count every `block_bits` bits.
    ///
    /// `block_bits` must be a positive multiple of 64. Smaller blocks make
    /// queries cheaper and in-place updates more expensive.
    pub fn new(block_bits: usize) -> Result<Self> {
        if block_bits == 0 || block_bits % WORD_BITS != 0 {
            return Err(Error::InvalidArgument(format!(
                "block_bits must be a positive multiple of {WORD_BITS}, got {block_bits}"
            )));
        }
        Ok(Self { block_bits })
    }

    /// Bits covered by one cached count.
    pub fn block_bits(&self) -> usize {
        self.block_bits
    }

    pub(crate) fn words_per_block(&self) -> usize {
        self.block_bits / WORD_BITS
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            block_bits: DEFAULT_BLOCK_BITS,
        }
    }
}
