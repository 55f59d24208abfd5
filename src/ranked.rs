//! Bit vector with a rank/select index kept in sync under mutation.
//!
//! # Index
//!
//! The bits are split into blocks of [`RankConfig::block_bits`] bits. For
//! every block boundary `k * block_bits <= len`, `blocks[k]` holds the number
//! of ones in `[0, k * block_bits)`. `blocks[0]` is always 0.
//!
//! A rank query reads one cached count and popcounts at most one block of
//! words, so its cost depends on the block size and not on `len`.
//!
//! # Maintenance
//!
//! - `push` only ever completes a new block, which appends one count.
//! - `set` inside the vector shifts every count after the touched block by
//!   one, and only when the bit actually flips.
//! - `set` past the end grows the vector and appends counts for the blocks
//!   the growth completed.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::bitvec::{checked_index, BitVector};
use crate::config::RankConfig;
use crate::error::Result;
use crate::traits::{BitAccess, BitAccessMut, BitLength, RankSupport};
use crate::word::{low_mask, select_in_word, WORD_BITS};

/// A [`BitVector`] plus a cumulative block index answering `rank1`/`select1`.
#[derive(Clone)]
pub struct RankedBitVector {
    bits: BitVector,
    config: RankConfig,
    blocks: Vec<usize>,
}

impl fmt::Debug for RankedBitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankedBitVector")
            .field("len", &self.bits.len())
            .field("ones", &self.count_ones())
            .field("block_bits", &self.config.block_bits())
            .finish()
    }
}

impl RankedBitVector {
    /// Create an empty ranked vector with the default block size.
    pub fn new() -> Self {
        Self::from_bit_vector(BitVector::new())
    }

    /// Create an empty ranked vector with a custom block size.
    pub fn with_config(config: RankConfig) -> Self {
        Self::from_parts(BitVector::new(), config)
    }

    /// Create a ranked vector of `size` bits, all `false`.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// if `size` is negative.
    pub fn with_size(size: i64) -> Result<Self> {
        Ok(Self::from_bit_vector(BitVector::with_size(size)?))
    }

    /// Take ownership of `bits` and build its index.
    pub fn from_bit_vector(bits: BitVector) -> Self {
        Self::from_parts(bits, RankConfig::default())
    }

    /// Take ownership of `bits` and build its index with `config`.
    pub fn from_parts(bits: BitVector, config: RankConfig) -> Self {
        let mut rv = Self {
            bits,
            config,
            blocks: Vec::new(),
        };
        rv.rebuild_index();
        tracing::debug!(
            len = rv.bits.len(),
            block_bits = config.block_bits(),
            blocks = rv.blocks.len(),
            "built rank index"
        );
        rv
    }

    /// The underlying bits.
    pub fn as_bit_vector(&self) -> &BitVector {
        &self.bits
    }

    /// Drop the index and return the underlying bits.
    pub fn into_inner(self) -> BitVector {
        self.bits
    }

    /// Block configuration in use.
    pub fn config(&self) -> RankConfig {
        self.config
    }

    /// Return the total number of bits in the vector.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Return true if the bit-vector has length 0.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Return true if the bit at index `i` is set; `false` past the end.
    pub fn get(&self, i: usize) -> bool {
        self.bits.get(i)
    }

    /// Signed, checked read; see [`BitVector::get_bit`].
    pub fn get_bit(&self, index: i64) -> Result<bool> {
        self.bits.get_bit(index)
    }

    /// Append `value` and extend the index if a block was completed.
    pub fn push(&mut self, value: bool) {
        self.bits.push(value);
        self.extend_index();
    }

    /// Store `value` at `i`, growing the vector if needed, and correct the index.
    pub fn set(&mut self, i: usize, value: bool) {
        if i >= self.bits.len() {
            self.bits.set(i, value);
            self.extend_index();
            return;
        }
        if self.bits.get(i) == value {
            return;
        }
        self.bits.set(i, value);

        let first = i / self.config.block_bits() + 1;
        if first < self.blocks.len() {
            tracing::trace!(
                index = i,
                value,
                counts = self.blocks.len() - first,
                "adjusting rank counts"
            );
            for count in &mut self.blocks[first..] {
                if value {
                    *count += 1;
                } else {
                    *count -= 1;
                }
            }
        }
    }

    /// Signed, checked write; see [`BitVector::set_bit`].
    pub fn set_bit(&mut self, index: i64, value: bool) -> Result<()> {
        let i = checked_index(index)?;
        self.set(i, value);
        Ok(())
    }

    /// Return the number of set bits in the range `[0, i)`.
    ///
    /// `i` is clamped to `len()`, so `rank1(len())` is the total popcount.
    pub fn rank1(&self, i: usize) -> usize {
        let i = i.min(self.bits.len());
        let block = i / self.config.block_bits();
        let words = self.bits.words();

        let start = block * self.config.words_per_block();
        let end = i / WORD_BITS;
        let mut rank = self.blocks[block];
        rank += words[start..end]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum::<usize>();

        let bit_offset = i % WORD_BITS;
        if bit_offset > 0 {
            rank += (words[end] & low_mask(bit_offset)).count_ones() as usize;
        }
        rank
    }

    /// Return the number of unset bits in the range `[0, i)`.
    pub fn rank0(&self, i: usize) -> usize {
        let i = i.min(self.bits.len());
        i - self.rank1(i)
    }

    /// Total number of set bits.
    pub fn count_ones(&self) -> usize {
        self.rank1(self.bits.len())
    }

    /// Total number of unset bits.
    pub fn count_zeros(&self) -> usize {
        self.bits.len() - self.count_ones()
    }

    /// Return the position of the $k$-th set bit (0-indexed).
    pub fn select1(&self, k: usize) -> Option<usize> {
        if k >= self.count_ones() {
            return None;
        }
        // last boundary with at most k ones before it; blocks[0] == 0 <= k
        let block = self.blocks.partition_point(|&c| c <= k) - 1;
        let remaining = k - self.blocks[block];
        self.scan_select(block, remaining, |w| w)
    }

    /// Return the position of the $k$-th unset bit (0-indexed).
    pub fn select0(&self, k: usize) -> Option<usize> {
        if k >= self.count_zeros() {
            return None;
        }
        let block_bits = self.config.block_bits();
        let zeros_before = |b: usize| b * block_bits - self.blocks[b];

        let (mut lo, mut hi) = (0, self.blocks.len());
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if zeros_before(mid) <= k {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let remaining = k - zeros_before(lo);
        self.scan_select(lo, remaining, |w| !w)
    }

    /// Find the `remaining`-th one of `map(word)` starting at block `block`.
    fn scan_select(
        &self,
        block: usize,
        mut remaining: usize,
        map: impl Fn(u64) -> u64,
    ) -> Option<usize> {
        let start = block * self.config.words_per_block();
        for (offset, &raw) in self.bits.words()[start..].iter().enumerate() {
            let word = map(raw);
            let ones = word.count_ones() as usize;
            if remaining < ones {
                let pos = (start + offset) * WORD_BITS + select_in_word(word, remaining)?;
                return (pos < self.bits.len()).then_some(pos);
            }
            remaining -= ones;
        }
        None
    }

    /// Recompute every cached count from the bits.
    pub fn rebuild_index(&mut self) {
        self.blocks.clear();
        self.blocks.push(0);
        self.extend_index();
    }

    /// Append counts for every block boundary at or below `len()` not yet cached.
    fn extend_index(&mut self) {
        let block_bits = self.config.block_bits();
        let per_block = self.config.words_per_block();
        let words = self.bits.words();
        while self.blocks.len() * block_bits <= self.bits.len() {
            let k = self.blocks.len() - 1;
            let ones: usize = words[k * per_block..(k + 1) * per_block]
                .iter()
                .map(|w| w.count_ones() as usize)
                .sum();
            let next = self.blocks[k] + ones;
            self.blocks.push(next);
        }
    }
}

impl Default for RankedBitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BitVector> for RankedBitVector {
    fn from(bits: BitVector) -> Self {
        Self::from_bit_vector(bits)
    }
}

impl From<RankedBitVector> for BitVector {
    fn from(rv: RankedBitVector) -> Self {
        rv.into_inner()
    }
}

// Equality and hashing look at the bits only; the index is derived data and
// the block size does not change the content.
impl PartialEq for RankedBitVector {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for RankedBitVector {}

impl PartialEq<BitVector> for RankedBitVector {
    fn eq(&self, other: &BitVector) -> bool {
        &self.bits == other
    }
}

impl PartialEq<RankedBitVector> for BitVector {
    fn eq(&self, other: &RankedBitVector) -> bool {
        self == &other.bits
    }
}

impl Hash for RankedBitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl fmt::Display for RankedBitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bits, f)
    }
}

impl FromIterator<bool> for RankedBitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bit_vector(iter.into_iter().collect())
    }
}

impl Extend<bool> for RankedBitVector {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
        self.extend_index();
    }
}

impl BitLength for RankedBitVector {
    fn len(&self) -> usize {
        self.bits.len()
    }
}

impl BitAccess for RankedBitVector {
    fn get(&self, index: usize) -> bool {
        self.bits.get(index)
    }
}

impl BitAccessMut for RankedBitVector {
    fn push(&mut self, value: bool) {
        RankedBitVector::push(self, value);
    }

    fn set(&mut self, index: usize, value: bool) {
        RankedBitVector::set(self, index, value);
    }
}

impl RankSupport for RankedBitVector {
    fn rank1(&self, i: usize) -> usize {
        RankedBitVector::rank1(self, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn naive_rank(bits: &[bool], i: usize) -> usize {
        bits[..i].iter().filter(|&&b| b).count()
    }

    fn small_blocks() -> RankConfig {
        RankConfig::new(64).unwrap()
    }

    #[test]
    fn rank_basic_sequence() {
        let rv: RankedBitVector = [true, false, true, true, false].into_iter().collect();
        assert_eq!(rv.rank1(0), 0);
        assert_eq!(rv.rank1(1), 1);
        assert_eq!(rv.rank1(3), 2);
        assert_eq!(rv.rank1(5), 3);
        assert_eq!(rv.rank0(5), 2);
        assert_eq!(rv.count_ones(), 3);
    }

    #[test]
    fn rank_clamps_past_end() {
        let rv: RankedBitVector = [true, true].into_iter().collect();
        assert_eq!(rv.rank1(100), 2);
        assert_eq!(rv.rank0(100), 0);
        assert_eq!(RankedBitVector::new().rank1(0), 0);
    }

    #[test]
    fn rank_across_blocks() {
        let bits: Vec<bool> = (0..2000).map(|i| i % 3 == 0 || i % 7 == 0).collect();
        let rv = RankedBitVector::from_parts(bits.iter().copied().collect(), small_blocks());
        for i in 0..=bits.len() {
            assert_eq!(rv.rank1(i), naive_rank(&bits, i), "i={i}");
        }
    }

    #[test]
    fn push_keeps_index_in_sync() {
        let mut rv = RankedBitVector::with_config(small_blocks());
        let mut model = Vec::new();
        for i in 0..700 {
            let b = i % 5 < 2;
            rv.push(b);
            model.push(b);
            assert_eq!(rv.rank1(rv.len()), naive_rank(&model, model.len()));
        }
        for i in (0..=model.len()).step_by(17) {
            assert_eq!(rv.rank1(i), naive_rank(&model, i));
        }
    }

    #[test]
    fn set_in_range_adjusts_later_blocks() {
        let mut rv = RankedBitVector::from_parts(BitVector::with_len(1000), small_blocks());
        rv.set(10, true);
        rv.set(500, true);
        assert_eq!(rv.rank1(10), 0);
        assert_eq!(rv.rank1(11), 1);
        assert_eq!(rv.rank1(501), 2);
        assert_eq!(rv.rank1(1000), 2);

        rv.set(10, false);
        assert_eq!(rv.rank1(1000), 1);
        assert_eq!(rv.rank1(500), 0);

        // no-op write leaves counts alone
        rv.set(500, true);
        assert_eq!(rv.rank1(1000), 1);
    }

    #[test]
    fn set_past_end_extends_index() {
        let mut rv = RankedBitVector::with_config(small_blocks());
        rv.set(300, true);
        assert_eq!(rv.len(), 301);
        assert_eq!(rv.rank1(300), 0);
        assert_eq!(rv.rank1(301), 1);
        rv.set(1000, true);
        assert_eq!(rv.rank1(1001), 2);
        assert_eq!(rv.rank1(640), 1);
    }

    #[test]
    fn select_basic() {
        let rv: RankedBitVector = [true, true, false, true].into_iter().collect();
        assert_eq!(rv.select1(0), Some(0));
        assert_eq!(rv.select1(1), Some(1));
        assert_eq!(rv.select1(2), Some(3));
        assert_eq!(rv.select1(3), None);
        assert_eq!(rv.select0(0), Some(2));
        assert_eq!(rv.select0(1), None);
    }

    #[test]
    fn select_inverts_rank() {
        let bits: Vec<bool> = (0..1500).map(|i| (i * 7) % 11 < 4).collect();
        let rv = RankedBitVector::from_parts(bits.iter().copied().collect(), small_blocks());
        for k in 0..rv.count_ones() {
            let pos = rv.select1(k).unwrap();
            assert!(rv.get(pos));
            assert_eq!(rv.rank1(pos), k);
        }
        for k in 0..rv.count_zeros() {
            let pos = rv.select0(k).unwrap();
            assert!(!rv.get(pos));
            assert_eq!(rv.rank0(pos), k);
        }
        assert_eq!(rv.select0(rv.count_zeros()), None);
    }

    #[test]
    fn equality_ignores_variant_and_block_size() {
        let plain: BitVector = (0..100).map(|i| i % 2 == 0).collect();
        let a = RankedBitVector::from_bit_vector(plain.clone());
        let b = RankedBitVector::from_parts(plain.clone(), small_blocks());
        assert_eq!(a, b);
        assert_eq!(a, plain);
        assert_eq!(plain, a);

        let mut c = a.clone();
        c.set(1, true);
        assert_ne!(c, a);
        assert_ne!(plain, c);
    }

    #[test]
    fn signed_entry_points_report_errors() {
        assert!(matches!(
            RankedBitVector::with_size(-1),
            Err(Error::InvalidArgument(_))
        ));

        let mut rv = RankedBitVector::with_size(0).unwrap();
        assert_eq!(rv.get_bit(-1), Err(Error::IndexOutOfBounds(-1)));
        assert_eq!(rv.set_bit(-1, true), Err(Error::IndexOutOfBounds(-1)));
        assert!(rv.is_empty());

        rv.set_bit(600, true).unwrap();
        assert_eq!(rv.len(), 601);
        assert_eq!(rv.get_bit(600), Ok(true));
        assert_eq!(rv.get_bit(601), Ok(false));
        assert_eq!(rv.rank1(600), 0);
        assert_eq!(rv.rank1(601), 1);
        assert_eq!(rv.select1(0), Some(600));
    }

    #[test]
    fn rebuild_matches_incremental() {
        let mut rv = RankedBitVector::with_config(small_blocks());
        for i in 0..400 {
            rv.push(i % 4 == 0);
        }
        for i in (0..400).step_by(9) {
            rv.set(i, true);
        }
        let before: Vec<usize> = (0..=rv.len()).map(|i| rv.rank1(i)).collect();
        rv.rebuild_index();
        let after: Vec<usize> = (0..=rv.len()).map(|i| rv.rank1(i)).collect();
        assert_eq!(before, after);
    }
}
