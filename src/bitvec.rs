//! Growable packed bit vector.
//!
//! Bits are stored in a contiguous `Vec<u64>`; bit `i` lives in word `i / 64`
//! at position `i % 64` (least-significant first).
//!
//! # Layout
//!
//! - `words.len() == len.div_ceil(64)` at all times.
//! - Bits of the last word at positions `>= len` are always zero. Nothing ever
//!   truncates the vector, so every write that touches such a bit first moves
//!   `len` past it.
//!
//! The second invariant lets equality, hashing and popcounts work directly on
//! whole words without masking the tail.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::traits::{BitAccess, BitAccessMut, BitLength};
use crate::word::{with_word_bit, word_bit, WORD_BITS};

/// A mutable sequence of booleans packed into 64-bit words.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitVector {
    words: Vec<u64>,
    len: usize,
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("ones", &self.count_ones())
            .finish()
    }
}

impl BitVector {
    /// Create an empty bit vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bit vector of `len` bits, all `false`.
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![0u64; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Create a bit vector of `size` bits, all `false`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `size` is negative.
    pub fn with_size(size: i64) -> Result<Self> {
        let len = usize::try_from(size)
            .map_err(|_| Error::InvalidArgument(format!("negative size: {size}")))?;
        Ok(Self::with_len(len))
    }

    /// Return the total number of bits in the vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the bit-vector has length 0.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of words currently allocated, which may exceed `len / 64`.
    pub fn capacity_words(&self) -> usize {
        self.words.capacity()
    }

    /// The words backing `[0, len)`. Bits past `len` in the last word are zero.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Total number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Total number of unset bits in `[0, len)`.
    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    /// Append `value` at index `len()`.
    pub fn push(&mut self, value: bool) {
        let bit = self.len % WORD_BITS;
        if bit == 0 {
            self.words.push(0);
        }
        if value {
            let last = self.words.len() - 1;
            self.words[last] |= 1u64 << bit;
        }
        self.len += 1;
    }

    /// Return true if the bit at index `i` is set.
    ///
    /// Indices at or past `len()` have never been written and read as `false`.
    pub fn get(&self, i: usize) -> bool {
        if i >= self.len {
            return false;
        }
        word_bit(self.words[i / WORD_BITS], i % WORD_BITS)
    }

    /// Store `value` at index `i`.
    ///
    /// If `i >= len()` the vector grows to `i + 1` bits; the new positions
    /// before `i` read as `false`.
    ///
    /// # Panics
    ///
    /// Panics if `i == usize::MAX`, since the length `i + 1` is not representable.
    pub fn set(&mut self, i: usize, value: bool) {
        if i >= self.len {
            let len = i
                .checked_add(1)
                .unwrap_or_else(|| panic!("bit index {i} leaves no room for a length"));
            self.grow_to(len);
        }
        let w = &mut self.words[i / WORD_BITS];
        *w = with_word_bit(*w, i % WORD_BITS, value);
    }

    /// Signed, checked form of [`get`](Self::get).
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `index` is negative.
    pub fn get_bit(&self, index: i64) -> Result<bool> {
        let i = checked_index(index)?;
        Ok(self.get(i))
    }

    /// Signed, checked form of [`set`](Self::set).
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `index` is negative.
    pub fn set_bit(&mut self, index: i64, value: bool) -> Result<()> {
        let i = checked_index(index)?;
        self.set(i, value);
        Ok(())
    }

    /// Iterate over the bits in `[0, len)`.
    pub fn iter(&self) -> Iter<'_> {
        Iter { bv: self, pos: 0 }
    }

    /// Hash of `(len, content)`; the empty vector hashes to 0.
    ///
    /// Folds the used words with a multiplier of 31, then mixes in the length,
    /// so `[false]` hashes to 1 and `[true]` to 32.
    pub fn content_hash(&self) -> u64 {
        let folded = self
            .words
            .iter()
            .fold(0u64, |h, &w| h.wrapping_mul(31).wrapping_add(w));
        (self.len as u64).wrapping_add(folded.wrapping_mul(31))
    }

    fn grow_to(&mut self, len: usize) {
        // Vec handles amortized doubling; new words are zero so the tail
        // invariant holds.
        self.words.resize(len.div_ceil(WORD_BITS), 0);
        self.len = len;
    }
}

/// Convert a caller-supplied signed index, rejecting negatives.
pub(crate) fn checked_index(index: i64) -> Result<usize> {
    usize::try_from(index).map_err(|_| Error::IndexOutOfBounds(index))
}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}

/// Renders one `'0'`/`'1'` per bit, index 0 first.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.iter().map(|b| if b { '1' } else { '0' }).collect();
        f.write_str(&s)
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bv = Self::new();
        bv.extend(iter);
        bv
    }
}

impl Extend<bool> for BitVector {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        if let (lower, Some(upper)) = iter.size_hint() {
            if lower == upper {
                let words = self.len.saturating_add(lower).div_ceil(WORD_BITS);
                self.words.reserve(words - self.words.len());
            }
        }
        for b in iter {
            self.push(b);
        }
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the bits of a [`BitVector`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    bv: &'a BitVector,
    pos: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.pos >= self.bv.len {
            return None;
        }
        let b = self.bv.get(self.pos);
        self.pos += 1;
        Some(b)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bv.len - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl BitLength for BitVector {
    fn len(&self) -> usize {
        self.len
    }
}

impl BitAccess for BitVector {
    fn get(&self, index: usize) -> bool {
        BitVector::get(self, index)
    }
}

impl BitAccessMut for BitVector {
    fn push(&mut self, value: bool) {
        BitVector::push(self, value);
    }

    fn set(&mut self, index: usize, value: bool) {
        BitVector::set(self, index, value);
    }
}
