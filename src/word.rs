//! Bit-level operations on a single 64-bit storage word.
//!
//! Position 0 is the least-significant bit, position 63 the most-significant.
//! These are the primitives [`BitVector`](crate::BitVector) is built from; the
//! checked variants are public for callers that work with raw words.

use crate::error::{Error, Result};

/// Number of bits in a storage word.
pub const WORD_BITS: usize = 64;

/// Width of the text produced by [`word_to_string`].
pub const WORD_STRING_WIDTH: usize = WORD_BITS;

#[inline]
fn check_position(position: i32) -> Result<u32> {
    match u32::try_from(position) {
        Ok(p) if (p as usize) < WORD_BITS => Ok(p),
        _ => Err(Error::IndexOutOfBounds(i64::from(position))),
    }
}

/// Return whether the bit at `position` of `word` is set.
///
/// Fails with [`Error::IndexOutOfBounds`] unless `position` is in `[0, 63]`.
pub fn get_bit_in_word(position: i32, word: u64) -> Result<bool> {
    let p = check_position(position)?;
    Ok(word_bit(word, p as usize))
}

/// Return `word` with the bit at `position` forced to `value`.
///
/// Fails with [`Error::IndexOutOfBounds`] unless `position` is in `[0, 63]`.
pub fn set_bit_in_word(position: i32, value: bool, word: u64) -> Result<u64> {
    let p = check_position(position)?;
    Ok(with_word_bit(word, p as usize, value))
}

/// Render `word` as `'0'`/`'1'` characters, least-significant bit first.
pub fn word_to_string(word: u64) -> String {
    (0..WORD_STRING_WIDTH)
        .map(|i| if word_bit(word, i) { '1' } else { '0' })
        .collect()
}

/// Unchecked read; `bit` must be below [`WORD_BITS`].
#[inline]
pub(crate) fn word_bit(word: u64, bit: usize) -> bool {
    debug_assert!(bit < WORD_BITS);
    (word >> bit) & 1 != 0
}

/// Unchecked write; `bit` must be below [`WORD_BITS`].
#[inline]
pub(crate) fn with_word_bit(word: u64, bit: usize, value: bool) -> u64 {
    debug_assert!(bit < WORD_BITS);
    let mask = 1u64 << bit;
    if value {
        word | mask
    } else {
        word & !mask
    }
}

/// Mask selecting the low `bits` bits of a word (`bits` in `[0, 64]`).
#[inline]
pub(crate) fn low_mask(bits: usize) -> u64 {
    if bits >= WORD_BITS {
        !0u64
    } else {
        (1u64 << bits).wrapping_sub(1)
    }
}

/// Position of the `k`-th (0-based) set bit in `word`, if any.
pub(crate) fn select_in_word(word: u64, k: usize) -> Option<usize> {
    if k >= word.count_ones() as usize {
        return None;
    }
    let mut w = word;
    for _ in 0..k {
        // clear lowest set bit
        w &= w - 1;
    }
    Some(w.trailing_zeros() as usize)
}
