//! # Packed Bit Vectors with Rank
//!
//! *A growable boolean sequence, and a variant that counts prefixes fast.*
//!
//! ## Intuition First
//!
//! A `Vec<bool>` spends a whole byte per flag. Packing 64 flags into each
//! `u64` cuts memory by 8x and lets whole-word instructions (`count_ones`)
//! process 64 flags at once.
//!
//! Counting how many flags are set before position `i` (the *rank* of `i`)
//! still needs a walk over `i / 64` words. Storing a running total every few
//! hundred bits turns that walk into one lookup plus a short popcount.
//!
//! ## Structures
//!
//! - [`BitVector`]: packed storage with append, random get/set and growth on
//!   out-of-range writes. Reads past the end return `false`.
//! - [`RankedBitVector`]: owns a `BitVector` plus a block index of cumulative
//!   counts, answering `rank1`/`rank0` and `select1`/`select0`. Every write
//!   goes through it so the index never goes stale.
//! - [`word`]: checked single-bit operations on raw 64-bit words.
//!
//! The [`traits`] module names the shared capabilities (length, bit access,
//! mutation, rank) so callers can be generic over both vectors.
//!
//! ## Complexity
//!
//! | Operation | `BitVector` | `RankedBitVector` |
//! |-----------|-------------|-------------------|
//! | `push` | O(1) amortized | O(1) amortized |
//! | `get` | O(1) | O(1) |
//! | `set` (in range) | O(1) | O(n / block) |
//! | `rank1` | - | O(block / 64) |
//! | `select1` | - | O(log(n / block) + block / 64) |
//!
//! ## What Could Go Wrong
//!
//! 1. **Update cost**: flipping a bit near the front of a ranked vector
//!    touches every later block count. Larger blocks make that cheaper and
//!    queries slower; see [`RankConfig`].
//! 2. **Signed indices**: the `usize` API cannot express a negative index.
//!    The `get_bit`/`set_bit`/`with_size` entry points accept `i64` and report
//!    negatives as [`Error`]s instead.
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Space-efficient Static Trees and Graphs."
//! - Vigna, S. (2008). "Broadword Implementation of Rank/Select Queries."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod config;
pub mod error;
pub mod ranked;
pub mod traits;
pub mod word;

pub use bitvec::BitVector;
pub use config::RankConfig;
pub use error::{Error, Result};
pub use ranked::RankedBitVector;
pub use traits::{BitAccess, BitAccessMut, BitLength, RankSupport};
