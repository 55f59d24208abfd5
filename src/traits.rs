//! Capability traits shared by the plain and ranked bit vectors.
//!
//! Code that only needs to read bits or count them can be written against
//! these instead of a concrete vector type.

/// A sequence with a logical length in bits.
pub trait BitLength {
    /// Number of meaningful bits.
    fn len(&self) -> usize;

    /// Whether no bits have been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read access to individual bits.
pub trait BitAccess: BitLength {
    /// Return the bit at `index`; indices at or past `len()` read as `false`.
    fn get(&self, index: usize) -> bool;
}

/// Write access to individual bits.
pub trait BitAccessMut: BitAccess {
    /// Append `value` at position `len()`.
    fn push(&mut self, value: bool);

    /// Store `value` at `index`, growing the sequence with `false` bits if
    /// `index >= len()`.
    fn set(&mut self, index: usize, value: bool);
}

/// Prefix counting over a bit sequence.
pub trait RankSupport: BitLength {
    /// Number of set bits in `[0, i)`, with `i` clamped to `len()`.
    fn rank1(&self, i: usize) -> usize;

    /// Number of unset bits in `[0, i)`, with `i` clamped to `len()`.
    fn rank0(&self, i: usize) -> usize {
        let i = i.min(self.len());
        i - self.rank1(i)
    }
}
