use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over cell or wall numbers
///
/// Uses 0-based indexing matching the row-major cell and wall numbering.
/// Provides O(1) membership testing; out-of-range indices are never members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexBitset {
    bits: BitVec,
    capacity: usize,
}

impl IndexBitset {
    /// Create a bitset with no members
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Insert an index
    ///
    /// Returns true if the index was not already present. Indices beyond
    /// the capacity are ignored.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        !self.bits.replace(index, true)
    }

    /// Remove an index
    ///
    /// Returns true if the index was present.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        self.bits.replace(index, false)
    }

    /// Test index membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no indices are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count indices in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all members as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for IndexBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexBitset({} of {}: {:?})", self.count(), self.capacity, self.to_vec())
    }
}
