/// Cells already used by the path being explored.
///
/// Marking is by value: `with` hands back a new mask and leaves `self` alone, so a
/// recursive call can never leak its marks into a sibling branch.
#[derive(Clone, PartialEq, Eq)]
pub struct PathMask {
    // bit is one if the cell is on the path
    bits: Vec<u64>,
    len: usize,
}

impl PathMask {
    /// A mask for `len` cells with nothing visited
    pub fn empty(len: usize) -> Self {
        Self {
            bits: vec![0; (len + 63) / 64],
            len,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len && (self.bits[index / 64] & (1u64 << (index % 64))) != 0
    }

    /// Copy of this mask with `index` marked
    pub fn with(&self, index: usize) -> Self {
        debug_assert!(index < self.len, "cell {} outside mask of {}", index, self.len);
        let mut tmp = self.clone();
        tmp.bits[index / 64] |= 1u64 << (index % 64);
        tmp
    }

    /// Number of cells on the path
    pub fn count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn capacity(&self) -> usize {
        self.len
    }
}

use std::fmt;

impl fmt::Debug for PathMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.len {
            write!(f, "{}", if self.contains(i) { '#' } else { '.' })?;
        }
        write!(f, "]")
    }
}
