//! Type-safe index wrappers
//!
//! Newtype wrappers around indices so atom indices cannot be confused with
//! bond indices. Indices refer to positions in a molecule's atom/bond lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an atom within a molecule's atom list
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AtomIndex(pub u32);

impl AtomIndex {
    /// Create a new index
    #[inline]
    pub const fn new(index: u32) -> Self {
        AtomIndex(index)
    }

    /// Get the raw index value as usize
    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for AtomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtomIndex({})", self.0)
    }
}

impl fmt::Display for AtomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AtomIndex {
    #[inline]
    fn from(index: u32) -> Self {
        AtomIndex(index)
    }
}

impl From<usize> for AtomIndex {
    #[inline]
    fn from(index: usize) -> Self {
        AtomIndex(index as u32)
    }
}

impl From<AtomIndex> for usize {
    #[inline]
    fn from(index: AtomIndex) -> Self {
        index.0 as usize
    }
}

/// Index of a bond within a molecule's bond list
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BondIndex(pub u32);

impl BondIndex {
    /// Create a new index
    #[inline]
    pub const fn new(index: u32) -> Self {
        BondIndex(index)
    }

    /// Get the raw index value as usize
    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for BondIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BondIndex({})", self.0)
    }
}

impl fmt::Display for BondIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BondIndex {
    #[inline]
    fn from(index: u32) -> Self {
        BondIndex(index)
    }
}

impl From<usize> for BondIndex {
    #[inline]
    fn from(index: usize) -> Self {
        BondIndex(index as u32)
    }
}

impl From<BondIndex> for usize {
    #[inline]
    fn from(index: BondIndex) -> Self {
        index.0 as usize
    }
}
