//! A set of grid coordinates packed into a single `u128`.
//!
//! Each coordinate maps to bit `row * GRID_SIZE + col`, so membership,
//! insertion and removal are single bit operations and the set never holds a
//! duplicate. Iteration yields coordinates in row-major order.

use core::fmt;

use crate::config::GRID_SIZE;
use crate::grid::Coord;

const CELLS: usize = GRID_SIZE * GRID_SIZE;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    #[inline]
    fn bit(coord: Coord) -> u128 {
        1u128 << coord.index()
    }

    /// Adds `coord`; returns `false` if it was already present.
    pub fn insert(&mut self, coord: Coord) -> bool {
        let bit = Self::bit(coord);
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    /// Removes `coord`; returns `false` if it was not present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        let bit = Self::bit(coord);
        let present = self.bits & bit != 0;
        self.bits &= !bit;
        present
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.bits & Self::bit(coord) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// First coordinate in row-major order, if any.
    pub fn first(&self) -> Option<Coord> {
        if self.bits == 0 {
            None
        } else {
            Coord::from_index(self.bits.trailing_zeros() as usize)
        }
    }

    /// Removes and returns the first coordinate in row-major order.
    pub fn pop_first(&mut self) -> Option<Coord> {
        let first = self.first()?;
        self.remove(first);
        Some(first)
    }

    pub fn iter(&self) -> Iter {
        Iter {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl FromIterator<Coord> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Coord;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Iter {
    bits: u128,
    idx: usize,
}

impl Iterator for Iter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.idx < CELLS {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & 1 != 0 {
                return Coord::from_index(idx);
            }
        }
        None
    }
}
