//! The 10x10 cell matrix each player owns.

use core::fmt;

use crate::common::GameError;
use crate::config::{GRID_SIZE, MAX_ANCHOR};
use crate::ship::ShipClass;

/// A bounds-checked grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    /// Fails with `OutOfBounds` unless both indices lie in `[0, 9]`.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Coord {
            row: row as u8,
            col: col as u8,
        })
    }

    pub(crate) fn from_index(idx: usize) -> Option<Self> {
        if idx >= GRID_SIZE * GRID_SIZE {
            return None;
        }
        Some(Coord {
            row: (idx / GRID_SIZE) as u8,
            col: (idx % GRID_SIZE) as u8,
        })
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Flat stride-10 index of this coordinate.
    pub fn index(self) -> usize {
        self.row() * GRID_SIZE + self.col()
    }

    /// Neighbour offset by `(dr, dc)`, or `None` if it falls off the grid.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Coord::new(row, col).ok()
    }

    /// Orthogonal neighbours in probe order: down, up, left, right.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        [(1, 0), (-1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Pulls a coordinate on the last row/column back by one so it can serve
    /// as the top-left corner of a 2x2 block.
    pub fn clamp_to_anchor(self) -> Coord {
        Coord {
            row: self.row.min(MAX_ANCHOR as u8),
            col: self.col.min(MAX_ANCHOR as u8),
        }
    }

    /// Whether this coordinate is a valid top-left corner of a 2x2 block.
    pub fn is_anchor(self) -> bool {
        self.row() <= MAX_ANCHOR && self.col() <= MAX_ANCHOR
    }

    /// The four cells of the 2x2 block anchored here, row-major. Cells that
    /// would leave the grid are skipped.
    pub fn block(self) -> impl Iterator<Item = Coord> {
        [(0, 0), (0, 1), (1, 0), (1, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE * GRID_SIZE).filter_map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    /// Column letter followed by 1-based row, e.g. `B3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Miss,
    Hit,
    /// Undiscovered segment of a ship of this class.
    Ship(ShipClass),
}

impl CellState {
    /// `Hit` and `Miss` are never overwritten once written.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Owned 10x10 grid, stored flat with stride 10.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CellState; GRID_SIZE * GRID_SIZE],
}

impl Grid {
    /// A grid with every cell `Empty`.
    pub fn new() -> Self {
        Grid {
            cells: [CellState::Empty; GRID_SIZE * GRID_SIZE],
        }
    }

    /// Read the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        Ok(self.at(Coord::new(row, col)?))
    }

    /// Write the cell at `(row, col)`. A resolved cell only accepts its own
    /// state again.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GameError> {
        self.put(Coord::new(row, col)?, state)
    }

    pub fn at(&self, coord: Coord) -> CellState {
        self.cells[coord.index()]
    }

    pub fn put(&mut self, coord: Coord, state: CellState) -> Result<(), GameError> {
        let current = self.cells[coord.index()];
        if current.is_resolved() && current != state {
            return Err(GameError::TerminalCell {
                row: coord.row(),
                col: coord.col(),
            });
        }
        self.cells[coord.index()] = state;
        Ok(())
    }

    pub fn is_resolved(&self, coord: Coord) -> bool {
        self.at(coord).is_resolved()
    }

    /// Coordinates that are neither `Hit` nor `Miss`.
    pub fn unresolved(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| !self.is_resolved(c))
    }

    /// Number of cells currently holding an undiscovered ship segment.
    pub fn ship_cells_remaining(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, CellState::Ship(_)))
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let ch = match self.cells[r * GRID_SIZE + c] {
                    CellState::Empty => '.',
                    CellState::Miss => 'o',
                    CellState::Hit => '*',
                    CellState::Ship(class) => (b'0' + class.size() as u8) as char,
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
