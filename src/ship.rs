//! Ship classes, per-ship health and the roster that derives sinkings.

use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::{FLEET, SHIP_COUNT};
use crate::grid::Coord;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The four ship classes, one per size 2..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Submarine,
    Destroyer,
    Battleship,
    Carrier,
}

impl ShipClass {
    /// Number of cells the ship covers; also its grid marker value.
    pub const fn size(self) -> usize {
        match self {
            ShipClass::Submarine => 2,
            ShipClass::Destroyer => 3,
            ShipClass::Battleship => 4,
            ShipClass::Carrier => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Submarine => "submarine",
            ShipClass::Destroyer => "destroyer",
            ShipClass::Battleship => "battleship",
            ShipClass::Carrier => "carrier",
        }
    }

    /// Class whose marker value is `size`.
    pub fn from_size(size: usize) -> Option<Self> {
        FLEET.iter().copied().find(|c| c.size() == size)
    }

    /// Roster slot of this class.
    pub const fn index(self) -> usize {
        self.size() - 2
    }

    /// Cells covered when the bow sits at `(row, col)`. Fails with
    /// `ShipOutOfBounds` if any cell would leave the grid.
    pub fn footprint(
        self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Vec<Coord>, GameError> {
        (0..self.size())
            .map(|i| {
                let (r, c) = match orientation {
                    Orientation::Horizontal => (row, col + i),
                    Orientation::Vertical => (row + i, col),
                };
                Coord::new(r, c).map_err(|_| GameError::ShipOutOfBounds)
            })
            .collect()
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Health of a single ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    class: ShipClass,
    remaining_hits: u8,
    announced: bool,
}

impl Ship {
    pub fn new(class: ShipClass) -> Self {
        Ship {
            class,
            remaining_hits: class.size() as u8,
            announced: false,
        }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn remaining_hits(&self) -> u8 {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }
}

/// A player's four ships, distinguished purely by size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    ships: [Ship; SHIP_COUNT],
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            ships: FLEET.map(Ship::new),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, class: ShipClass) -> &Ship {
        &self.ships[class.index()]
    }

    /// Record one hit on the ship whose marker was just struck.
    pub fn apply_hit(&mut self, class: ShipClass) {
        let ship = &mut self.ships[class.index()];
        ship.remaining_hits = ship.remaining_hits.saturating_sub(1);
    }

    /// Ships that have reached zero remaining hits and were not reported
    /// before. Each ship is reported exactly once per game.
    pub fn sunk_just_now(&mut self) -> Vec<ShipClass> {
        let mut sunk = Vec::new();
        for ship in self.ships.iter_mut() {
            if ship.is_sunk() && !ship.announced {
                ship.announced = true;
                sunk.push(ship.class);
            }
        }
        sunk
    }

    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
