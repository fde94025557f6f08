//! Per-player state and the interface through which a seat chooses moves.

use alloc::string::String;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::cell_set::CellSet;
use crate::common::GameError;
use crate::config::{
    EASY_TARGETING_CHANCE, GRID_SIZE, HARD_TARGETING_CHANCE, MEDIUM_TARGETING_CHANCE,
    PLACEMENT_ORDER, RANDOM_PLACEMENT_ATTEMPTS, SHIP_COUNT,
};
use crate::grid::{CellState, Grid};
use crate::moves::{Inventory, MoveKind};
use crate::resolver::Target;
use crate::ship::{Orientation, Roster, ShipClass};

/// Bot difficulty; sets how often the bot targets meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability of meaningful (intel-driven) targeting on a given turn.
    pub fn targeting_chance(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_TARGETING_CHANCE,
            Difficulty::Medium => MEDIUM_TARGETING_CHANCE,
            Difficulty::Hard => HARD_TARGETING_CHANCE,
        }
    }
}

/// What a bot remembers between turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIntel {
    pub difficulty: Difficulty,
    /// Confirmed enemy hits not yet exhausted for adjacency search.
    pub hits: CellSet,
    /// Enemy cells already covered by a radar sweep.
    pub radared: CellSet,
    /// Enemy cells where radar detected an unsmoked ship segment.
    pub found: CellSet,
    /// The bot's own ship cells.
    pub own_ships: CellSet,
}

impl BotIntel {
    pub fn new(difficulty: Difficulty) -> Self {
        BotIntel {
            difficulty,
            hits: CellSet::new(),
            radared: CellSet::new(),
            found: CellSet::new(),
            own_ships: CellSet::new(),
        }
    }
}

/// Everything one side of the match owns.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    grid: Grid,
    roster: Roster,
    inventory: Inventory,
    smoked: CellSet,
    ships_sunk: u8,
    placed: [bool; SHIP_COUNT],
    bot: Option<BotIntel>,
}

impl Player {
    fn with_bot(name: String, bot: Option<BotIntel>) -> Self {
        Player {
            name,
            grid: Grid::new(),
            roster: Roster::new(),
            inventory: Inventory::new(),
            smoked: CellSet::new(),
            ships_sunk: 0,
            placed: [false; SHIP_COUNT],
            bot,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::with_bot(name.into(), None)
    }

    pub fn bot(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::with_bot(name.into(), Some(BotIntel::new(difficulty)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bot(&self) -> bool {
        self.bot.is_some()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Own cells currently hidden from enemy radar.
    pub fn smoked(&self) -> &CellSet {
        &self.smoked
    }

    /// How many of this player's ships have been sunk and announced.
    pub fn ships_sunk(&self) -> u8 {
        self.ships_sunk
    }

    pub fn intel(&self) -> Option<&BotIntel> {
        self.bot.as_ref()
    }

    pub fn intel_mut(&mut self) -> Option<&mut BotIntel> {
        self.bot.as_mut()
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub(crate) fn smoked_mut(&mut self) -> &mut CellSet {
        &mut self.smoked
    }

    pub(crate) fn record_sinking(&mut self) {
        self.ships_sunk += 1;
    }

    /// Whether every ship has been placed.
    pub fn fleet_ready(&self) -> bool {
        self.placed.iter().all(|&p| p)
    }

    /// Place `class` with its bow at `(row, col)`.
    pub fn place_ship(
        &mut self,
        class: ShipClass,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.placed[class.index()] {
            return Err(GameError::ShipAlreadyPlaced(class));
        }
        let cells = class.footprint(row, col, orientation)?;
        if cells.iter().any(|&c| self.grid.at(c) != CellState::Empty) {
            return Err(GameError::ShipOverlaps);
        }
        for &cell in &cells {
            self.grid.put(cell, CellState::Ship(class))?;
            if let Some(intel) = self.bot.as_mut() {
                intel.own_ships.insert(cell);
            }
        }
        self.placed[class.index()] = true;
        Ok(())
    }

    /// A random in-bounds, non-overlapping placement for `class`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        class: ShipClass,
    ) -> Result<(usize, usize, Orientation), GameError> {
        let len = class.size();
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let (max_r, max_c) = match orientation {
                Orientation::Vertical => (GRID_SIZE - len, GRID_SIZE - 1),
                Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - len),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let cells = class.footprint(r, c, orientation)?;
            if cells.iter().all(|&cell| self.grid.at(cell) == CellState::Empty) {
                return Ok((r, c, orientation));
            }
        }
        Err(GameError::UnableToPlaceShip(class))
    }

    /// Place every ship not yet placed at random, largest first.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for class in PLACEMENT_ORDER {
            if self.placed[class.index()] {
                continue;
            }
            let (r, c, o) = self.random_placement(rng, class)?;
            self.place_ship(class, r, c, o)?;
        }
        Ok(())
    }
}

/// Interface implemented by whatever drives a seat: the bot engine or a
/// human behind a presentation layer.
pub trait Commander {
    /// Place every ship of `player` onto its grid.
    fn place_fleet(&mut self, rng: &mut SmallRng, player: &mut Player) -> Result<(), GameError>;

    /// Choose which move to make this turn.
    fn choose_kind(
        &mut self,
        rng: &mut SmallRng,
        actor: &Player,
        opponent: &Player,
    ) -> Result<MoveKind, GameError>;

    /// Choose where to aim `kind`. Bots may update their intel here.
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        kind: MoveKind,
        actor: &mut Player,
        opponent: &Player,
    ) -> Result<Target, GameError>;
}
