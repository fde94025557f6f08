//! Move resolution: validate a move, apply it to both players, report the
//! outcome.
//!
//! The resolver keeps no state of its own. Each call either rejects the move
//! before touching anything or runs it to completion, mutating the opponent's
//! grid and roster (or the actor's smoke set) and spending one charge.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{GameError, MoveOutcome};
use crate::config::GRID_SIZE;
use crate::grid::{CellState, Coord};
use crate::moves::MoveKind;
use crate::player::Player;

/// Where a move is aimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// A single cell, or the top-left corner of a 2x2 block.
    Cell { row: usize, col: usize },
    /// A whole row (torpedo).
    Row(usize),
    /// A whole column (torpedo).
    Column(usize),
}

impl Target {
    pub fn cell(coord: Coord) -> Self {
        Target::Cell {
            row: coord.row(),
            col: coord.col(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Target::Cell { row, col } => match Coord::new(row, col) {
                Ok(c) => write!(f, "{}", c),
                Err(_) => write!(f, "({}, {})", row, col),
            },
            Target::Row(r) => write!(f, "row {}", r + 1),
            Target::Column(c) if c < 26 => write!(f, "column {}", (b'A' + c as u8) as char),
            Target::Column(c) => write!(f, "column {}", c),
        }
    }
}

/// A move kind paired with its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub kind: MoveKind,
    pub target: Target,
}

impl Order {
    pub fn new(kind: MoveKind, target: Target) -> Self {
        Order { kind, target }
    }
}

fn line_index(idx: usize, row: bool) -> Result<(), GameError> {
    if idx >= GRID_SIZE {
        let (row, col) = if row { (idx, 0) } else { (0, idx) };
        return Err(GameError::OutOfBounds { row, col });
    }
    Ok(())
}

fn anchor(row: usize, col: usize) -> Result<Coord, GameError> {
    let coord = Coord::new(row, col)?;
    if !coord.is_anchor() {
        return Err(GameError::InvalidTarget("2x2 block would leave the grid"));
    }
    Ok(coord)
}

/// Cells an order touches, after checking the target fits the move kind.
pub fn affected_cells(order: &Order) -> Result<Vec<Coord>, GameError> {
    match (order.kind, order.target) {
        (MoveKind::Fire, Target::Cell { row, col }) => Ok(alloc::vec![Coord::new(row, col)?]),
        (
            MoveKind::RadarSweep | MoveKind::SmokeScreen | MoveKind::Artillery,
            Target::Cell { row, col },
        ) => Ok(anchor(row, col)?.block().collect()),
        (MoveKind::Torpedo, Target::Row(r)) => {
            line_index(r, true)?;
            (0..GRID_SIZE).map(|c| Coord::new(r, c)).collect()
        }
        (MoveKind::Torpedo, Target::Column(c)) => {
            line_index(c, false)?;
            (0..GRID_SIZE).map(|r| Coord::new(r, c)).collect()
        }
        (MoveKind::Torpedo, Target::Cell { .. }) => {
            Err(GameError::InvalidTarget("torpedo needs a row or a column"))
        }
        (_, Target::Row(_) | Target::Column(_)) => {
            Err(GameError::InvalidTarget("only torpedo targets a whole line"))
        }
    }
}

/// Resolve one move by `actor` against `opponent`.
///
/// Fails with `NoMovesAvailable` if `actor` has no charge left for the kind,
/// `OutOfBounds`/`InvalidTarget` if the target does not fit; in every failure
/// case no state changes.
pub fn resolve_move(
    actor: &mut Player,
    opponent: &mut Player,
    order: Order,
) -> Result<MoveOutcome, GameError> {
    if !actor.inventory().has_charge(order.kind) {
        return Err(GameError::NoMovesAvailable(order.kind));
    }
    let cells = affected_cells(&order)?;
    actor.inventory_mut().consume(order.kind)?;

    let outcome = match order.kind {
        MoveKind::Fire | MoveKind::Artillery | MoveKind::Torpedo => {
            strike(actor, opponent, &cells)?
        }
        MoveKind::RadarSweep => sweep(actor, opponent, &cells),
        MoveKind::SmokeScreen => {
            lay_smoke(actor, &cells);
            MoveOutcome::Applied
        }
    };
    log::debug!(
        "{} used {} at {}: {:?}",
        actor.name(),
        order.kind,
        order.target,
        outcome
    );
    Ok(outcome)
}

/// Fire on each cell. Ship segments become hits, empty water becomes a miss,
/// resolved cells are left as they are.
fn strike(
    actor: &mut Player,
    opponent: &mut Player,
    cells: &[Coord],
) -> Result<MoveOutcome, GameError> {
    let mut hits = 0usize;
    for &cell in cells {
        match opponent.grid().at(cell) {
            CellState::Ship(class) => {
                opponent.grid_mut().put(cell, CellState::Hit)?;
                opponent.roster_mut().apply_hit(class);
                if let Some(intel) = opponent.intel_mut() {
                    intel.own_ships.remove(cell);
                }
                if let Some(intel) = actor.intel_mut() {
                    intel.hits.insert(cell);
                }
                hits += 1;
            }
            CellState::Empty => opponent.grid_mut().put(cell, CellState::Miss)?,
            CellState::Hit => hits += 1,
            CellState::Miss => {}
        }
    }
    Ok(if hits > 0 {
        MoveOutcome::Hit
    } else {
        MoveOutcome::Miss
    })
}

fn sweep(actor: &mut Player, opponent: &Player, cells: &[Coord]) -> MoveOutcome {
    let mut found = false;
    for &cell in cells {
        let visible = matches!(opponent.grid().at(cell), CellState::Ship(_))
            && !opponent.smoked().contains(cell);
        if let Some(intel) = actor.intel_mut() {
            intel.radared.insert(cell);
            if visible {
                intel.found.insert(cell);
            }
        }
        found |= visible;
    }
    if found {
        MoveOutcome::ShipsFound
    } else {
        MoveOutcome::NoShipsFound
    }
}

fn lay_smoke(actor: &mut Player, cells: &[Coord]) {
    for &cell in cells {
        if matches!(actor.grid().at(cell), CellState::Ship(_)) {
            actor.smoked_mut().insert(cell);
        }
    }
}
