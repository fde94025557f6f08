//! Bot targeting: which move to make and where to aim it.
//!
//! Intel lives in the bot's `BotIntel`; nothing here keeps state of its own.

use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::cell_set::CellSet;
use crate::config::{GRID_SIZE, HEURISTIC_ANCHORS, MAX_ANCHOR, RADAR_PICK_CHANCE};
use crate::grid::{Coord, Grid};
use crate::moves::{Inventory, MoveKind};
use crate::player::{BotIntel, Difficulty};
use crate::resolver::Target;

/// Heavy moves a bot uses as soon as it holds a charge, highest first.
pub const MOVE_PRIORITY: [MoveKind; 3] = [
    MoveKind::Torpedo,
    MoveKind::Artillery,
    MoveKind::SmokeScreen,
];

/// Pick the bot's move kind for this turn.
///
/// The first heavy move with a charge wins; otherwise RadarSweep (20%) or
/// Fire (80%), rolled again whenever the pick has no charge left.
pub fn choose_move_kind<R: Rng + ?Sized>(inventory: &Inventory, rng: &mut R) -> MoveKind {
    if let Some(kind) = MOVE_PRIORITY
        .iter()
        .copied()
        .find(|&k| inventory.has_charge(k))
    {
        return kind;
    }
    loop {
        let kind = if rng.random_bool(RADAR_PICK_CHANCE) {
            MoveKind::RadarSweep
        } else {
            MoveKind::Fire
        };
        if inventory.has_charge(kind) {
            return kind;
        }
    }
}

/// Coin flip biased by difficulty: `true` means target meaningfully.
pub fn decide_meaningful<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> bool {
    rng.random_bool(difficulty.targeting_chance())
}

/// First in-bounds neighbour of `hit` (down, up, left, right) that is not
/// yet resolved.
pub fn open_neighbour(hit: Coord, grid: &Grid) -> Option<Coord> {
    hit.neighbours().find(|&n| !grid.is_resolved(n))
}

/// First heuristic anchor point that is not yet resolved.
pub fn heuristic_anchor(grid: &Grid) -> Option<Coord> {
    HEURISTIC_ANCHORS
        .iter()
        .filter_map(|&(r, c)| Coord::new(r, c).ok())
        .find(|&c| !grid.is_resolved(c))
}

/// Uniformly random cell that is neither `Hit` nor `Miss`.
pub fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Coord> {
    let open: Vec<Coord> = grid.unresolved().collect();
    open.choose(rng).copied()
}

/// Uniformly random valid 2x2 anchor whose corner cell is unresolved,
/// falling back to any anchor once none is left.
pub fn random_anchor<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Coord {
    let open: Vec<Coord> = grid.unresolved().filter(|c| c.is_anchor()).collect();
    match open.choose(rng) {
        Some(&c) => c,
        None => Coord::new(
            rng.random_range(0..=MAX_ANCHOR),
            rng.random_range(0..=MAX_ANCHOR),
        )
        .unwrap_or(Coord::ORIGIN),
    }
}

/// Intel-driven single-cell choice.
///
/// 1. A radar-revealed cell not yet resolved.
/// 2. The first open neighbour of a confirmed hit; hits with no open
///    neighbour left are dropped from the hit-list.
/// 3. The first unresolved heuristic anchor, then a random unresolved cell.
pub fn meaningful_cell<R: Rng + ?Sized>(
    intel: &mut BotIntel,
    grid: &Grid,
    rng: &mut R,
) -> Option<Coord> {
    while let Some(found) = intel.found.pop_first() {
        if !grid.is_resolved(found) {
            return Some(found);
        }
    }

    let hits: Vec<Coord> = intel.hits.iter().collect();
    for hit in hits {
        match open_neighbour(hit, grid) {
            Some(next) => return Some(next),
            None => {
                intel.hits.remove(hit);
            }
        }
    }

    heuristic_anchor(grid).or_else(|| random_cell(grid, rng))
}

/// Where a bot aims `kind` this turn.
///
/// `meaningful` is the difficulty coin flip; RadarSweep and SmokeScreen
/// ignore it. `own_smoke` is the bot's current smoke cover.
pub fn choose_target<R: Rng + ?Sized>(
    kind: MoveKind,
    meaningful: bool,
    intel: &mut BotIntel,
    own_smoke: &CellSet,
    enemy: &Grid,
    rng: &mut R,
) -> Target {
    match kind {
        MoveKind::Fire => {
            let cell = if meaningful {
                meaningful_cell(intel, enemy, rng)
            } else {
                random_cell(enemy, rng)
            };
            Target::cell(cell.unwrap_or(Coord::ORIGIN))
        }
        MoveKind::RadarSweep => Target::cell(radar_anchor(intel, enemy, rng)),
        MoveKind::SmokeScreen => Target::cell(smoke_anchor(intel, own_smoke, rng)),
        MoveKind::Artillery => {
            let anchor = if meaningful {
                meaningful_cell(intel, enemy, rng).map(Coord::clamp_to_anchor)
            } else {
                None
            };
            Target::cell(anchor.unwrap_or_else(|| random_anchor(enemy, rng)))
        }
        MoveKind::Torpedo => {
            let along_row: bool = rng.random();
            if meaningful {
                if let Some(cell) = meaningful_cell(intel, enemy, rng) {
                    return if along_row {
                        Target::Row(cell.row())
                    } else {
                        Target::Column(cell.col())
                    };
                }
            }
            let idx = rng.random_range(0..GRID_SIZE);
            if along_row {
                Target::Row(idx)
            } else {
                Target::Column(idx)
            }
        }
    }
}

/// Sweep around the first confirmed hit not yet radared, else at random.
fn radar_anchor<R: Rng + ?Sized>(intel: &BotIntel, enemy: &Grid, rng: &mut R) -> Coord {
    intel
        .hits
        .iter()
        .find(|&h| !intel.radared.contains(h))
        .map(Coord::clamp_to_anchor)
        .unwrap_or_else(|| random_anchor(enemy, rng))
}

/// Cover the first own ship cell not yet smoked, else anywhere.
fn smoke_anchor<R: Rng + ?Sized>(intel: &BotIntel, own_smoke: &CellSet, rng: &mut R) -> Coord {
    match intel.own_ships.iter().find(|&c| !own_smoke.contains(c)) {
        Some(c) => c.clamp_to_anchor(),
        None => random_anchor(&Grid::new(), rng),
    }
}
