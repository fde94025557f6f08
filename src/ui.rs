#![cfg(feature = "std")]

//! Text rendering of grids, move menus and turn results.
//!
//! Everything returns a `String`; callers decide where it goes.

use std::fmt::Write;

use crate::{
    common::{GameError, MoveOutcome},
    config::GRID_SIZE,
    game::{GameStatus, TurnReport},
    grid::{CellState, Coord, Grid},
    moves::{Inventory, MoveKind},
    player::Player,
};

/// How much the tracking view reveals about misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Misses are shown as `o`.
    #[default]
    Easy,
    /// Misses look like unexplored water.
    Hard,
}

fn header(out: &mut String) {
    out.push_str("  ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
}

fn render_with(out: &mut String, glyph: impl Fn(Coord) -> char) {
    header(out);
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{:2}", r + 1);
        for c in 0..GRID_SIZE {
            let ch = Coord::new(r, c).map(&glyph).unwrap_or('?');
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
}

/// The opponent's grid as seen by the player shooting at it.
pub fn render_tracking(grid: &Grid, mode: DisplayMode) -> String {
    let mut out = String::new();
    render_with(&mut out, |c| match grid.at(c) {
        CellState::Hit => '*',
        CellState::Miss if mode == DisplayMode::Easy => 'o',
        _ => '~',
    });
    out
}

/// A player's own grid with ships, smoke, hits and misses.
pub fn render_own(player: &Player) -> String {
    let mut out = String::new();
    render_with(&mut out, |c| match player.grid().at(c) {
        CellState::Hit => '*',
        CellState::Miss => 'o',
        CellState::Ship(_) if player.smoked().contains(c) => '#',
        CellState::Ship(class) => (b'0' + class.size() as u8) as char,
        CellState::Empty => '~',
    });
    out.push_str("Legend: 2-5=ship  #=smoked ship  *=hit  o=miss  ~=water\n");
    for ship in player.roster().ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "afloat" };
        let _ = writeln!(
            out,
            "  {} ({}): {}",
            ship.class(),
            ship.class().size(),
            status
        );
    }
    out
}

fn describe_move(kind: MoveKind) -> (&'static str, &'static str) {
    match kind {
        MoveKind::Fire => (
            "targets a cell of the opponent's grid.",
            "coordinate (e.g. B3)",
        ),
        MoveKind::RadarSweep => (
            "reveals whether any opponent ships lie in a 2x2 area, without exact locations.",
            "top-left coordinate (e.g. B3 covers B3, C3, B4, C4)",
        ),
        MoveKind::SmokeScreen => (
            "hides a 2x2 area of your own grid from radar sweeps.",
            "top-left coordinate (e.g. B3 covers B3, C3, B4, C4)",
        ),
        MoveKind::Artillery => (
            "works like FIRE but hits a 2x2 area.",
            "top-left coordinate (e.g. B3 covers B3, C3, B4, C4)",
        ),
        MoveKind::Torpedo => (
            "strikes an entire row or column.",
            "row number (1-10) or column letter (A-J)",
        ),
    }
}

/// Menu of the moves that currently have charges.
pub fn render_moves(inventory: &Inventory) -> String {
    let mut out = String::new();
    for slot in inventory.slots() {
        if slot.charges().is_empty() {
            continue;
        }
        let kind = slot.kind();
        let (what, input) = describe_move(kind);
        let _ = writeln!(out, "[{}] {} ({} left): {}", kind.index(), kind, slot.charges(), what);
        let _ = writeln!(out, "    input: {}", input);
    }
    out
}

/// One-line summary of a move outcome.
pub fn describe_outcome(outcome: MoveOutcome) -> &'static str {
    match outcome {
        MoveOutcome::Hit => "hit!",
        MoveOutcome::Miss => "miss!",
        MoveOutcome::ShipsFound => "enemy ships found!",
        MoveOutcome::NoShipsFound => "no enemy ships found!",
        MoveOutcome::Applied => "smoke screen laid.",
    }
}

/// Human-readable account of a turn, from the actor's side.
pub fn describe_turn(report: &TurnReport, actor: &Player, opponent: &Player) -> String {
    let mut out = String::new();
    match (&report.result, report.kind, report.target) {
        (Ok(outcome), Some(kind), Some(target)) => {
            let _ = write!(
                out,
                "{} used {} at {}: {}",
                actor.name(),
                kind,
                target,
                describe_outcome(*outcome)
            );
        }
        (Err(GameError::NoMovesAvailable(kind)), _, _) => {
            let _ = write!(
                out,
                "{} has no {} move available and loses the turn.",
                actor.name(),
                kind
            );
        }
        (Err(e), _, _) => {
            let _ = write!(out, "{} loses the turn: {}.", actor.name(), e);
        }
        (Ok(outcome), _, _) => {
            let _ = write!(out, "{}: {}", actor.name(), describe_outcome(*outcome));
        }
    }
    for kind in &report.expired {
        let _ = write!(out, "\n{}'s last {} charge expired.", actor.name(), kind);
    }
    for class in &report.sunk {
        let _ = write!(out, "\nOne of {}'s ships, a {}, has been sunk!", opponent.name(), class);
    }
    if let GameStatus::Finished { .. } = report.status {
        let _ = write!(
            out,
            "\nAll of {}'s ships have been sunk! {} wins.",
            opponent.name(),
            actor.name()
        );
    }
    out
}
