#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod cell_set;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod moves;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod resolver;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::{
    choose_move_kind, choose_target, decide_meaningful, heuristic_anchor, meaningful_cell,
    open_neighbour, random_anchor, random_cell, MOVE_PRIORITY,
};
pub use cell_set::CellSet;
pub use common::{GameError, MoveOutcome};
pub use config::*;
pub use game::{
    refresh_unlocks, settle_sinkings, sunk_ships_this_call, Game, GameStatus, Seat, TurnReport,
};
pub use grid::{CellState, Coord, Grid};
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level_from, LOG_ENV};
pub use moves::{Charges, Inventory, MoveKind, MoveSlot};
pub use player::{BotIntel, Commander, Difficulty, Player};
pub use player_ai::BotCommander;
#[cfg(feature = "std")]
pub use player_cli::{parse_coord, parse_line, parse_orientation, CliCommander};
pub use resolver::{affected_cells, resolve_move, Order, Target};
pub use ship::{Orientation, Roster, Ship, ShipClass};
