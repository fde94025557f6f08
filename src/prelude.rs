//! Commonly used types and utilities for ease of import.

pub use crate::{
    resolve_move, BotCommander, CellState, Commander, Coord, Difficulty, Game, GameError,
    GameStatus, MoveKind, MoveOutcome, Order, Player, Seat, ShipClass, Target,
};

#[cfg(feature = "std")]
pub use crate::{ui::DisplayMode, CliCommander};
