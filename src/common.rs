//! Common types for the engine: the error taxonomy and move outcomes.

use alloc::string::String;
use thiserror::Error;

use crate::moves::MoveKind;
use crate::ship::ShipClass;

/// Result of a resolved move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// At least one targeted cell holds a hit ship segment.
    Hit,
    /// No targeted cell holds a ship segment.
    Miss,
    /// Radar detected an unsmoked ship segment in the swept block.
    ShipsFound,
    /// Radar detected nothing (or only smoked segments).
    NoShipsFound,
    /// Smoke screen laid over the actor's own grid.
    Applied,
}

/// Errors returned by grid, roster, inventory and resolver operations.
///
/// Every error is local to the operation that raised it; the turn controller
/// treats all of them except [`GameError::GameOver`] as a forfeited turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("invalid target: {0}")]
    InvalidTarget(&'static str),
    #[error("no {0} moves available")]
    NoMovesAvailable(MoveKind),
    #[error("ship placement extends beyond the grid")]
    ShipOutOfBounds,
    #[error("ship placement overlaps another ship")]
    ShipOverlaps,
    #[error("{0} is already placed")]
    ShipAlreadyPlaced(ShipClass),
    #[error("cell ({row}, {col}) is already resolved")]
    TerminalCell { row: usize, col: usize },
    #[error("unable to place {0}")]
    UnableToPlaceShip(ShipClass),
    #[error("the game is already over")]
    GameOver,
    #[error("seat is not bot-controlled")]
    NotBotControlled,
    #[error("input error: {0}")]
    Input(String),
}
