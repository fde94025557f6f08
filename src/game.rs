//! Turn sequencing: move selection, resolution, post-move bookkeeping and the
//! win check.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    common::{GameError, MoveOutcome},
    config::SHIP_COUNT,
    moves::MoveKind,
    player::{Commander, Player},
    resolver::{resolve_move, Order, Target},
    ship::ShipClass,
};

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Finished { winner: Seat },
}

/// What happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub seat: Seat,
    /// Move kind the seat chose, if it got that far.
    pub kind: Option<MoveKind>,
    pub target: Option<Target>,
    /// Outcome of the move, or the reason the turn was forfeited.
    pub result: Result<MoveOutcome, GameError>,
    /// Opponent ships sunk by this move.
    pub sunk: Vec<ShipClass>,
    /// Single-use moves that expired under one-round exclusivity.
    pub expired: Vec<MoveKind>,
    pub status: GameStatus,
}

impl TurnReport {
    pub fn forfeited(&self) -> bool {
        self.result.is_err()
    }
}

/// Newly sunk opponent ships, each reported once per game.
pub fn sunk_ships_this_call(opponent: &mut Player) -> Vec<ShipClass> {
    opponent.roster_mut().sunk_just_now()
}

/// Grant the actor whatever its opponent's sunk count now unlocks.
pub fn refresh_unlocks(actor: &mut Player, opponent: &Player) {
    actor.inventory_mut().refresh(opponent.ships_sunk());
}

/// Post-move bookkeeping: count each newly sunk ship against `opponent` and
/// refresh the actor's unlocks once per ship.
pub fn settle_sinkings(actor: &mut Player, opponent: &mut Player) -> Vec<ShipClass> {
    let sunk = sunk_ships_this_call(opponent);
    for class in &sunk {
        opponent.record_sinking();
        refresh_unlocks(actor, opponent);
        log::info!("{}'s {} has been sunk", opponent.name(), class);
    }
    sunk
}

/// A match between two players, strictly alternating turns.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    current: Seat,
    status: GameStatus,
    turns: u32,
}

impl Game {
    /// Start a match with `starting` to move first. Fleets should already be
    /// placed.
    pub fn new(first: Player, second: Player, starting: Seat) -> Self {
        Game {
            players: [first, second],
            current: starting,
            status: GameStatus::InProgress,
            turns: 0,
        }
    }

    /// Start a match with the first mover picked by a fair coin.
    pub fn random_start<R: Rng + ?Sized>(first: Player, second: Player, rng: &mut R) -> Self {
        let starting = if rng.random() { Seat::First } else { Seat::Second };
        Self::new(first, second, starting)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> Seat {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Turns taken so far, forfeited ones included.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    fn pair_mut(&mut self, actor: Seat) -> (&mut Player, &mut Player) {
        let (first, second) = self.players.split_at_mut(1);
        match actor {
            Seat::First => (&mut first[0], &mut second[0]),
            Seat::Second => (&mut second[0], &mut first[0]),
        }
    }

    /// Play one turn for the current seat using `commander`.
    ///
    /// Any error along the way forfeits the turn and is recorded in the
    /// report. A finished game (`GameOver`) and a seat that can no longer be
    /// prompted (`Input`) are returned as errors and leave the turn untaken.
    pub fn take_turn(
        &mut self,
        commander: &mut dyn Commander,
        rng: &mut SmallRng,
    ) -> Result<TurnReport, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let seat = self.current;
        let mut report = TurnReport {
            seat,
            kind: None,
            target: None,
            result: Err(GameError::GameOver),
            sunk: Vec::new(),
            expired: Vec::new(),
            status: GameStatus::InProgress,
        };

        let (actor, opponent) = self.pair_mut(seat);
        let result = run_turn(commander, rng, actor, opponent, &mut report);
        // a closed or broken input stream ends the match instead of forfeiting
        // turns forever; the seat keeps its turn
        if let Err(GameError::Input(reason)) = &result {
            log::warn!("{} cannot be prompted: {}", actor.name(), reason);
            return Err(GameError::Input(reason.clone()));
        }
        report.result = result;
        if let Err(e) = &report.result {
            log::warn!("{} forfeits the turn: {}", actor.name(), e);
        }

        if opponent.ships_sunk() as usize >= SHIP_COUNT {
            log::info!("all of {}'s ships are sunk, {} wins", opponent.name(), actor.name());
            self.status = GameStatus::Finished { winner: seat };
        } else {
            self.current = seat.other();
        }
        self.turns += 1;
        report.status = self.status;
        Ok(report)
    }
}

fn run_turn(
    commander: &mut dyn Commander,
    rng: &mut SmallRng,
    actor: &mut Player,
    opponent: &mut Player,
    report: &mut TurnReport,
) -> Result<MoveOutcome, GameError> {
    let kind = commander.choose_kind(rng, actor, opponent)?;
    report.kind = Some(kind);
    if !actor.is_bot() {
        report.expired = actor.inventory_mut().expire_one_round_moves(kind);
    }
    if !actor.inventory().has_charge(kind) {
        return Err(GameError::NoMovesAvailable(kind));
    }
    let target = commander.choose_target(rng, kind, actor, opponent)?;
    report.target = Some(target);
    let outcome = resolve_move(actor, opponent, Order::new(kind, target))?;
    report.sunk = settle_sinkings(actor, opponent);
    Ok(outcome)
}
