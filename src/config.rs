use crate::moves::{Charges, MoveKind, MoveSlot};
use crate::ship::ShipClass;

pub const GRID_SIZE: usize = 10;
pub const SHIP_COUNT: usize = 4;
pub const MOVE_COUNT: usize = 5;

/// Largest valid row/column for the top-left corner of a 2x2 block.
pub const MAX_ANCHOR: usize = GRID_SIZE - 2;

/// One ship per size class, indexed by `size - 2`.
pub const FLEET: [ShipClass; SHIP_COUNT] = [
    ShipClass::Submarine,
    ShipClass::Destroyer,
    ShipClass::Battleship,
    ShipClass::Carrier,
];

/// Order in which ships are placed during setup.
pub const PLACEMENT_ORDER: [ShipClass; SHIP_COUNT] = [
    ShipClass::Carrier,
    ShipClass::Battleship,
    ShipClass::Destroyer,
    ShipClass::Submarine,
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 4 + 5;

pub const RADAR_SWEEPS: u8 = 3;

/// Starting charges and unlock thresholds, one row per move kind.
pub const MOVE_TABLE: [MoveSlot; MOVE_COUNT] = [
    MoveSlot::new(MoveKind::Fire, Charges::Unlimited, 0),
    MoveSlot::new(MoveKind::RadarSweep, Charges::Limited(RADAR_SWEEPS), 0),
    MoveSlot::new(MoveKind::SmokeScreen, Charges::Limited(0), 1),
    MoveSlot::new(MoveKind::Artillery, Charges::Limited(0), 1),
    MoveSlot::new(MoveKind::Torpedo, Charges::Limited(0), 3),
];

/// Grid points probed when the bot has no hit to extend, as (row, col).
pub const HEURISTIC_ANCHORS: [(usize, usize); 9] = [
    (0, 0),
    (0, 4),
    (0, 9),
    (4, 0),
    (4, 4),
    (4, 9),
    (9, 0),
    (9, 4),
    (9, 9),
];

/// Chance that a bot with no heavy move available picks RadarSweep over Fire.
pub const RADAR_PICK_CHANCE: f64 = 0.2;

pub const EASY_TARGETING_CHANCE: f64 = 0.5;
pub const MEDIUM_TARGETING_CHANCE: f64 = 0.75;
pub const HARD_TARGETING_CHANCE: f64 = 1.0;

/// How many times random placement retries before giving up on a ship.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

/// How many times a human is re-prompted for one ship's placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10;
