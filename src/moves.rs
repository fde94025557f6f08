//! Move kinds and the per-player inventory of charges.

use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::{MOVE_COUNT, MOVE_TABLE};

/// The five move kinds, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Fire,
    RadarSweep,
    SmokeScreen,
    Artillery,
    Torpedo,
}

impl MoveKind {
    pub const ALL: [MoveKind; MOVE_COUNT] = [
        MoveKind::Fire,
        MoveKind::RadarSweep,
        MoveKind::SmokeScreen,
        MoveKind::Artillery,
        MoveKind::Torpedo,
    ];

    /// Single-use heavy moves subject to one-round exclusivity.
    pub const ONE_ROUND: [MoveKind; 2] = [MoveKind::Artillery, MoveKind::Torpedo];

    /// Menu identifier, `0..=4`.
    pub const fn index(self) -> usize {
        match self {
            MoveKind::Fire => 0,
            MoveKind::RadarSweep => 1,
            MoveKind::SmokeScreen => 2,
            MoveKind::Artillery => 3,
            MoveKind::Torpedo => 4,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            MoveKind::Fire => "FIRE",
            MoveKind::RadarSweep => "RADAR SWEEP",
            MoveKind::SmokeScreen => "SMOKE SCREEN",
            MoveKind::Artillery => "ARTILLERY",
            MoveKind::Torpedo => "TORPEDO",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Charges left for a move kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Charges {
    Unlimited,
    Limited(u8),
}

impl Charges {
    pub fn is_empty(self) -> bool {
        self == Charges::Limited(0)
    }
}

impl fmt::Display for Charges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charges::Unlimited => f.write_str("unlimited"),
            Charges::Limited(n) => write!(f, "{}", n),
        }
    }
}

/// One row of a player's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSlot {
    kind: MoveKind,
    charges: Charges,
    unlock_threshold: u8,
}

impl MoveSlot {
    pub const fn new(kind: MoveKind, charges: Charges, unlock_threshold: u8) -> Self {
        MoveSlot {
            kind,
            charges,
            unlock_threshold,
        }
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn charges(&self) -> Charges {
        self.charges
    }

    /// Opponent ships that must be sunk before this move is granted.
    pub fn unlock_threshold(&self) -> u8 {
        self.unlock_threshold
    }
}

/// Charges for all five move kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    slots: [MoveSlot; MOVE_COUNT],
}

impl Inventory {
    pub fn new() -> Self {
        Inventory { slots: MOVE_TABLE }
    }

    pub fn slots(&self) -> &[MoveSlot] {
        &self.slots
    }

    pub fn slot(&self, kind: MoveKind) -> &MoveSlot {
        &self.slots[kind.index()]
    }

    pub fn charges(&self, kind: MoveKind) -> Charges {
        self.slot(kind).charges
    }

    pub fn has_charge(&self, kind: MoveKind) -> bool {
        !self.charges(kind).is_empty()
    }

    pub fn is_unlocked(&self, kind: MoveKind, opponent_ships_sunk: u8) -> bool {
        opponent_ships_sunk >= self.slot(kind).unlock_threshold
    }

    /// Grant one charge to every limited move whose threshold is met.
    ///
    /// Called once per opponent ship sunk, so a threshold that stays met keeps
    /// granting on later sinkings. `Fire` is never touched.
    pub fn refresh(&mut self, opponent_ships_sunk: u8) {
        for slot in self.slots.iter_mut() {
            if opponent_ships_sunk < slot.unlock_threshold {
                continue;
            }
            if let Charges::Limited(n) = slot.charges {
                slot.charges = Charges::Limited(n.saturating_add(1));
            }
        }
    }

    /// Spend one charge of `kind`.
    pub fn consume(&mut self, kind: MoveKind) -> Result<(), GameError> {
        let slot = &mut self.slots[kind.index()];
        match slot.charges {
            Charges::Unlimited => Ok(()),
            Charges::Limited(0) => Err(GameError::NoMovesAvailable(kind)),
            Charges::Limited(n) => {
                slot.charges = Charges::Limited(n - 1);
                Ok(())
            }
        }
    }

    /// One-round exclusivity: selecting `chosen` expires the last charge of
    /// every other single-use heavy move. Returns the kinds that expired.
    pub fn expire_one_round_moves(&mut self, chosen: MoveKind) -> Vec<MoveKind> {
        let mut expired = Vec::new();
        for kind in MoveKind::ONE_ROUND {
            if kind == chosen {
                continue;
            }
            let slot = &mut self.slots[kind.index()];
            if slot.charges == Charges::Limited(1) {
                slot.charges = Charges::Limited(0);
                expired.push(kind);
            }
        }
        expired
    }

    #[cfg(test)]
    pub(crate) fn set_charges(&mut self, kind: MoveKind, charges: Charges) {
        self.slots[kind.index()].charges = charges;
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
