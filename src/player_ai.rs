use rand::rngs::SmallRng;

use crate::{
    ai,
    common::GameError,
    moves::MoveKind,
    player::{Commander, Player},
    resolver::Target,
};

/// Drives a bot seat with the targeting engine in [`crate::ai`].
///
/// All memory lives in the seat's [`crate::player::BotIntel`], so one
/// commander can serve any number of bot players. Targeting for a seat
/// without intel fails with [`GameError::NotBotControlled`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BotCommander;

impl BotCommander {
    pub fn new() -> Self {
        Self
    }
}

impl Commander for BotCommander {
    fn place_fleet(&mut self, rng: &mut SmallRng, player: &mut Player) -> Result<(), GameError> {
        player.place_fleet_randomly(rng)
    }

    fn choose_kind(
        &mut self,
        rng: &mut SmallRng,
        actor: &Player,
        _opponent: &Player,
    ) -> Result<MoveKind, GameError> {
        let kind = ai::choose_move_kind(actor.inventory(), rng);
        log::debug!("{} chooses {}", actor.name(), kind);
        Ok(kind)
    }

    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        kind: MoveKind,
        actor: &mut Player,
        opponent: &Player,
    ) -> Result<Target, GameError> {
        let smoke = *actor.smoked();
        let (target, meaningful) = {
            let intel = actor
                .intel_mut()
                .ok_or(GameError::NotBotControlled)?;
            let meaningful = ai::decide_meaningful(intel.difficulty, rng);
            let target = ai::choose_target(kind, meaningful, intel, &smoke, opponent.grid(), rng);
            (target, meaningful)
        };
        log::debug!(
            "{} aims {} at {} ({} targeting)",
            actor.name(),
            kind,
            target,
            if meaningful { "meaningful" } else { "random" }
        );
        Ok(target)
    }
}
