//! Player-side decisions for automated duels.

use duel_core::combat::effective_range;
use duel_core::{Combatant, Enemy, Player, Step, TerrainGrid, WeaponProfile};
use duel_runtime::providers::ai::nodes::deflections;

/// One player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Shoot,
    Move(Step),
}

/// Shoots whenever the enemy is visible and inside the weapon's effective
/// range; otherwise closes the distance.
///
/// Deterministic: it never draws from the session's random source.
#[derive(Clone, Copy, Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn decide(
        &self,
        grid: &TerrainGrid,
        player: &Player,
        enemy: &Enemy,
        weapon: &WeaponProfile,
    ) -> Command {
        let here = player.position();
        let there = enemy.position();
        let range = effective_range(weapon, player.modifiers());

        if here.euclidean_distance(there) <= f64::from(range) && grid.has_line_of_sight(here, there)
        {
            return Command::Shoot;
        }

        let preferred = here.step_toward(there);
        let [left, right] = deflections(preferred);
        [preferred, left, right]
            .into_iter()
            .find(|step| {
                let destination = here.offset(*step);
                !step.is_none() && !grid.blocks_movement(destination) && destination != there
            })
            .map_or(Command::Shoot, Command::Move)
    }
}
