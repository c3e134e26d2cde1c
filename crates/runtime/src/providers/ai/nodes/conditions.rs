//! Condition nodes.
//!
//! Conditions never record a turn result. All but [`RollToShoot`] are pure
//! reads of the per-turn snapshot.

use behavior_tree::{Behavior, Status};
use tracing::debug;

use crate::providers::ai::TurnContext;

/// Succeeds when the acting enemy is already dead.
pub struct IsDefeated;

impl Behavior<TurnContext<'_>> for IsDefeated {
    fn tick(&self, ctx: &mut TurnContext<'_>) -> Status {
        (!ctx.actor.is_alive()).into()
    }
}

/// Succeeds when the opponent is within the maximum shooting range.
pub struct OpponentInShootingRange;

impl Behavior<TurnContext<'_>> for OpponentInShootingRange {
    fn tick(&self, ctx: &mut TurnContext<'_>) -> Status {
        (ctx.distance <= ctx.config.max_shooting_range).into()
    }
}

/// Succeeds when the enemy has line of sight to the opponent.
pub struct OpponentVisible;

impl Behavior<TurnContext<'_>> for OpponentVisible {
    fn tick(&self, ctx: &mut TurnContext<'_>) -> Status {
        ctx.visible.into()
    }
}

/// Rolls the aggression check. Inside half the shooting range the chance
/// gets the close-range bonus.
///
/// Draws exactly one float, so it must sit after the eligibility checks.
pub struct RollToShoot;

impl RollToShoot {
    pub fn chance(ctx: &TurnContext<'_>) -> f64 {
        let mut chance = ctx.aggression;
        if ctx.distance < ctx.config.max_shooting_range * 0.5 {
            chance += ctx.config.close_range_bonus;
        }
        chance
    }
}

impl Behavior<TurnContext<'_>> for RollToShoot {
    fn tick(&self, ctx: &mut TurnContext<'_>) -> Status {
        let chance = Self::chance(ctx);
        let roll = ctx.rng.next_f64();
        debug!(chance, roll, distance = ctx.distance, "shoot roll");
        (roll < chance).into()
    }
}
