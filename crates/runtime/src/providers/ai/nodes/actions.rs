//! Action nodes. Each one that succeeds records the turn's result.

use arrayvec::ArrayVec;
use behavior_tree::{Behavior, Status};
use duel_core::rng::{choose, shuffle};
use duel_core::{Step, WeaponProfile};
use tracing::debug;

use crate::providers::ai::{TurnAction, TurnContext, TurnResult};

/// Reports a dead enemy. Always succeeds.
pub struct ReportDefeated;

impl Behavior<TurnContext<'_>> for ReportDefeated {
    fn tick(&self, ctx: &mut TurnContext<'_>) -> Status {
        ctx.set_result(TurnResult::new(TurnAction::Dead, String::new()));
        Status::Success
    }
}

/// Fires the base pistol at the opponent. The enemy carries no modifier set.
pub struct ShootOpponent;

impl Behavior<TurnContext<'_>> for ShootOpponent {
    fn tick(&self, ctx: &mut TurnContext<'_>) -> Status {
        let outcome = ctx.resolver.resolve(
            &*ctx.actor,
            &mut *ctx.opponent,
            ctx.grid,
            &WeaponProfile::PISTOL,
            None,
            &mut *ctx.rng,
        );
        let message = outcome.message.clone();
        ctx.set_result(TurnResult::new(TurnAction::Shoot(outcome), message));
        Status::Success
    }
}

/// Steps one tile toward the movement target, deflecting around obstacles.
///
/// Tries the per-axis sign step first, then its two [`deflections`], then
/// all eight compass steps in random order. Fails only when every option is
/// blocked.
pub struct AdvanceOnOpponent;

impl Behavior<TurnContext<'_>> for AdvanceOnOpponent {
    fn tick(&self, ctx: &mut TurnContext<'_>) -> Status {
        let here = ctx.actor.position();
        let target = ctx.movement_target();
        let preferred = here.step_toward(target);

        if try_step(ctx, preferred) {
            let message = format!("{} moves closer...", ctx.actor.name());
            ctx.set_result(TurnResult::new(TurnAction::Move(preferred), message));
            return Status::Success;
        }

        let mut alternatives: ArrayVec<Step, 10> = ArrayVec::new();
        alternatives.extend(deflections(preferred));
        let mut compass = Step::COMPASS;
        shuffle(&mut *ctx.rng, &mut compass);
        alternatives.extend(compass);

        for step in alternatives {
            if try_step(ctx, step) {
                let message = format!("{} moves around cover...", ctx.actor.name());
                ctx.set_result(TurnResult::new(TurnAction::Move(step), message));
                return Status::Success;
            }
        }

        debug!(position = %here, %target, "every step blocked");
        Status::Failure
    }
}

/// Waits with a random taunt. Always succeeds.
pub struct HoldPosition;

impl HoldPosition {
    pub const TAUNTS: [&'static str; 4] = [
        "looks for an opening...",
        "takes cover!",
        "reloads...",
        "waits...",
    ];
}

impl Behavior<TurnContext<'_>> for HoldPosition {
    fn tick(&self, ctx: &mut TurnContext<'_>) -> Status {
        let taunt = choose(&mut *ctx.rng, &Self::TAUNTS).unwrap_or(&"waits...");
        let message = format!("{} {}", ctx.actor.name(), taunt);
        ctx.set_result(TurnResult::new(TurnAction::Wait, message));
        Status::Success
    }
}

/// The two targeted detours for a blocked step: sideways variants of a
/// straight step, or the axis components of a diagonal one.
pub fn deflections(preferred: Step) -> [Step; 2] {
    if preferred.dx == 0 {
        [Step::new(-1, preferred.dy), Step::new(1, preferred.dy)]
    } else if preferred.dy == 0 {
        [Step::new(preferred.dx, -1), Step::new(preferred.dx, 1)]
    } else {
        [Step::new(preferred.dx, 0), Step::new(0, preferred.dy)]
    }
}

/// Moves the actor by `step` if the destination is enterable. A zero step
/// lands on the actor's own cell and always succeeds.
fn try_step(ctx: &mut TurnContext<'_>, step: Step) -> bool {
    let destination = ctx.actor.position().offset(step);
    if !ctx.can_enter(destination) {
        return false;
    }
    ctx.actor.set_position(destination);
    true
}
