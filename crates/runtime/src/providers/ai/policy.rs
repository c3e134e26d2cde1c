use behavior_tree::Behavior;
use duel_core::{
    AiConfig, CombatResolver, Combatant, Position, RngOracle, ShotOutcome, Step, TerrainGrid,
};
use tracing::debug;

use super::TurnContext;
use super::tree::decision_tree;

/// What the enemy did with its turn.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnAction {
    /// The enemy is dead and does nothing.
    Dead,
    Shoot(ShotOutcome),
    Move(Step),
    /// Every step was blocked.
    Wait,
}

impl TurnAction {
    pub fn label(&self) -> &'static str {
        match self {
            TurnAction::Dead => "dead",
            TurnAction::Shoot(_) => "shoot",
            TurnAction::Move(_) => "move",
            TurnAction::Wait => "wait",
        }
    }
}

/// An action plus the line to show the player.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnResult {
    pub action: TurnAction,
    pub message: String,
}

impl TurnResult {
    pub fn new(action: TurnAction, message: String) -> Self {
        Self { action, message }
    }
}

/// Decision policy of one enemy: aggression plus opponent memory.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyPolicy {
    config: AiConfig,
    aggression: f64,
    last_known_opponent: Option<Position>,
}

impl EnemyPolicy {
    pub fn new(config: AiConfig) -> Self {
        let mut policy = Self {
            config,
            aggression: 0.0,
            last_known_opponent: None,
        };
        policy.set_aggression(config.aggression);
        policy
    }

    pub fn aggression(&self) -> f64 {
        self.aggression
    }

    /// Clamps into `[0, 1]`. NaN is ignored.
    pub fn set_aggression(&mut self, aggression: f64) {
        if !aggression.is_nan() {
            self.aggression = aggression.clamp(0.0, 1.0);
        }
    }

    pub fn last_known_opponent(&self) -> Option<Position> {
        self.last_known_opponent
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Plays one turn for `actor` against `opponent`.
    ///
    /// Never fails: a boxed-in enemy waits, a dead one reports
    /// [`TurnAction::Dead`].
    pub fn take_turn<R: RngOracle>(
        &mut self,
        actor: &mut dyn Combatant,
        opponent: &mut dyn Combatant,
        grid: &TerrainGrid,
        resolver: &CombatResolver,
        rng: &mut R,
    ) -> TurnResult {
        let mut ctx = TurnContext::new(
            actor,
            opponent,
            grid,
            resolver,
            rng,
            &self.config,
            self.aggression,
            &mut self.last_known_opponent,
        );

        decision_tree().tick(&mut ctx);

        let result = match ctx.take_result() {
            Some(result) => result,
            None => TurnResult::new(TurnAction::Wait, format!("{} waits...", ctx.actor.name())),
        };
        debug!(
            actor = ctx.actor.name(),
            action = result.action.label(),
            distance = ctx.distance,
            visible = ctx.visible,
            "enemy turn"
        );
        result
    }
}

impl Default for EnemyPolicy {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}
