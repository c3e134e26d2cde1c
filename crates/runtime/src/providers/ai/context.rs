//! Blackboard for one enemy turn.

use duel_core::{AiConfig, CombatResolver, Combatant, Position, RngOracle, TerrainGrid};

use super::policy::TurnResult;

/// Everything the decision nodes may read or touch during one turn.
///
/// The context borrows both combatants mutably: the acting enemy moves, the
/// opponent may take damage. It lives only for the duration of a single
/// [`take_turn`](super::EnemyPolicy::take_turn) call.
pub struct TurnContext<'a> {
    pub actor: &'a mut dyn Combatant,
    pub opponent: &'a mut dyn Combatant,
    pub grid: &'a TerrainGrid,
    pub resolver: &'a CombatResolver,
    pub rng: &'a mut dyn RngOracle,
    pub config: &'a AiConfig,
    pub aggression: f64,

    /// Where the opponent was last seen. Written only when visible.
    pub last_known_opponent: &'a mut Option<Position>,

    /// Euclidean distance at the start of the turn.
    pub distance: f64,

    /// Line of sight at the start of the turn.
    pub visible: bool,

    result: Option<TurnResult>,
}

impl<'a> TurnContext<'a> {
    /// Snapshots distance and visibility and, for a living actor, refreshes
    /// the opponent memory.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        actor: &'a mut dyn Combatant,
        opponent: &'a mut dyn Combatant,
        grid: &'a TerrainGrid,
        resolver: &'a CombatResolver,
        rng: &'a mut dyn RngOracle,
        config: &'a AiConfig,
        aggression: f64,
        last_known_opponent: &'a mut Option<Position>,
    ) -> Self {
        let from = actor.position();
        let to = opponent.position();
        let distance = from.euclidean_distance(to);
        let visible = grid.has_line_of_sight(from, to);
        if visible && actor.is_alive() {
            *last_known_opponent = Some(to);
        }

        Self {
            actor,
            opponent,
            grid,
            resolver,
            rng,
            config,
            aggression,
            last_known_opponent,
            distance,
            visible,
            result: None,
        }
    }

    /// Where to head: the live position when visible, else the remembered
    /// one, else the live position anyway.
    pub fn movement_target(&self) -> Position {
        if self.visible {
            return self.opponent.position();
        }
        (*self.last_known_opponent).unwrap_or_else(|| self.opponent.position())
    }

    /// Whether terrain lets the actor step onto `destination`. The
    /// opponent's cell is not excluded.
    pub fn can_enter(&self, destination: Position) -> bool {
        !self.grid.blocks_movement(destination)
    }

    /// Records the outcome of the turn. Only one action node may succeed
    /// per evaluation.
    pub fn set_result(&mut self, result: TurnResult) {
        debug_assert!(
            self.result.is_none(),
            "multiple action nodes succeeded in one evaluation"
        );
        self.result = Some(result);
    }

    pub fn take_result(&mut self) -> Option<TurnResult> {
        self.result.take()
    }
}
