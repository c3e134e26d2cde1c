use behavior_tree::Node;
use behavior_tree::builder::{node, selector, sequence};

use super::TurnContext;
use super::nodes::{
    AdvanceOnOpponent, HoldPosition, IsDefeated, OpponentInShootingRange, OpponentVisible,
    ReportDefeated, RollToShoot, ShootOpponent,
};

/// Builds the enemy's decision tree for one turn.
///
/// The final [`HoldPosition`] always succeeds, so every evaluation records
/// exactly one result.
pub fn decision_tree<'a>() -> Node<'a, TurnContext<'a>> {
    selector(vec![
        sequence(vec![node(IsDefeated), node(ReportDefeated)]),
        sequence(vec![
            node(OpponentInShootingRange),
            node(OpponentVisible),
            node(RollToShoot),
            node(ShootOpponent),
        ]),
        node(AdvanceOnOpponent),
        node(HoldPosition),
    ])
}
