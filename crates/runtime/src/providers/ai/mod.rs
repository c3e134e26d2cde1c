//! Behavior-tree driven enemy AI.
//!
//! One call to [`EnemyPolicy::take_turn`] evaluates this tree against a
//! fresh [`TurnContext`]:
//!
//! ```text
//! Selector
//!  ├─ Sequence [ IsDefeated, ReportDefeated ]
//!  ├─ Sequence [ OpponentInShootingRange, OpponentVisible, RollToShoot, ShootOpponent ]
//!  ├─ AdvanceOnOpponent
//!  └─ HoldPosition
//! ```
//!
//! Distance and line of sight are computed once when the context is built,
//! so every node sees the same snapshot. The only state carried between
//! turns is the policy's aggression and its memory of where the opponent
//! was last seen.

pub mod context;
pub mod nodes;
mod policy;
mod tree;

pub use context::TurnContext;
pub use policy::{EnemyPolicy, TurnAction, TurnResult};
pub use tree::decision_tree;
