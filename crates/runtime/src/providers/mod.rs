//! Decision providers for non-player combatants.

pub mod ai;

pub use ai::{EnemyPolicy, TurnAction, TurnResult};
