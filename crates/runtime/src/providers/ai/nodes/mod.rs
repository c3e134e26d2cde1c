//! Duel-specific behavior tree nodes.
//!
//! - `conditions`: read the turn snapshot (the shoot roll also draws once)
//! - `actions`: record a [`TurnResult`](super::TurnResult) and mutate combatants

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
