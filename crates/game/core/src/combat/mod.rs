//! Shot resolution.
//!
//! The pure helpers in [`hit`], [`damage`] and [`path`] each cover one step
//! of the algorithm; [`CombatResolver::resolve`] sequences them and is the
//! only place that draws randomness or mutates a combatant.
//!
//! Draw order for one shot: accuracy roll, damage roll, critical roll. A shot
//! that falls short draws nothing.

pub mod damage;
pub mod hit;
pub mod path;
mod resolver;
pub mod result;

pub use damage::{DamageRoll, apply_damage, roll_damage};
pub use hit::{base_accuracy, effective_range, final_accuracy};
pub use path::{falls_short_terminus, miss_terminus, natural_stop};
pub use resolver::CombatResolver;
pub use result::{ShotKind, ShotOutcome};
