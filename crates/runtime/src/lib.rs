//! Runtime orchestration for a frontier duel.
//!
//! - [`providers`] hosts the behavior-tree enemy policy
//! - [`session`] sequences bonus and weapon selection, turns and game over
//! - [`seed`] turns an optional seed into the session's random source
pub mod error;
pub mod providers;
pub mod seed;
pub mod session;

pub use error::{Result, SessionError};
pub use providers::{EnemyPolicy, TurnAction, TurnResult};
pub use seed::{entropy_seed, seeded_rng};
pub use session::{Phase, PlayerAction, Session, Side, TurnReport};
