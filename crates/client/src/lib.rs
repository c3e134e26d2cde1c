//! Headless duel simulation.
//!
//! ```text
//! Simulation (rounds, turn cap, loadout)
//!   ├─→ Session (phases, turns, enemy policy)
//!   └─→ Autopilot (player-side decisions)
//! ```
//!
//! The `duel-sim` binary is a thin shell around [`Simulation`]: it parses
//! arguments, loads content and prints the results.

mod autopilot;
mod builder;
pub mod config;
mod simulation;

pub use autopilot::{Autopilot, Command};
pub use builder::SimulationBuilder;
pub use config::SimEnv;
pub use simulation::{RoundOutcome, Simulation, Summary};
