//! Rules of a two-actor frontier duel, shared by the runtime and tools.
//!
//! `duel-core` owns the terrain model and its generator, weapons, modifier
//! sets, the combatant capability set and shot resolution. Everything here
//! is synchronous and in-memory; randomness always arrives through an
//! [`RngOracle`] supplied by the caller.
pub mod actor;
pub mod combat;
pub mod config;
pub mod error;
pub mod geometry;
pub mod modifiers;
pub mod rng;
pub mod terrain;
pub mod weapons;

pub use actor::{Combatant, Enemy, Player, Vitals};
pub use combat::{CombatResolver, ShotKind, ShotOutcome};
pub use config::{AiConfig, CombatRules, CountRange, GameConfig, GenerationConfig};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Position, Step};
pub use modifiers::{BONUSES, BonusDefinition, BonusId, BonusStats, ModifierError, ModifierSet};
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use terrain::{GridError, MapGenerator, SpawnError, TerrainGrid, TileFlags, TileKind};
pub use weapons::{ProfileError, WeaponId, WeaponProfile};
