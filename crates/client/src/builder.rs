//! Builder for [`Simulation`].

use anyhow::{Context, Result, ensure};
use duel_core::{BonusId, GameConfig, WeaponProfile};

use crate::Simulation;

/// Collects a simulation's loadout and limits.
///
/// The bonus and the weapon are required; the config defaults to
/// [`GameConfig::default`] and the turn cap to
/// [`Simulation::DEFAULT_MAX_TURNS`].
#[derive(Default)]
pub struct SimulationBuilder {
    config: Option<GameConfig>,
    bonus: Option<BonusId>,
    weapon: Option<WeaponProfile>,
    max_turns: Option<u32>,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn bonus(mut self, bonus: BonusId) -> Self {
        self.bonus = Some(bonus);
        self
    }

    pub fn weapon(mut self, weapon: WeaponProfile) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Player turns after which a round ends in a standoff.
    pub fn max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    pub fn build(self) -> Result<Simulation> {
        let bonus = self
            .bonus
            .context("a bonus is required. Use .bonus() to set it.")?;
        let weapon = self
            .weapon
            .context("a weapon is required. Use .weapon() to set it.")?;
        let max_turns = self.max_turns.unwrap_or(Simulation::DEFAULT_MAX_TURNS);
        ensure!(max_turns > 0, "max_turns must be positive");

        Ok(Simulation {
            config: self.config.unwrap_or_default(),
            bonus,
            weapon,
            max_turns,
        })
    }
}
