//! Automated rounds over a [`Session`].

use std::fmt;

use anyhow::{Context, Result};
use duel_core::{BonusId, Combatant, GameConfig, GameError, RngOracle, WeaponProfile};
use duel_runtime::{PlayerAction, Session, Side};
use tracing::{debug, error, info};

use crate::{Autopilot, Command, SimulationBuilder};

/// How one round ended.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    /// `None` when the turn cap was reached first.
    pub winner: Option<Side>,
    pub turns: u32,
    pub player_hp: u32,
    pub enemy_hp: u32,
    /// Terrain and survivors after the last turn.
    pub final_map: String,
}

/// Totals over every round played.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub rounds: Vec<RoundOutcome>,
}

impl Summary {
    pub fn wins(&self, side: Side) -> usize {
        self.rounds
            .iter()
            .filter(|round| round.winner == Some(side))
            .count()
    }

    pub fn standoffs(&self) -> usize {
        self.rounds
            .iter()
            .filter(|round| round.winner.is_none())
            .count()
    }

    pub fn average_turns(&self) -> f64 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        let total: u32 = self.rounds.iter().map(|round| round.turns).sum();
        f64::from(total) / self.rounds.len() as f64
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rounds:        {}", self.rounds.len())?;
        writeln!(f, "player wins:   {}", self.wins(Side::Player))?;
        writeln!(f, "bandit wins:   {}", self.wins(Side::Enemy))?;
        writeln!(f, "standoffs:     {}", self.standoffs())?;
        write!(f, "average turns: {:.1}", self.average_turns())
    }
}

/// Plays autopiloted duels with a fixed loadout.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub(crate) config: GameConfig,
    pub(crate) bonus: BonusId,
    pub(crate) weapon: WeaponProfile,
    pub(crate) max_turns: u32,
}

impl Simulation {
    pub const DEFAULT_MAX_TURNS: u32 = 500;

    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn weapon(&self) -> &WeaponProfile {
        &self.weapon
    }

    /// Plays `rounds` rounds on one session, restarting between them.
    pub fn run<R: RngOracle>(&self, rng: R, rounds: u32) -> Result<Summary> {
        let mut session = Session::new(self.config.clone(), rng)
            .inspect_err(|err| {
                error!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "session setup failed"
                );
            })
            .context("failed to start a session")?;
        let mut summary = Summary::default();

        for round in 0..rounds {
            if round > 0 {
                session.restart().context("failed to restart the session")?;
            }
            let outcome = self.play_round(&mut session)?;
            info!(
                round = round + 1,
                winner = ?outcome.winner,
                turns = outcome.turns,
                "round finished"
            );
            summary.rounds.push(outcome);
        }

        Ok(summary)
    }

    fn play_round<R: RngOracle>(&self, session: &mut Session<R>) -> Result<RoundOutcome> {
        session.select_bonus(self.bonus)?;
        session.equip_weapon(self.weapon.clone())?;

        let autopilot = Autopilot;
        let mut winner = None;
        while session.turn() < self.max_turns {
            let command = autopilot.decide(
                session.grid(),
                session.player(),
                session.enemy(),
                session.weapon(),
            );
            let mut report = match command {
                Command::Shoot => session.player_shoot()?,
                Command::Move(step) => session.player_move(step)?,
            };
            if let PlayerAction::Blocked(_) = report.player {
                report = session.player_shoot()?;
            }

            for line in report.messages() {
                debug!(turn = session.turn(), "{line}");
            }
            if report.winner.is_some() {
                winner = report.winner;
                break;
            }
        }

        Ok(RoundOutcome {
            winner,
            turns: session.turn(),
            player_hp: session.player().hp(),
            enemy_hp: session.enemy().hp(),
            final_map: session.render(),
        })
    }
}

#[cfg(test)]
mod tests {
    use duel_core::{CountRange, GenerationConfig, PcgRng, WeaponId};

    use super::*;

    fn outcome(winner: Option<Side>, turns: u32) -> RoundOutcome {
        RoundOutcome {
            winner,
            turns,
            player_hp: 0,
            enemy_hp: 0,
            final_map: String::new(),
        }
    }

    #[test]
    fn summary_counts_each_result() {
        let summary = Summary {
            rounds: vec![
                outcome(Some(Side::Player), 10),
                outcome(Some(Side::Enemy), 4),
                outcome(None, 30),
                outcome(Some(Side::Player), 8),
            ],
        };
        assert_eq!(summary.wins(Side::Player), 2);
        assert_eq!(summary.wins(Side::Enemy), 1);
        assert_eq!(summary.standoffs(), 1);
        assert_eq!(summary.average_turns(), 13.0);
        assert!(summary.to_string().contains("standoffs:     1"));
    }

    #[test]
    fn builder_requires_a_loadout() {
        assert!(Simulation::builder().bonus(BonusId::Tough).build().is_err());
        assert!(
            Simulation::builder()
                .weapon(WeaponId::Rifle.profile())
                .build()
                .is_err()
        );
        assert!(
            Simulation::builder()
                .bonus(BonusId::Tough)
                .weapon(WeaponId::Rifle.profile())
                .max_turns(0)
                .build()
                .is_err()
        );
    }

    #[test]
    fn unhostable_terrain_fails_the_run() {
        let none = CountRange::new(0, 0);
        let config = GameConfig {
            map_width: 3,
            map_height: 3,
            generation: GenerationConfig {
                water_features: none,
                tree_clusters: none,
                rock_formations: none,
                cactus_patches: none,
                building_ruins: none,
                wall_clusters: none,
                ..GenerationConfig::default()
            },
            ..GameConfig::default()
        };
        let simulation = Simulation::builder()
            .config(config)
            .bonus(BonusId::Tough)
            .weapon(WeaponId::Pistol.profile())
            .build()
            .unwrap();

        let err = simulation.run(PcgRng::seeded(2), 1).unwrap_err();
        assert!(format!("{err:#}").contains("failed to start a session"));
    }

    #[test]
    fn turn_cap_bounds_every_round() {
        let simulation = Simulation::builder()
            .bonus(BonusId::EagleEye)
            .weapon(WeaponId::Pistol.profile())
            .max_turns(3)
            .build()
            .unwrap();
        let summary = simulation.run(PcgRng::seeded(17), 2).unwrap();

        assert_eq!(summary.rounds.len(), 2);
        for round in &summary.rounds {
            assert!(round.turns <= 3);
            if round.winner.is_none() {
                assert!(round.player_hp > 0 && round.enemy_hp > 0);
            }
        }
    }
}
