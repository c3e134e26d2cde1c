use tracing::debug;

use super::damage::roll_damage;
use super::hit::{base_accuracy, effective_range, final_accuracy};
use super::path::{falls_short_terminus, miss_terminus, natural_stop};
use super::result::{ShotKind, ShotOutcome};
use crate::actor::Combatant;
use crate::config::CombatRules;
use crate::modifiers::ModifierSet;
use crate::rng::RngOracle;
use crate::terrain::TerrainGrid;
use crate::weapons::WeaponProfile;

/// Resolves shot attempts between two combatants.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CombatResolver {
    rules: CombatRules,
}

impl CombatResolver {
    pub fn new(rules: CombatRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    /// Resolves one shot from `shooter` at `target`.
    ///
    /// Only the hit branch mutates `target`. The target's own modifier set,
    /// if any, scales the damage it takes.
    pub fn resolve<R>(
        &self,
        shooter: &dyn Combatant,
        target: &mut dyn Combatant,
        grid: &TerrainGrid,
        weapon: &WeaponProfile,
        shooter_modifiers: Option<&ModifierSet>,
        rng: &mut R,
    ) -> ShotOutcome
    where
        R: RngOracle + ?Sized,
    {
        let from = shooter.position();
        let to = target.position();
        let distance = from.euclidean_distance(to);
        let path = grid.trace(from, to);
        let (_, stop) = natural_stop(grid, &path);
        let range = effective_range(weapon, shooter_modifiers);

        let mut outcome = ShotOutcome {
            kind: ShotKind::Miss,
            path,
            natural_stop: stop,
            terminus: stop,
            damage: 0,
            message: String::new(),
            target_died: false,
            critical: false,
        };

        if distance > f64::from(range) {
            outcome.kind = ShotKind::FallsShort;
            outcome.terminus =
                falls_short_terminus(&outcome.path, range, self.rules.falls_short_ratio, stop);
            outcome.message = format!("{}'s {} shot falls short!", shooter.name(), weapon.name());
            debug!(distance, range, "shot falls short");
            return outcome;
        }

        let base = base_accuracy(distance, range, weapon.min_accuracy());
        let accuracy = final_accuracy(base, distance, weapon, shooter_modifiers, &self.rules);
        let roll = rng.next_f64();
        let connects = roll < accuracy;
        let occluded = grid.blocks_projectile(stop);

        match (connects, occluded) {
            (true, false) => {
                let dealt = roll_damage(weapon, shooter_modifiers, rng);
                let damage = match target.modifiers() {
                    Some(defence) => defence.modify_damage_taken(dealt.damage),
                    None => dealt.damage,
                };
                let died = target.take_damage(damage);

                let mut message = format!(
                    "{}'s {} hits {} for {} damage!",
                    shooter.name(),
                    weapon.name(),
                    target.name(),
                    damage
                );
                if dealt.critical {
                    message.push_str(" CRITICAL HIT!");
                }
                if died {
                    message.push_str(&format!(" {} is dead!", target.name()));
                }

                outcome.kind = ShotKind::Hit;
                outcome.terminus = to;
                outcome.damage = damage;
                outcome.target_died = died;
                outcome.critical = dealt.critical;
                outcome.message = message;
            }
            (true, true) => {
                outcome.kind = ShotKind::Cover;
                outcome.message =
                    format!("{}'s {} shot hits cover!", shooter.name(), weapon.name());
            }
            (false, _) => {
                outcome.terminus =
                    miss_terminus(grid, &outcome.path, stop, self.rules.miss_overshoot);
                outcome.message =
                    format!("{}'s {} misses {}!", shooter.name(), weapon.name(), target.name());
            }
        }

        debug!(
            shooter = shooter.name(),
            distance,
            accuracy,
            roll,
            kind = %outcome.kind,
            damage = outcome.damage,
            "shot resolved"
        );
        outcome
    }
}
