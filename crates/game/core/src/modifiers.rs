//! Modifier sets: the one-per-session bonus a combatant picks before a duel.
//!
//! Every stat is optional. An absent stat is a no-op (an absent range
//! multiplier behaves as `x1`, not as `x0`), so callers go through the
//! `modify_*` helpers instead of unwrapping getters themselves.

use std::str::FromStr;

use crate::actor::Combatant;
use crate::error::{ErrorSeverity, GameError};
use crate::rng::RngOracle;

/// Identifier of a canonical bonus definition.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BonusId {
    Tough,
    Longshot,
    Quickdraw,
    EagleEye,
    Gunslinger,
    Desperado,
}

impl BonusId {
    pub fn definition(self) -> &'static BonusDefinition {
        match self {
            BonusId::Tough => &TOUGH,
            BonusId::Longshot => &LONGSHOT,
            BonusId::Quickdraw => &QUICKDRAW,
            BonusId::EagleEye => &EAGLE_EYE,
            BonusId::Gunslinger => &GUNSLINGER,
            BonusId::Desperado => &DESPERADO,
        }
    }
}

impl FromStr for BonusId {
    type Err = ModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BONUSES
            .iter()
            .map(|definition| definition.id)
            .find(|id| <&'static str>::from(*id) == s)
            .ok_or_else(|| ModifierError::UnknownBonus(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ModifierError {
    #[error("unknown bonus {0:?}")]
    UnknownBonus(String),

    #[error("invalid {stat}: {value}")]
    InvalidStat { stat: &'static str, value: f64 },
}

impl GameError for ModifierError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBonus(_) => "MODIFIER_UNKNOWN_BONUS",
            Self::InvalidStat { .. } => "MODIFIER_INVALID_STAT",
        }
    }
}

/// Raw optional stats of a bonus. Validated into a [`ModifierSet`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BonusStats {
    pub bonus_health: Option<u32>,
    pub range_multiplier: Option<f64>,
    pub accuracy_bonus: Option<f64>,
    pub long_range_accuracy_penalty: Option<f64>,
    pub damage_bonus: Option<u32>,
    pub damage_dealt_multiplier: Option<f64>,
    pub damage_taken_multiplier: Option<f64>,
    pub critical_chance: Option<f64>,
}

impl BonusStats {
    const NONE: BonusStats = BonusStats {
        bonus_health: None,
        range_multiplier: None,
        accuracy_bonus: None,
        long_range_accuracy_penalty: None,
        damage_bonus: None,
        damage_dealt_multiplier: None,
        damage_taken_multiplier: None,
        critical_chance: None,
    };
}

/// Display data and stats of one canonical bonus.
#[derive(Debug, PartialEq)]
pub struct BonusDefinition {
    pub id: BonusId,
    pub name: &'static str,
    pub description: &'static str,
    pub effects: &'static [&'static str],
    pub stats: BonusStats,
}

pub const TOUGH: BonusDefinition = BonusDefinition {
    id: BonusId::Tough,
    name: "TOUGH",
    description: "Years of hard living have made you resilient",
    effects: &["+20 Health Points", "Better survival in prolonged fights"],
    stats: BonusStats {
        bonus_health: Some(20),
        ..BonusStats::NONE
    },
};

pub const LONGSHOT: BonusDefinition = BonusDefinition {
    id: BonusId::Longshot,
    name: "LONG SHOT",
    description: "You can make shots others wouldn't dare attempt",
    effects: &[
        "+50% shooting range",
        "-30% accuracy at long range",
        "Risk vs reward gameplay",
    ],
    stats: BonusStats {
        range_multiplier: Some(1.5),
        long_range_accuracy_penalty: Some(0.3),
        ..BonusStats::NONE
    },
};

pub const QUICKDRAW: BonusDefinition = BonusDefinition {
    id: BonusId::Quickdraw,
    name: "QUICKDRAW",
    description: "Lightning fast on the draw, your shots hit harder",
    effects: &["+10 damage to all shots", "Devastating opening moves"],
    stats: BonusStats {
        damage_bonus: Some(10),
        ..BonusStats::NONE
    },
};

pub const EAGLE_EYE: BonusDefinition = BonusDefinition {
    id: BonusId::EagleEye,
    name: "EAGLE EYE",
    description: "Your aim is legendary across the frontier",
    effects: &["+20% accuracy at all ranges", "More reliable shots"],
    stats: BonusStats {
        accuracy_bonus: Some(0.2),
        ..BonusStats::NONE
    },
};

pub const GUNSLINGER: BonusDefinition = BonusDefinition {
    id: BonusId::Gunslinger,
    name: "GUNSLINGER",
    description: "Sometimes luck favors the bold",
    effects: &[
        "15% chance for critical hits",
        "Critical hits deal double damage",
        "High risk, high reward",
    ],
    stats: BonusStats {
        critical_chance: Some(0.15),
        ..BonusStats::NONE
    },
};

pub const DESPERADO: BonusDefinition = BonusDefinition {
    id: BonusId::Desperado,
    name: "DESPERADO",
    description: "Live fast, die hard - nothing left to lose",
    effects: &["+40% damage dealt", "+50% damage taken", "Glass cannon playstyle"],
    stats: BonusStats {
        damage_dealt_multiplier: Some(1.4),
        damage_taken_multiplier: Some(1.5),
        ..BonusStats::NONE
    },
};

/// Selection-screen order.
pub const BONUSES: [&BonusDefinition; 6] =
    [&TOUGH, &LONGSHOT, &QUICKDRAW, &EAGLE_EYE, &GUNSLINGER, &DESPERADO];

/// Validated, immutable bundle of optional combat adjustments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModifierSet {
    stats: BonusStats,
}

impl ModifierSet {
    pub fn from_bonus(id: BonusId) -> Self {
        Self {
            stats: id.definition().stats,
        }
    }

    /// Validates custom stats: multipliers must be positive, accuracies and
    /// chances must lie in `[0, 1]`.
    pub fn from_stats(stats: BonusStats) -> Result<Self, ModifierError> {
        check_multiplier("range_multiplier", stats.range_multiplier)?;
        check_multiplier("damage_dealt_multiplier", stats.damage_dealt_multiplier)?;
        check_multiplier("damage_taken_multiplier", stats.damage_taken_multiplier)?;
        check_unit("accuracy_bonus", stats.accuracy_bonus)?;
        check_unit("long_range_accuracy_penalty", stats.long_range_accuracy_penalty)?;
        check_unit("critical_chance", stats.critical_chance)?;
        Ok(Self { stats })
    }

    pub fn bonus_health(&self) -> Option<u32> {
        self.stats.bonus_health
    }

    pub fn range_multiplier(&self) -> Option<f64> {
        self.stats.range_multiplier
    }

    pub fn accuracy_bonus(&self) -> Option<f64> {
        self.stats.accuracy_bonus
    }

    pub fn long_range_accuracy_penalty(&self) -> Option<f64> {
        self.stats.long_range_accuracy_penalty
    }

    pub fn damage_bonus(&self) -> Option<u32> {
        self.stats.damage_bonus
    }

    pub fn damage_dealt_multiplier(&self) -> Option<f64> {
        self.stats.damage_dealt_multiplier
    }

    pub fn damage_taken_multiplier(&self) -> Option<f64> {
        self.stats.damage_taken_multiplier
    }

    pub fn critical_chance(&self) -> Option<f64> {
        self.stats.critical_chance
    }

    /// `floor(base * multiplier)`, never below one tile.
    pub fn modify_range(&self, base: u32) -> u32 {
        match self.stats.range_multiplier {
            Some(multiplier) => ((f64::from(base) * multiplier).floor() as u32).max(1),
            None => base,
        }
    }

    /// Adds the flat bonus; the penalty applies only beyond `base_range`.
    /// The result is not clamped.
    pub fn modify_accuracy(&self, accuracy: f64, distance: f64, base_range: u32) -> f64 {
        let mut accuracy = accuracy + self.stats.accuracy_bonus.unwrap_or(0.0);
        if let Some(penalty) = self.stats.long_range_accuracy_penalty
            && distance > f64::from(base_range)
        {
            accuracy -= penalty;
        }
        accuracy
    }

    /// Flat bonus first, then the dealt multiplier.
    pub fn modify_damage(&self, damage: u32) -> u32 {
        let damage = damage.saturating_add(self.stats.damage_bonus.unwrap_or(0));
        match self.stats.damage_dealt_multiplier {
            Some(multiplier) => (f64::from(damage) * multiplier).floor() as u32,
            None => damage,
        }
    }

    pub fn modify_damage_taken(&self, damage: u32) -> u32 {
        match self.stats.damage_taken_multiplier {
            Some(multiplier) => (f64::from(damage) * multiplier).floor() as u32,
            None => damage,
        }
    }

    /// Rolls for a critical hit. Consumes no draw without a critical chance.
    pub fn roll_critical<R: RngOracle + ?Sized>(&self, rng: &mut R) -> bool {
        match self.stats.critical_chance {
            Some(chance) => rng.next_f64() < chance,
            None => false,
        }
    }

    /// Grants bonus health to both current and maximum health.
    pub fn apply_to(&self, combatant: &mut dyn Combatant) {
        if let Some(bonus) = self.stats.bonus_health {
            combatant.vitals_mut().grant_max_hp(bonus);
        }
    }
}

fn check_multiplier(stat: &'static str, value: Option<f64>) -> Result<(), ModifierError> {
    match value {
        Some(value) if !(value.is_finite() && value > 0.0) => {
            Err(ModifierError::InvalidStat { stat, value })
        }
        _ => Ok(()),
    }
}

fn check_unit(stat: &'static str, value: Option<f64>) -> Result<(), ModifierError> {
    match value {
        Some(value) if !(0.0..=1.0).contains(&value) => {
            Err(ModifierError::InvalidStat { stat, value })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::actor::{Combatant, Player};
    use crate::geometry::Position;
    use crate::rng::ScriptedRng;

    #[test]
    fn every_id_round_trips_through_its_snake_case_name() {
        for id in BonusId::iter() {
            assert_eq!(id.to_string().parse::<BonusId>().unwrap(), id);
            assert_eq!(id.definition().id, id);
        }
        assert_eq!("eagle_eye".parse::<BonusId>().unwrap(), BonusId::EagleEye);
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            "lucky".parse::<BonusId>(),
            Err(ModifierError::UnknownBonus("lucky".into()))
        );
    }

    #[test]
    fn absent_stats_are_no_ops() {
        let set = ModifierSet::from_bonus(BonusId::Tough);
        assert_eq!(set.range_multiplier(), None);
        assert_eq!(set.modify_range(12), 12);
        assert_eq!(set.modify_accuracy(0.5, 30.0, 12), 0.5);
        assert_eq!(set.modify_damage(27), 27);
        assert_eq!(set.modify_damage_taken(27), 27);

        let mut rng = ScriptedRng::new();
        assert!(!set.roll_critical(&mut rng));
        assert_eq!(rng.total_draws(), 0);
    }

    #[test]
    fn longshot_extends_range_and_penalises_only_beyond_the_native_envelope() {
        let set = ModifierSet::from_bonus(BonusId::Longshot);
        assert_eq!(set.modify_range(12), 18);
        assert_eq!(set.modify_accuracy(0.6, 12.0, 12), 0.6);
        assert!((set.modify_accuracy(0.6, 15.0, 12) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn desperado_scales_both_directions() {
        let set = ModifierSet::from_bonus(BonusId::Desperado);
        assert_eq!(set.modify_damage(25), 35);
        assert_eq!(set.modify_damage_taken(25), 37);
    }

    #[test]
    fn quickdraw_adds_before_multiplying() {
        let stats = BonusStats {
            damage_bonus: Some(10),
            damage_dealt_multiplier: Some(1.5),
            ..BonusStats::default()
        };
        let set = ModifierSet::from_stats(stats).unwrap();
        assert_eq!(set.modify_damage(21), 46);
    }

    #[test]
    fn gunslinger_crit_uses_one_draw() {
        let set = ModifierSet::from_bonus(BonusId::Gunslinger);
        let mut rng = ScriptedRng::new().with_floats([0.1, 0.5]);
        assert!(set.roll_critical(&mut rng));
        assert!(!set.roll_critical(&mut rng));
        assert_eq!(rng.float_draws(), 2);
    }

    #[test]
    fn tough_raises_current_and_max_health_once() {
        let mut player = Player::new(Position::new(3, 3), 100);
        ModifierSet::from_bonus(BonusId::Tough).apply_to(&mut player);
        assert_eq!(player.hp(), 120);
        assert_eq!(player.max_hp(), 120);
    }

    #[test]
    fn malformed_stats_are_rejected() {
        let zero_range = BonusStats {
            range_multiplier: Some(0.0),
            ..BonusStats::default()
        };
        assert!(matches!(
            ModifierSet::from_stats(zero_range),
            Err(ModifierError::InvalidStat {
                stat: "range_multiplier",
                ..
            })
        ));

        let impossible_crit = BonusStats {
            critical_chance: Some(1.5),
            ..BonusStats::default()
        };
        assert!(ModifierSet::from_stats(impossible_crit).is_err());
    }
}
