//! Weapon profiles.

use std::fmt;

use crate::error::{ErrorSeverity, GameError};

/// Canonical weapon archetypes a player can pick at session start.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumString, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponId {
    Pistol,
    Rifle,
    Shotgun,
}

impl WeaponId {
    pub fn profile(self) -> WeaponProfile {
        match self {
            WeaponId::Pistol => WeaponProfile::PISTOL,
            WeaponId::Rifle => WeaponProfile::RIFLE,
            WeaponId::Shotgun => WeaponProfile::SHOTGUN,
        }
    }
}

/// Malformed weapon data. Never defaulted: silently patched numbers would
/// corrupt combat balance.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("weapon {name:?} has zero range")]
    ZeroRange { name: String },

    #[error("weapon {name:?} minimum accuracy {value} is outside [0, 1]")]
    AccuracyOutOfRange { name: String, value: f64 },

    #[error("weapon {name:?} damage range {min}..={max} is inverted")]
    InvertedDamage { name: String, min: u32, max: u32 },
}

impl GameError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroRange { .. } => "WEAPON_ZERO_RANGE",
            Self::AccuracyOutOfRange { .. } => "WEAPON_ACCURACY_OUT_OF_RANGE",
            Self::InvertedDamage { .. } => "WEAPON_INVERTED_DAMAGE",
        }
    }
}

/// Immutable range/accuracy/damage trade-off of one weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeaponProfile {
    name: std::borrow::Cow<'static, str>,
    max_range: u32,
    min_accuracy: f64,
    damage_min: u32,
    damage_max: u32,
}

impl WeaponProfile {
    /// Short range, forgiving accuracy floor.
    pub const PISTOL: WeaponProfile = WeaponProfile::canonical("Pistol", 12, 0.4, 20, 35);
    /// Long range, high accuracy floor.
    pub const RIFLE: WeaponProfile = WeaponProfile::canonical("Rifle", 20, 0.6, 35, 50);
    /// Very short range, heaviest damage.
    pub const SHOTGUN: WeaponProfile = WeaponProfile::canonical("Shotgun", 8, 0.8, 40, 60);

    const fn canonical(
        name: &'static str,
        max_range: u32,
        min_accuracy: f64,
        damage_min: u32,
        damage_max: u32,
    ) -> Self {
        Self {
            name: std::borrow::Cow::Borrowed(name),
            max_range,
            min_accuracy,
            damage_min,
            damage_max,
        }
    }

    /// Validates and builds a custom profile.
    pub fn new(
        name: impl Into<String>,
        max_range: u32,
        min_accuracy: f64,
        damage_min: u32,
        damage_max: u32,
    ) -> Result<Self, ProfileError> {
        let name = name.into();
        if max_range == 0 {
            return Err(ProfileError::ZeroRange { name });
        }
        if !(0.0..=1.0).contains(&min_accuracy) {
            return Err(ProfileError::AccuracyOutOfRange {
                name,
                value: min_accuracy,
            });
        }
        if damage_min > damage_max {
            return Err(ProfileError::InvertedDamage {
                name,
                min: damage_min,
                max: damage_max,
            });
        }
        Ok(Self {
            name: std::borrow::Cow::Owned(name),
            max_range,
            min_accuracy,
            damage_min,
            damage_max,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_range(&self) -> u32 {
        self.max_range
    }

    pub fn min_accuracy(&self) -> f64 {
        self.min_accuracy
    }

    pub fn damage_min(&self) -> u32 {
        self.damage_min
    }

    pub fn damage_max(&self) -> u32 {
        self.damage_max
    }
}

impl Default for WeaponProfile {
    fn default() -> Self {
        Self::PISTOL
    }
}

impl fmt::Display for WeaponProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (range {}, accuracy floor {:.0}%, damage {}-{})",
            self.name,
            self.max_range,
            self.min_accuracy * 100.0,
            self.damage_min,
            self.damage_max
        )
    }
}
