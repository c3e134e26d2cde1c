//! Damage rolls and health reduction.

use crate::modifiers::ModifierSet;
use crate::rng::RngOracle;
use crate::weapons::WeaponProfile;

/// Shooter-side damage of one connecting shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRoll {
    pub damage: u32,
    pub critical: bool,
}

/// Rolls weapon damage, then the critical check, then applies the shooter's
/// flat bonus and dealt multiplier.
///
/// A critical doubles the base roll before any modifier.
pub fn roll_damage<R>(
    weapon: &WeaponProfile,
    modifiers: Option<&ModifierSet>,
    rng: &mut R,
) -> DamageRoll
where
    R: RngOracle + ?Sized,
{
    let min = i32::try_from(weapon.damage_min()).unwrap_or(i32::MAX);
    let max = i32::try_from(weapon.damage_max()).unwrap_or(i32::MAX);
    let mut damage = rng.range(min, max).max(0) as u32;

    let critical = modifiers.is_some_and(|modifiers| modifiers.roll_critical(rng));
    if critical {
        damage = damage.saturating_mul(2);
    }

    if let Some(modifiers) = modifiers {
        damage = modifiers.modify_damage(damage);
    }
    DamageRoll { damage, critical }
}

/// HP after taking `damage`, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
