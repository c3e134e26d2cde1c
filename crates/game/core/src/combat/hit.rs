//! Range and accuracy calculations.

use crate::config::CombatRules;
use crate::modifiers::ModifierSet;
use crate::weapons::WeaponProfile;

/// Weapon range after the shooter's range multiplier, never below 1.
pub fn effective_range(weapon: &WeaponProfile, modifiers: Option<&ModifierSet>) -> u32 {
    match modifiers {
        Some(modifiers) => modifiers.modify_range(weapon.max_range()),
        None => weapon.max_range(),
    }
}

/// Linear falloff from 1.0 at distance 0 to `min_accuracy` at
/// `effective_range`.
///
/// # Formula
///
/// ```text
/// accuracy = max(min_accuracy, 1 - distance / effective_range * (1 - min_accuracy))
/// ```
pub fn base_accuracy(distance: f64, effective_range: u32, min_accuracy: f64) -> f64 {
    let range = f64::from(effective_range.max(1));
    let falloff = distance / range * (1.0 - min_accuracy);
    (1.0 - falloff).max(min_accuracy)
}

/// Applies the shooter's accuracy modifiers and clamps to the rules' window.
///
/// The long-range penalty only applies beyond `weapon`'s native range, i.e.
/// in the band a range multiplier added.
pub fn final_accuracy(
    base: f64,
    distance: f64,
    weapon: &WeaponProfile,
    modifiers: Option<&ModifierSet>,
    rules: &CombatRules,
) -> f64 {
    let modified = match modifiers {
        Some(modifiers) => modifiers.modify_accuracy(base, distance, weapon.max_range()),
        None => base,
    };
    modified.clamp(rules.min_hit_chance, rules.max_hit_chance)
}
