//! The two combatants and the capability set the resolver and the AI use.

use crate::combat::apply_damage;
use crate::geometry::Position;
use crate::modifiers::ModifierSet;

/// Current and maximum health. `alive == (hp > 0)` by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    hp: u32,
    max_hp: u32,
}

impl Vitals {
    pub const fn new(max_hp: u32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    pub const fn hp(&self) -> u32 {
        self.hp
    }

    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtracts `amount`, clamping at zero. Returns `true` if this hit killed.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.hp = apply_damage(self.hp, amount);
        was_alive && !self.is_alive()
    }

    /// Raises both current and maximum health.
    pub fn grant_max_hp(&mut self, amount: u32) {
        self.max_hp = self.max_hp.saturating_add(amount);
        self.hp = self.hp.saturating_add(amount);
    }
}

/// Capability set shared by the player and the enemy.
///
/// The resolver and the decision policy only ever see `dyn Combatant`.
pub trait Combatant {
    fn name(&self) -> &str;

    fn glyph(&self) -> char;

    fn position(&self) -> Position;

    fn set_position(&mut self, position: Position);

    fn vitals(&self) -> &Vitals;

    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Defensive and offensive bonus, if one was selected.
    fn modifiers(&self) -> Option<&ModifierSet> {
        None
    }

    fn hp(&self) -> u32 {
        self.vitals().hp()
    }

    fn max_hp(&self) -> u32 {
        self.vitals().max_hp()
    }

    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.vitals_mut().take_damage(amount)
    }
}

/// The player-controlled gunslinger.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    position: Position,
    vitals: Vitals,
    modifiers: Option<ModifierSet>,
}

impl Player {
    pub const NAME: &'static str = "Player";
    pub const GLYPH: char = '@';

    pub fn new(position: Position, max_hp: u32) -> Self {
        Self {
            position,
            vitals: Vitals::new(max_hp),
            modifiers: None,
        }
    }

    /// Selects the session bonus and applies its health grant.
    pub fn equip(&mut self, modifiers: ModifierSet) {
        modifiers.apply_to(self);
        self.modifiers = Some(modifiers);
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn glyph(&self) -> char {
        Self::GLYPH
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    fn modifiers(&self) -> Option<&ModifierSet> {
        self.modifiers.as_ref()
    }
}

/// The AI-driven bandit. Carries no weapon choice and no bonus.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    name: String,
    position: Position,
    vitals: Vitals,
}

impl Enemy {
    pub const NAME: &'static str = "Bandit";
    pub const GLYPH: char = 'B';

    pub fn new(position: Position, max_hp: u32) -> Self {
        Self::named(Self::NAME, position, max_hp)
    }

    pub fn named(name: impl Into<String>, position: Position, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            position,
            vitals: Vitals::new(max_hp),
        }
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn glyph(&self) -> char {
        Self::GLYPH
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
