//! Upgrade cards and their effects.
//!
//! Every effect field is optional in authored data. Absent numeric fields read
//! as zero and absent flags as false, so a card with no `effects` block is a
//! pure points cost.

use super::weapon::Weapon;
use crate::keyword::KeywordToken;
use crate::vocab::SlotKind;

/// A user-authored upgrade card, stored independently of units.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeCard {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub points_cost: i32,
    /// Slot type the card is printed for. Informational; composition ignores it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: Option<SlotKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: UpgradeEffects,
}

impl UpgradeCard {
    pub fn new(id: impl Into<String>, name: impl Into<String>, points_cost: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points_cost,
            slot: None,
            effects: UpgradeEffects::default(),
        }
    }

    /// Sets the printed slot type (builder pattern).
    pub fn for_slot(mut self, slot: SlotKind) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Sets the effects block (builder pattern).
    pub fn with_effects(mut self, effects: UpgradeEffects) -> Self {
        self.effects = effects;
        self
    }
}

/// What equipping a card does to the unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UpgradeEffects {
    /// Models added (or removed) by the card.
    pub model_count_change: i32,
    pub add_weapons: Vec<Weapon>,
    pub add_keywords: Vec<KeywordToken>,
    /// Ability ids granted by the card.
    pub add_abilities: Vec<String>,
    pub stat_modifiers: StatModifiers,
}

impl UpgradeEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_count_change(mut self, change: i32) -> Self {
        self.model_count_change = change;
        self
    }

    pub fn add_weapon(mut self, weapon: Weapon) -> Self {
        self.add_weapons.push(weapon);
        self
    }

    pub fn add_keyword(mut self, keyword: impl Into<KeywordToken>) -> Self {
        self.add_keywords.push(keyword.into());
        self
    }

    pub fn add_ability(mut self, ability_id: impl Into<String>) -> Self {
        self.add_abilities.push(ability_id.into());
        self
    }

    pub fn stat_modifiers(mut self, modifiers: StatModifiers) -> Self {
        self.stat_modifiers = modifiers;
        self
    }
}

/// Sparse stat deltas carried by an upgrade card.
///
/// `courage` and `resilience` are both accepted for vehicles; see
/// [`crate::compose::resolve`] for how each is routed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatModifiers {
    pub wounds: Option<i32>,
    pub courage: Option<i32>,
    pub resilience: Option<i32>,
    pub speed: Option<i32>,
    pub surge_attack: Option<bool>,
    pub surge_defense: Option<bool>,
}

impl StatModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wounds(mut self, delta: i32) -> Self {
        self.wounds = Some(delta);
        self
    }

    pub fn courage(mut self, delta: i32) -> Self {
        self.courage = Some(delta);
        self
    }

    pub fn resilience(mut self, delta: i32) -> Self {
        self.resilience = Some(delta);
        self
    }

    pub fn speed(mut self, delta: i32) -> Self {
        self.speed = Some(delta);
        self
    }

    pub fn surge_attack(mut self, granted: bool) -> Self {
        self.surge_attack = Some(granted);
        self
    }

    pub fn surge_defense(mut self, granted: bool) -> Self {
        self.surge_defense = Some(granted);
        self
    }
}
