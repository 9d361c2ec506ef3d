//! Authored unit stat blocks.

use super::stat::StatKind;
use super::weapon::Weapon;
use crate::keyword::KeywordToken;
use crate::validate::ValidationError;
use crate::vocab::{DefenseDice, Faction, SlotKind, UnitType};

/// A user-authored combatant stat block.
///
/// # Model count
///
/// `current_model_count` mirrors the derived value
/// `min_model_count + Σ model_count_change` for storage. Composition always
/// recomputes it and never reads the stored value; use
/// [`crate::compose::sync_model_count`] after editing slots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    pub unit_type: UnitType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub points: i32,
    /// Vehicles use resilience instead of courage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_vehicle: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wounds: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub courage: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resilience: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_model_count: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_model_count: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_dice: DefenseDice,
    #[cfg_attr(feature = "serde", serde(default))]
    pub surge_attack: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub surge_defense: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<KeywordToken>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapons: Vec<Weapon>,
    /// Ability ids, in authored order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub upgrade_slots: Vec<UpgradeSlot>,
}

impl Unit {
    /// Creates a single-model unit with zeroed stats and no slots.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        faction: Faction,
        unit_type: UnitType,
    ) -> Self {
        let is_vehicle = unit_type.is_vehicle();
        Self {
            id: id.into(),
            name: name.into(),
            faction,
            unit_type,
            points: 0,
            is_vehicle,
            wounds: 0,
            courage: None,
            resilience: None,
            speed: 0,
            min_model_count: 1,
            current_model_count: None,
            defense_dice: DefenseDice::default(),
            surge_attack: false,
            surge_defense: false,
            keywords: Vec::new(),
            weapons: Vec::new(),
            abilities: Vec::new(),
            upgrade_slots: Vec::new(),
        }
    }

    /// The morale stat this unit uses: resilience for vehicles, courage otherwise.
    pub const fn morale_stat(&self) -> StatKind {
        if self.is_vehicle {
            StatKind::Resilience
        } else {
            StatKind::Courage
        }
    }

    /// Base value of the morale stat; absent reads as zero.
    pub fn morale(&self) -> i32 {
        let value = if self.is_vehicle {
            self.resilience
        } else {
            self.courage
        };
        value.unwrap_or_default()
    }

    /// Equipped upgrade ids in walk order: slots in order, then ids within a slot.
    pub fn equipped_ids(&self) -> impl Iterator<Item = (SlotKind, &str)> + '_ {
        self.upgrade_slots.iter().flat_map(|slot| {
            slot.equipped
                .iter()
                .map(move |id| (slot.kind, id.as_str()))
        })
    }

    pub fn is_equipped(&self, upgrade_id: &str) -> bool {
        self.equipped_ids().any(|(_, id)| id == upgrade_id)
    }

    /// Equips `upgrade_id` in the first slot of `kind` with room.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EquippedInMultipleSlots`] if the id is already equipped anywhere on the unit
    /// - [`ValidationError::NoFreeSlot`] if no slot of that kind has room
    pub fn equip(
        &mut self,
        kind: SlotKind,
        upgrade_id: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let upgrade_id = upgrade_id.into();
        if self.is_equipped(&upgrade_id) {
            return Err(ValidationError::EquippedInMultipleSlots { upgrade_id });
        }

        match self
            .upgrade_slots
            .iter_mut()
            .find(|slot| slot.kind == kind && !slot.is_full())
        {
            Some(slot) => {
                slot.equipped.push(upgrade_id);
                Ok(())
            }
            None => Err(ValidationError::NoFreeSlot {
                slot: kind,
                upgrade_id,
            }),
        }
    }

    /// Removes `upgrade_id` from every slot. Returns true if anything was removed.
    pub fn unequip(&mut self, upgrade_id: &str) -> bool {
        let mut removed = false;
        for slot in &mut self.upgrade_slots {
            let before = slot.equipped.len();
            slot.equipped.retain(|id| id != upgrade_id);
            removed |= slot.equipped.len() != before;
        }
        removed
    }

    /// Adds a slot (builder pattern).
    pub fn with_slot(mut self, slot: UpgradeSlot) -> Self {
        self.upgrade_slots.push(slot);
        self
    }

    /// Adds an intrinsic weapon (builder pattern).
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapons.push(weapon);
        self
    }

    /// Adds an intrinsic keyword (builder pattern).
    pub fn with_keyword(mut self, keyword: impl Into<KeywordToken>) -> Self {
        self.keywords.push(keyword.into());
        self
    }
}

/// A typed container limiting which and how many upgrades a unit may carry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeSlot {
    pub kind: SlotKind,
    #[cfg_attr(feature = "serde", serde(default = "UpgradeSlot::default_max_count"))]
    pub max_count: u32,
    /// Equipped upgrade ids, in equip order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: Vec<String>,
}

impl UpgradeSlot {
    pub fn new(kind: SlotKind, max_count: u32) -> Self {
        Self {
            kind,
            max_count,
            equipped: Vec::new(),
        }
    }

    #[cfg(feature = "serde")]
    fn default_max_count() -> u32 {
        1
    }

    /// Adds an equipped id without capacity checks (builder pattern).
    pub fn with_equipped(mut self, upgrade_id: impl Into<String>) -> Self {
        self.equipped.push(upgrade_id.into());
        self
    }

    pub fn is_full(&self) -> bool {
        self.equipped.len() >= self.max_count as usize
    }
}
