//! Resolution of equipped upgrade ids against the upgrade catalog.

use std::collections::HashSet;

use crate::model::{Source, Unit, UpgradeCard};
use crate::oracle::UpgradeOracle;
use crate::vocab::SlotKind;

/// An upgrade card resolved from a unit's slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquippedUpgrade<'a> {
    /// Kind of the slot the card sits in.
    pub slot: SlotKind,
    pub card: &'a UpgradeCard,
}

impl<'a> EquippedUpgrade<'a> {
    pub const fn new(slot: SlotKind, card: &'a UpgradeCard) -> Self {
        Self { slot, card }
    }

    pub fn source(&self) -> Source {
        Source::upgrade(self.card.id.as_str(), self.card.name.as_str())
    }
}

/// Resolves the unit's equipped ids in walk order (slots, then ids within a slot).
///
/// Ids missing from the catalog are skipped. An id equipped more than once on
/// the same unit is resolved only at its first position.
pub fn resolve_equipped<'a, U>(unit: &Unit, upgrades: &'a U) -> Vec<EquippedUpgrade<'a>>
where
    U: UpgradeOracle + ?Sized,
{
    let mut seen = HashSet::new();
    let mut equipped = Vec::new();

    for (slot, id) in unit.equipped_ids() {
        if !seen.insert(id) {
            tracing::warn!(
                unit = %unit.id,
                upgrade = id,
                "upgrade equipped more than once; counting it once"
            );
            continue;
        }

        match upgrades.upgrade(id) {
            Some(card) => equipped.push(EquippedUpgrade::new(slot, card)),
            None => tracing::debug!(
                unit = %unit.id,
                upgrade = id,
                "skipping equipped upgrade missing from catalog"
            ),
        }
    }

    equipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UpgradeSlot;
    use crate::vocab::{Faction, UnitType};

    #[test]
    fn skips_dangling_and_repeated_ids() {
        let catalog = vec![
            UpgradeCard::new("grapplers", "Grappling Hooks", 1),
            UpgradeCard::new("z6", "Z-6 Trooper", 22),
        ];
        let unit = Unit::new("u1", "Troopers", Faction::Rebels, UnitType::Trooper)
            .with_slot(
                UpgradeSlot::new(SlotKind::HeavyWeapon, 1)
                    .with_equipped("z6")
                    .with_equipped("deleted"),
            )
            .with_slot(
                UpgradeSlot::new(SlotKind::Gear, 1)
                    .with_equipped("grapplers")
                    .with_equipped("z6"),
            );

        let resolved: Vec<_> = resolve_equipped(&unit, &catalog)
            .into_iter()
            .map(|upgrade| (upgrade.slot, upgrade.card.id.as_str()))
            .collect();

        assert_eq!(
            resolved,
            vec![(SlotKind::HeavyWeapon, "z6"), (SlotKind::Gear, "grapplers")]
        );
    }
}
