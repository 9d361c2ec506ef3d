//! Weapon and ability aggregation.
//!
//! Weapons from the unit and from upgrade cards are concatenated, never
//! merged: two cards adding a same-named weapon are two physical weapons.

use super::equipped::EquippedUpgrade;
use crate::model::{Ability, Source, Unit, Weapon};
use crate::oracle::AbilityOracle;

/// A weapon on a composed unit, tagged with where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcedWeapon {
    pub weapon: Weapon,
    pub source: Source,
}

/// An ability granted by an upgrade card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrantedAbility {
    pub ability: Ability,
    pub source: Source,
}

/// Intrinsic weapons first, then each equipped card's weapons in walk order.
pub fn aggregate_weapons(unit: &Unit, equipped: &[EquippedUpgrade<'_>]) -> Vec<SourcedWeapon> {
    let intrinsic = unit.weapons.iter().map(|weapon| SourcedWeapon {
        weapon: weapon.clone(),
        source: Source::BaseUnit,
    });

    let granted = equipped.iter().flat_map(|upgrade| {
        let source = upgrade.source();
        upgrade
            .card
            .effects
            .add_weapons
            .iter()
            .map(move |weapon| SourcedWeapon {
                weapon: weapon.clone(),
                source: source.clone(),
            })
    });

    intrinsic.chain(granted).collect()
}

/// The unit's own abilities in authored order. Unknown ids are skipped.
pub fn aggregate_abilities<A>(unit: &Unit, abilities: &A) -> Vec<Ability>
where
    A: AbilityOracle + ?Sized,
{
    unit.abilities
        .iter()
        .filter_map(|id| lookup(abilities, id, &unit.id))
        .cloned()
        .collect()
}

/// Abilities granted by equipped cards, kept apart from the unit's own list.
pub fn aggregate_upgrade_abilities<A>(
    equipped: &[EquippedUpgrade<'_>],
    abilities: &A,
) -> Vec<GrantedAbility>
where
    A: AbilityOracle + ?Sized,
{
    let mut granted = Vec::new();
    for upgrade in equipped {
        for id in &upgrade.card.effects.add_abilities {
            if let Some(ability) = lookup(abilities, id, &upgrade.card.id) {
                granted.push(GrantedAbility {
                    ability: ability.clone(),
                    source: upgrade.source(),
                });
            }
        }
    }
    granted
}

fn lookup<'a, A>(abilities: &'a A, id: &str, owner: &str) -> Option<&'a Ability>
where
    A: AbilityOracle + ?Sized,
{
    let ability = abilities.ability(id);
    if ability.is_none() {
        tracing::debug!(owner, ability = id, "skipping ability missing from catalog");
    }
    ability
}
