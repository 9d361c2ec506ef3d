//! Traits describing read-only catalogs.
//!
//! Oracles expose authored records keyed by opaque string ids. The
//! [`Catalogs`] aggregate bundles the three the composition facade needs so
//! callers can hand over any storage (maps, loaded libraries, test fixtures)
//! without coupling the engine to it.
//!
//! Every lookup returns `Option`: a missing id is an expected consequence of
//! records being deleted independently, and callers skip it.
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::compose::{self, ComposedArmy, ComposedUnit};
use crate::model::{Ability, Army, CustomKeyword, Unit, UpgradeCard};

pub trait UnitOracle: Send + Sync {
    fn unit(&self, id: &str) -> Option<&Unit>;
}

pub trait UpgradeOracle: Send + Sync {
    fn upgrade(&self, id: &str) -> Option<&UpgradeCard>;
}

pub trait AbilityOracle: Send + Sync {
    fn ability(&self, id: &str) -> Option<&Ability>;
}

pub trait KeywordOracle: Send + Sync {
    fn custom_keyword(&self, id: &str) -> Option<&CustomKeyword>;
}

macro_rules! impl_map_oracle {
    ($oracle:ident, $method:ident, $record:ty) => {
        impl<S> $oracle for HashMap<String, $record, S>
        where
            S: BuildHasher + Send + Sync,
        {
            fn $method(&self, id: &str) -> Option<&$record> {
                self.get(id)
            }
        }

        impl $oracle for BTreeMap<String, $record> {
            fn $method(&self, id: &str) -> Option<&$record> {
                self.get(id)
            }
        }

        impl $oracle for [$record] {
            fn $method(&self, id: &str) -> Option<&$record> {
                self.iter().find(|record| record.id == id)
            }
        }

        impl $oracle for Vec<$record> {
            fn $method(&self, id: &str) -> Option<&$record> {
                self.as_slice().$method(id)
            }
        }
    };
}

impl_map_oracle!(UnitOracle, unit, Unit);
impl_map_oracle!(UpgradeOracle, upgrade, UpgradeCard);
impl_map_oracle!(AbilityOracle, ability, Ability);
impl_map_oracle!(KeywordOracle, custom_keyword, CustomKeyword);

/// Aggregates the catalogs consulted while composing a unit.
#[derive(Clone, Copy, Debug)]
pub struct Catalogs<'a, U, A, K>
where
    U: UpgradeOracle + ?Sized,
    A: AbilityOracle + ?Sized,
    K: KeywordOracle + ?Sized,
{
    upgrades: &'a U,
    abilities: &'a A,
    keywords: &'a K,
}

pub type RosterCatalogs<'a> =
    Catalogs<'a, dyn UpgradeOracle + 'a, dyn AbilityOracle + 'a, dyn KeywordOracle + 'a>;

impl<'a, U, A, K> Catalogs<'a, U, A, K>
where
    U: UpgradeOracle + ?Sized,
    A: AbilityOracle + ?Sized,
    K: KeywordOracle + ?Sized,
{
    pub fn new(upgrades: &'a U, abilities: &'a A, keywords: &'a K) -> Self {
        Self {
            upgrades,
            abilities,
            keywords,
        }
    }

    pub fn upgrades(&self) -> &'a U {
        self.upgrades
    }

    pub fn abilities(&self) -> &'a A {
        self.abilities
    }

    pub fn keywords(&self) -> &'a K {
        self.keywords
    }

    /// Composes `unit` against these catalogs.
    pub fn compose(&self, unit: &Unit) -> ComposedUnit {
        compose::compose(unit, self.upgrades, self.abilities, self.keywords)
    }

    /// Composes every unit of `army` against these catalogs.
    pub fn compose_army<N>(&self, army: &Army, units: &N) -> ComposedArmy
    where
        N: UnitOracle + ?Sized,
    {
        compose::compose_army(army, units, self)
    }
}

impl<'a, U, A, K> Catalogs<'a, U, A, K>
where
    U: UpgradeOracle + 'a,
    A: AbilityOracle + 'a,
    K: KeywordOracle + 'a,
{
    /// Converts into the trait-object based `RosterCatalogs` (consumes self).
    pub fn into_dyn(self) -> RosterCatalogs<'a> {
        let upgrades: &'a dyn UpgradeOracle = self.upgrades;
        let abilities: &'a dyn AbilityOracle = self.abilities;
        let keywords: &'a dyn KeywordOracle = self.keywords;
        Catalogs::new(upgrades, abilities, keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_and_slice_catalogs_agree() {
        let cards = vec![
            UpgradeCard::new("a", "Alpha", 5),
            UpgradeCard::new("b", "Bravo", 10),
        ];
        let by_id: HashMap<String, UpgradeCard> = cards
            .iter()
            .map(|card| (card.id.clone(), card.clone()))
            .collect();
        let ordered: BTreeMap<String, UpgradeCard> = by_id.clone().into_iter().collect();

        for id in ["a", "b", "missing"] {
            assert_eq!(cards.upgrade(id), by_id.upgrade(id));
            assert_eq!(by_id.upgrade(id), ordered.upgrade(id));
        }
    }

    #[test]
    fn dyn_catalogs_dispatch_to_concrete_maps() {
        let upgrades = vec![UpgradeCard::new("a", "Alpha", 5)];
        let abilities: Vec<Ability> = Vec::new();
        let keywords: Vec<CustomKeyword> = Vec::new();

        let catalogs = Catalogs::new(&upgrades, &abilities, &keywords).into_dyn();
        assert_eq!(catalogs.upgrades().upgrade("a").map(|c| c.points_cost), Some(5));
        assert!(catalogs.abilities().ability("a").is_none());
    }
}
