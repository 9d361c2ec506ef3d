use super::unit::ComposedUnit;
use crate::model::Army;
use crate::oracle::{AbilityOracle, Catalogs, KeywordOracle, UnitOracle, UpgradeOracle};
use crate::vocab::Faction;

/// An army with every unit reference composed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComposedArmy {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    /// Composed units in list order. Dangling references are absent.
    pub units: Vec<ComposedUnit>,
    pub total_points: i32,
    pub points_limit: Option<i32>,
}

impl ComposedArmy {
    /// True when a limit is set and the total exceeds it.
    pub fn over_limit(&self) -> bool {
        self.points_limit
            .is_some_and(|limit| self.total_points > limit)
    }

    /// Points left under the limit; negative when over.
    pub fn remaining_points(&self) -> Option<i32> {
        self.points_limit
            .map(|limit| limit.saturating_sub(self.total_points))
    }
}

/// Composes every unit `army` references. The army total is the sum of each
/// composed unit's total; a unit listed twice counts twice.
pub fn compose_army<N, U, A, K>(
    army: &Army,
    units: &N,
    catalogs: &Catalogs<'_, U, A, K>,
) -> ComposedArmy
where
    N: UnitOracle + ?Sized,
    U: UpgradeOracle + ?Sized,
    A: AbilityOracle + ?Sized,
    K: KeywordOracle + ?Sized,
{
    let mut composed = Vec::with_capacity(army.units.len());
    for id in &army.units {
        match units.unit(id) {
            Some(unit) => composed.push(catalogs.compose(unit)),
            None => tracing::debug!(
                army = %army.id,
                unit = %id,
                "skipping army unit missing from catalog"
            ),
        }
    }

    let total_points = composed
        .iter()
        .fold(0i32, |total, unit| total.saturating_add(unit.total_points));

    ComposedArmy {
        id: army.id.clone(),
        name: army.name.clone(),
        faction: army.faction,
        units: composed,
        total_points,
        points_limit: army.points_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ability, CustomKeyword, Unit, UpgradeCard, UpgradeSlot};
    use crate::vocab::{SlotKind, UnitType};

    #[test]
    fn totals_units_and_skips_dangling_references() {
        let mut troopers = Unit::new("troopers", "Rebel Troopers", Faction::Rebels, UnitType::Trooper)
            .with_slot(UpgradeSlot::new(SlotKind::Gear, 1).with_equipped("grapplers"));
        troopers.points = 40;
        let mut leia = Unit::new("leia", "Leia Organa", Faction::Rebels, UnitType::Trooper);
        leia.points = 90;

        let units = vec![troopers, leia];
        let upgrades = vec![UpgradeCard::new("grapplers", "Grappling Hooks", 1)];
        let abilities: Vec<Ability> = Vec::new();
        let keywords: Vec<CustomKeyword> = Vec::new();
        let catalogs = Catalogs::new(&upgrades, &abilities, &keywords);

        let army = Army::new("echo", "Echo Base", Faction::Rebels)
            .with_unit("troopers")
            .with_unit("troopers")
            .with_unit("deleted")
            .with_unit("leia")
            .with_points_limit(150);

        let composed = compose_army(&army, &units, &catalogs);

        assert_eq!(composed.units.len(), 3);
        assert_eq!(composed.total_points, 41 + 41 + 90);
        assert!(composed.over_limit());
        assert_eq!(composed.remaining_points(), Some(-22));
    }

    #[test]
    fn empty_army_has_no_limit_pressure() {
        let units: Vec<Unit> = Vec::new();
        let upgrades: Vec<UpgradeCard> = Vec::new();
        let abilities: Vec<Ability> = Vec::new();
        let keywords: Vec<CustomKeyword> = Vec::new();
        let catalogs = Catalogs::new(&upgrades, &abilities, &keywords);

        let composed = compose_army(&Army::new("a", "Empty", Faction::Empire), &units, &catalogs);

        assert_eq!(composed.total_points, 0);
        assert!(!composed.over_limit());
        assert_eq!(composed.remaining_points(), None);
    }
}
