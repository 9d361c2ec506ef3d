use super::equipped::EquippedUpgrade;
use crate::model::Unit;

/// Base cost plus the cost of every equipped card, summed in walk order.
pub fn total_points(unit: &Unit, equipped: &[EquippedUpgrade<'_>]) -> i32 {
    equipped
        .iter()
        .fold(unit.points, |total, upgrade| {
            total.saturating_add(upgrade.card.points_cost)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UpgradeCard;
    use crate::vocab::{Faction, SlotKind, UnitType};

    #[test]
    fn sums_base_and_upgrade_costs() {
        let mut unit = Unit::new("u1", "Troopers", Faction::Rebels, UnitType::Trooper);
        unit.points = 50;
        let first = UpgradeCard::new("a", "A", 10);
        let second = UpgradeCard::new("b", "B", 15);

        let equipped = [
            EquippedUpgrade::new(SlotKind::Gear, &first),
            EquippedUpgrade::new(SlotKind::Training, &second),
        ];

        assert_eq!(total_points(&unit, &equipped), 75);
        assert_eq!(total_points(&unit, &[]), 50);
    }
}
