//! JSON export of composed views.
use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-printed JSON for any serializable view.
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}

#[cfg(test)]
mod tests {
    use roster_core::{
        Ability, CustomKeyword, Faction, SlotKind, Unit, UnitType, UpgradeCard, UpgradeSlot,
        compose,
    };

    use super::*;

    #[test]
    fn test_composed_unit_serializes_with_sources() {
        let mut unit = Unit::new("u1", "Troopers", Faction::Rebels, UnitType::Trooper)
            .with_slot(UpgradeSlot::new(SlotKind::Gear, 1).with_equipped("hooks"));
        unit.points = 40;
        let upgrades = vec![UpgradeCard::new("hooks", "Grappling Hooks", 1)];
        let abilities: Vec<Ability> = Vec::new();
        let keywords: Vec<CustomKeyword> = Vec::new();

        let json = render(&compose(&unit, &upgrades, &abilities, &keywords)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_points"], 41);
        assert_eq!(value["faction"], "rebels");
        assert_eq!(value["unit_type"], "trooper");
        assert_eq!(value["equipped"][0]["slot"], "gear");
    }
}
